//! Projects page: filter buttons, listing grid, property detail modal

use std::sync::Arc;

use ammaar_catalog::{CatalogProvider, Category, Project};
use ammaar_common::Result;
use ammaar_gallery::Lightbox;

use crate::links::ContactLinks;
use crate::pages::browser::{FilterButton, ProjectBrowser};

pub struct ProjectsPage {
    browser: ProjectBrowser,
    links: ContactLinks,
}

impl ProjectsPage {
    /// `initial` comes from the route's `?filter=` seed
    pub fn new(catalog: Arc<dyn CatalogProvider>, initial: Category, links: ContactLinks) -> Self {
        Self {
            browser: ProjectBrowser::new(catalog, initial),
            links,
        }
    }

    pub fn category(&self) -> &Category {
        self.browser.category()
    }

    pub fn select(&mut self, category: Category) -> &[Arc<Project>] {
        self.browser.select(category)
    }

    pub fn visible(&self) -> &[Arc<Project>] {
        self.browser.visible()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.browser.empty_message()
    }

    /// The `All` button carries no count on this page
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        self.browser.buttons(false)
    }

    pub fn open(&mut self, id: &str) -> Result<()> {
        self.browser.open(id)
    }

    pub fn close(&mut self) -> bool {
        self.browser.close()
    }

    pub fn lightbox(&self) -> &Lightbox {
        self.browser.lightbox()
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        self.browser.lightbox_mut()
    }

    /// WhatsApp enquiry for the project shown in the modal
    pub fn enquiry_link(&self) -> Option<String> {
        self.lightbox()
            .selection()
            .map(|project| self.links.project_enquiry(project))
    }

    pub fn call_link(&self) -> String {
        self.links.call()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::browser::tests::sample_catalog;
    use ammaar_catalog::ProjectType;

    #[test]
    fn test_seeded_category_applies_immediately() {
        let page = ProjectsPage::new(
            sample_catalog(),
            Category::Type(ProjectType::Farmland),
            ContactLinks::default(),
        );
        assert_eq!(page.visible().len(), 2);
        let active: Vec<String> = page
            .filter_buttons()
            .into_iter()
            .filter(|b| b.active)
            .map(|b| b.caption())
            .collect();
        assert_eq!(active, ["Farmland (2)"]);
    }

    #[test]
    fn test_enquiry_link_follows_selection() {
        let mut page = ProjectsPage::new(sample_catalog(), Category::All, ContactLinks::default());
        assert_eq!(page.enquiry_link(), None);

        page.open("r2").unwrap();
        let link = page.enquiry_link().unwrap();
        assert!(link.starts_with("https://wa.me/919876543210?text="));
        assert!(link.contains("Project%20r2"));

        page.close();
        assert_eq!(page.enquiry_link(), None);
    }

    #[test]
    fn test_modal_navigation_resets_between_projects() {
        let mut page = ProjectsPage::new(sample_catalog(), Category::All, ContactLinks::default());
        page.open("r3").unwrap();
        page.lightbox_mut().next();
        page.lightbox_mut().next();
        assert_eq!(page.lightbox().image_index(), Some(2));

        page.close();
        page.open("r1").unwrap();
        assert_eq!(page.lightbox().image_index(), Some(0));
    }

    #[test]
    fn test_single_image_project_has_no_navigation() {
        let mut page = ProjectsPage::new(sample_catalog(), Category::All, ContactLinks::default());
        page.open("f1").unwrap();
        assert!(!page.lightbox().has_navigation());
        assert_eq!(page.lightbox_mut().next(), None);
    }
}
