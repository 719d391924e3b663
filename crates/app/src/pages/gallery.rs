//! Gallery page: image grid filtered by category with a counting lightbox

use std::sync::Arc;

use ammaar_catalog::{CatalogProvider, Category, Project};
use ammaar_common::Result;
use ammaar_gallery::Lightbox;

use crate::pages::browser::{FilterButton, ProjectBrowser};

pub struct GalleryPage {
    browser: ProjectBrowser,
}

impl GalleryPage {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            browser: ProjectBrowser::new(catalog, Category::All),
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

    /// Every button, `All` included, shows its count here
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        self.browser.buttons(true)
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

    /// "n of m" under the lightbox image
    pub fn counter(&self) -> Option<String> {
        self.lightbox().position_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::browser::tests::sample_catalog;
    use ammaar_catalog::ProjectType;

    #[test]
    fn test_gallery_counts_include_all() {
        let page = GalleryPage::new(sample_catalog());
        assert_eq!(page.filter_buttons()[0].caption(), "All (5)");
        assert_eq!(page.category(), &Category::All);
    }

    #[test]
    fn test_counter_tracks_navigation() {
        let mut page = GalleryPage::new(sample_catalog());
        assert_eq!(page.counter(), None);

        page.open("r1").unwrap();
        assert_eq!(page.counter().as_deref(), Some("1 of 3"));
        page.lightbox_mut().prev();
        assert_eq!(page.counter().as_deref(), Some("3 of 3"));
        page.lightbox_mut().goto(1).unwrap();
        assert_eq!(page.counter().as_deref(), Some("2 of 3"));
    }

    #[test]
    fn test_filter_keeps_open_lightbox() {
        let mut page = GalleryPage::new(sample_catalog());
        page.open("r1").unwrap();
        page.select(Category::Type(ProjectType::Farmland));
        assert!(page.lightbox().is_open());
        assert_eq!(page.visible().len(), 2);
    }
}
