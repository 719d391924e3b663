//! Filterable project grid with a detail lightbox
//!
//! Shared by the Projects and Gallery pages: both keep a selected category,
//! recompute the visible subset whenever it changes, and open the same
//! single-focus lightbox from a card.

use std::sync::Arc;

use ammaar_catalog::{CatalogProvider, Category, Project};
use ammaar_common::{Error, Result};
use ammaar_gallery::Lightbox;

/// Shown in place of the grid when a category has no projects
pub const EMPTY_STATE_TEXT: &str = "No projects found in this category.";

/// One filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: Category,
    pub count: Option<usize>,
    pub active: bool,
}

impl FilterButton {
    pub fn caption(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.category.label(), count),
            None => self.category.label().to_string(),
        }
    }
}

pub struct ProjectBrowser {
    catalog: Arc<dyn CatalogProvider>,
    category: Category,
    visible: Vec<Arc<Project>>,
    lightbox: Lightbox,
}

impl ProjectBrowser {
    pub fn new(catalog: Arc<dyn CatalogProvider>, category: Category) -> Self {
        let visible = catalog.filter(&category);
        Self {
            catalog,
            category,
            visible,
            lightbox: Lightbox::new(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Switch category and recompute the visible subset
    pub fn select(&mut self, category: Category) -> &[Arc<Project>] {
        self.visible = self.catalog.filter(&category);
        tracing::debug!(
            category = %category,
            visible = self.visible.len(),
            "Filter applied"
        );
        self.category = category;
        &self.visible
    }

    pub fn visible(&self) -> &[Arc<Project>] {
        &self.visible
    }

    /// Empty-state text when the current category has nothing to show
    pub fn empty_message(&self) -> Option<&'static str> {
        self.visible.is_empty().then_some(EMPTY_STATE_TEXT)
    }

    /// Filter buttons in display order. `count_all` decides whether the
    /// `All` button carries a count too.
    pub fn buttons(&self, count_all: bool) -> Vec<FilterButton> {
        self.catalog
            .counts()
            .into_iter()
            .map(|c| FilterButton {
                active: c.category == self.category,
                count: (count_all || c.category != Category::All).then_some(c.count),
                category: c.category,
            })
            .collect()
    }

    /// Open the lightbox on a project
    pub fn open(&mut self, id: &str) -> Result<()> {
        let project = self
            .catalog
            .find(id)
            .ok_or_else(|| Error::NotFound(format!("Project '{}'", id)))?;
        self.lightbox
            .open(project)
            .map_err(|e| Error::Internal(e.to_string()))
    }

    pub fn close(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ammaar_catalog::{ListingStatus, ProjectType, StaticCatalog};

    fn project(id: &str, project_type: ProjectType, images: usize) -> Project {
        Project::new(
            id,
            format!("Project {}", id),
            project_type,
            ListingStatus::NewLaunch,
            (0..images).map(|i| format!("https://img/{}/{}.jpg", id, i)).collect(),
        )
        .unwrap()
    }

    /// Five listings, two of them farmland
    pub(crate) fn sample_catalog() -> Arc<dyn CatalogProvider> {
        Arc::new(
            StaticCatalog::from_projects(vec![
                project("r1", ProjectType::Residential, 3),
                project("f1", ProjectType::Farmland, 1),
                project("r2", ProjectType::Residential, 2),
                project("f2", ProjectType::Farmland, 2),
                project("r3", ProjectType::Residential, 4),
            ])
            .unwrap(),
        )
    }

    fn ids(projects: &[Arc<Project>]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_initial_category_all_shows_everything() {
        let browser = ProjectBrowser::new(sample_catalog(), Category::All);
        assert_eq!(ids(browser.visible()), ["r1", "f1", "r2", "f2", "r3"]);
        assert_eq!(browser.empty_message(), None);
    }

    #[test]
    fn test_select_recomputes_visible() {
        let mut browser = ProjectBrowser::new(sample_catalog(), Category::All);
        let visible = browser.select(Category::Type(ProjectType::Farmland));
        assert_eq!(ids(visible), ["f1", "f2"]);
        assert_eq!(browser.category(), &Category::Type(ProjectType::Farmland));
    }

    #[test]
    fn test_unknown_category_shows_empty_state() {
        let mut browser = ProjectBrowser::new(sample_catalog(), Category::All);
        browser.select(Category::parse("Commercial"));
        assert!(browser.visible().is_empty());
        assert_eq!(browser.empty_message(), Some(EMPTY_STATE_TEXT));
    }

    #[test]
    fn test_buttons_with_and_without_all_count() {
        let browser = ProjectBrowser::new(sample_catalog(), Category::All);

        let captions: Vec<String> = browser.buttons(true).iter().map(FilterButton::caption).collect();
        assert_eq!(captions, ["All (5)", "Residential (3)", "Farmland (2)"]);

        let buttons = browser.buttons(false);
        assert_eq!(buttons[0].caption(), "All");
        assert!(buttons[0].active);
        assert!(!buttons[1].active);
    }

    #[test]
    fn test_open_and_close_lightbox() {
        let mut browser = ProjectBrowser::new(sample_catalog(), Category::All);
        browser.open("r3").unwrap();
        assert!(browser.lightbox().is_open());
        assert_eq!(browser.lightbox().current_image(), Some("https://img/r3/0.jpg"));

        assert!(browser.close());
        assert!(!browser.lightbox().is_open());
    }

    #[test]
    fn test_open_unknown_project() {
        let mut browser = ProjectBrowser::new(sample_catalog(), Category::All);
        let err = browser.open("nope").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(!browser.lightbox().is_open());
    }
}
