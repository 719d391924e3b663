//! Catalog provider
//!
//! Pages read listings through [`CatalogProvider`]; [`StaticCatalog`] is the
//! implementation backed by the content in [`crate::data`], loaded once at
//! startup and never mutated afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use ammaar_common::{Error, Result};

use crate::data::seed_projects;
use crate::domain::entities::Project;
use crate::domain::filter::{category_counts, filter_projects, Category, CategoryCount};

/// Read-only access to the project listings
pub trait CatalogProvider: Send + Sync {
    /// Every project in catalog order
    fn all_projects(&self) -> &[Arc<Project>];

    /// Look up a project by id
    fn find(&self, id: &str) -> Option<Arc<Project>> {
        self.all_projects()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
    }

    /// The first `count` projects (hero slides, featured section)
    fn featured(&self, count: usize) -> &[Arc<Project>] {
        let all = self.all_projects();
        &all[..count.min(all.len())]
    }

    /// Visible subset for a filter category
    fn filter(&self, category: &Category) -> Vec<Arc<Project>> {
        filter_projects(self.all_projects(), category)
    }

    /// Filter button counts
    fn counts(&self) -> Vec<CategoryCount> {
        category_counts(self.all_projects())
    }
}

/// Immutable in-memory catalog
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    projects: Vec<Arc<Project>>,
}

impl StaticCatalog {
    /// Load the bundled site listings
    pub fn load() -> Result<Self> {
        let catalog = Self::from_projects(seed_projects()?)?;
        tracing::info!(projects = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from arbitrary listings, validating each one and
    /// rejecting duplicate ids
    pub fn from_projects(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id.clone()) {
                return Err(Error::Validation(format!(
                    "Duplicate project id '{}'",
                    project.id
                )));
            }
        }

        Ok(Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn all_projects(&self) -> &[Arc<Project>] {
        &self.projects
    }
}
