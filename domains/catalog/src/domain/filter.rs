//! Category filter engine
//!
//! Pure functions over the catalog. Filtering never fails: a category that
//! no project carries simply yields an empty result, which the pages show
//! as the "no projects found" state.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::{Project, ProjectType};

/// Label of the catch-all category
pub const ALL_LABEL: &str = "All";

/// Filter state: everything, one project type, or a label no type matches
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Type(ProjectType),
    Unknown(String),
}

impl Category {
    /// Parse a category label. Labels that match no project type are kept
    /// as [`Category::Unknown`] so filtering by them yields nothing.
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return Category::All;
        }
        match label.parse::<ProjectType>() {
            Ok(project_type) => Category::Type(project_type),
            Err(_) => Category::Unknown(label.to_string()),
        }
    }

    /// Seed the initial category from a `?filter=` query value.
    ///
    /// A missing or empty parameter selects [`Category::All`]. Any other
    /// value is parsed as a label, so an unknown one shows the empty state.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()).map(Self::parse) {
            Some(Category::Unknown(raw)) => {
                tracing::debug!(filter = %raw, "Filter query value matches no project type");
                Category::Unknown(raw)
            }
            Some(category) => category,
            None => Category::All,
        }
    }

    /// Filter buttons in display order: `All`, then each project type
    pub fn all_choices() -> Vec<Category> {
        std::iter::once(Category::All)
            .chain(ProjectType::ALL.into_iter().map(Category::Type))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Type(project_type) => project_type.label(),
            Category::Unknown(raw) => raw,
        }
    }

    /// Whether a project belongs to this category
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Type(project_type) => project.project_type == *project_type,
            Category::Unknown(_) => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ProjectType> for Category {
    fn from(value: ProjectType) -> Self {
        Category::Type(value)
    }
}

/// Order-preserving filter over the catalog.
///
/// `All` returns every entry, sharing the catalog's `Arc`s.
pub fn filter_projects(catalog: &[Arc<Project>], category: &Category) -> Vec<Arc<Project>> {
    let visible: Vec<Arc<Project>> = match category {
        Category::All => catalog.to_vec(),
        _ => catalog
            .iter()
            .filter(|project| category.matches(project))
            .cloned()
            .collect(),
    };

    tracing::debug!(
        category = %category,
        total = catalog.len(),
        visible = visible.len(),
        "Filtered catalog"
    );

    visible
}

/// Count shown next to a filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Counts for every filter button, in [`Category::all_choices`] order
pub fn category_counts(catalog: &[Arc<Project>]) -> Vec<CategoryCount> {
    Category::all_choices()
        .into_iter()
        .map(|category| {
            let count = catalog.iter().filter(|p| category.matches(p)).count();
            CategoryCount { category, count }
        })
        .collect()
}
