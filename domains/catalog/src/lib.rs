//! Catalog domain: project listings, categories, filter engine, company details

pub mod data;
pub mod domain;
pub mod provider;

// Re-export domain types at the crate root for convenience
pub use data::{CompanyInfo, ContactDetails, SocialLinks, Statistics, COMPANY_INFO, STATISTICS};
pub use domain::entities::{BadgeTone, ListingStatus, Project, ProjectId, ProjectType, QuickStat};
pub use domain::filter::{category_counts, filter_projects, Category, CategoryCount};
pub use provider::{CatalogProvider, StaticCatalog};
