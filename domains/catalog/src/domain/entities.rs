//! Domain entities for the Catalog domain
//!
//! Projects are immutable once loaded. Construction goes through
//! [`Project::new`] plus the `with_*` builders, and [`Project::validate`]
//! enforces the invariants every consumer relies on (most importantly a
//! non-empty image sequence, which the carousels require).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ammaar_common::{Error, Result};

/// Project category. Closed set declared alongside the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Residential,
    Farmland,
}

impl ProjectType {
    /// Every project type in declaration order
    pub const ALL: [ProjectType; 2] = [ProjectType::Residential, ProjectType::Farmland];

    /// Display label, also used as the filter key
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Farmland => "Farmland",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown project type '{}'", s)))
    }
}

/// Sales status shown on the listing badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "Ready to Move")]
    ReadyToMove,
    #[serde(rename = "Selling Fast")]
    SellingFast,
    #[serde(rename = "Under Development")]
    UnderDevelopment,
    #[serde(rename = "New Launch")]
    NewLaunch,
}

/// Colour family of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Urgent,
    Accent,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ReadyToMove => "Ready to Move",
            ListingStatus::SellingFast => "Selling Fast",
            ListingStatus::UnderDevelopment => "Under Development",
            ListingStatus::NewLaunch => "New Launch",
        }
    }

    /// Badge tone: green for ready, red for selling fast, accent otherwise
    pub fn tone(&self) -> BadgeTone {
        match self {
            ListingStatus::ReadyToMove => BadgeTone::Success,
            ListingStatus::SellingFast => BadgeTone::Urgent,
            ListingStatus::UnderDevelopment | ListingStatus::NewLaunch => BadgeTone::Accent,
        }
    }
}

impl fmt::Display for ListingStatus {
    #[mutants::skip] // Delegates to label(), which is covered directly
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable project identifier (URL-safe slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One labelled figure in the modal's quick-stats strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

/// Project listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ListingStatus,
    pub location: String,
    pub price: String,
    pub surface: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Project {
    /// Maximum title length accepted in the catalog
    pub const MAX_TITLE_LEN: usize = 120;

    /// Create a new project with validation
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        project_type: ProjectType,
        status: ListingStatus,
        images: Vec<String>,
    ) -> Result<Self> {
        let project = Project {
            id: id.into(),
            title: title.into(),
            project_type,
            status,
            location: String::new(),
            price: String::new(),
            surface: String::new(),
            description: String::new(),
            images,
            bedrooms: None,
            bathrooms: None,
            year_built: None,
            features: Vec::new(),
        };
        project.validate()?;
        Ok(project)
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_surface(mut self, surface: impl Into<String>) -> Self {
        self.surface = surface.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Bedroom and bathroom counts (residential listings only)
    pub fn with_rooms(mut self, bedrooms: u8, bathrooms: u8) -> Self {
        self.bedrooms = Some(bedrooms);
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_year_built(mut self, year: u16) -> Self {
        self.year_built = Some(year);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(Error::Validation("Project id must not be empty".to_string()));
        }

        if self.title.trim().is_empty() || self.title.len() > Self::MAX_TITLE_LEN {
            return Err(Error::Validation(format!(
                "Project '{}' title must be 1-{} characters",
                self.id,
                Self::MAX_TITLE_LEN
            )));
        }

        if self.images.is_empty() {
            return Err(Error::Validation(format!(
                "Project '{}' must have at least one image",
                self.id
            )));
        }

        if self.images.iter().any(|url| url.trim().is_empty()) {
            return Err(Error::Validation(format!(
                "Project '{}' has a blank image reference",
                self.id
            )));
        }

        Ok(())
    }

    /// Card thumbnail: the first image
    pub fn cover_image(&self) -> &str {
        // Non-empty by construction; `validate` rejects an empty sequence
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }

    /// Figures shown under the title. Area is always present; the rest
    /// only when the listing carries them.
    pub fn quick_stats(&self) -> Vec<QuickStat> {
        let mut stats = vec![QuickStat {
            label: "Area",
            value: self.surface.clone(),
        }];
        if let Some(bedrooms) = self.bedrooms {
            stats.push(QuickStat {
                label: "Bedrooms",
                value: format!("{} BHK", bedrooms),
            });
        }
        if let Some(bathrooms) = self.bathrooms {
            stats.push(QuickStat {
                label: "Bathrooms",
                value: bathrooms.to_string(),
            });
        }
        if let Some(year) = self.year_built {
            stats.push(QuickStat {
                label: "Year",
                value: year.to_string(),
            });
        }
        stats
    }
}
