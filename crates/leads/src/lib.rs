//! Ammaar Lead Capture
//!
//! Provides the contact-form submission path with support for:
//! - Google Forms delivery over a URL-encoded POST
//! - Mock lead sink for testing and development
//! - WhatsApp deep-link fallback when delivery fails

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub mod content;
pub mod google_forms;
pub mod mock;
pub mod submission;

pub use submission::{FallbackLink, FallbackReason, LeadSubmitter, SubmissionOutcome};

/// Google Forms endpoint the site posts inquiries to
pub const DEFAULT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScOWE5vCKN9P3khOPFYP68zNZ-9X0wpJWaHTViW1yctfEoE3A/formResponse";

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Lead configuration error: {0}")]
    Configuration(String),

    #[error("Lead validation error: {0}")]
    Validation(String),

    #[error("Lead request error: {0}")]
    Request(String),

    #[error("Lead response error: {0}")]
    Response(String),
}

/// What the visitor is interested in (the form's select box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interest {
    #[default]
    #[serde(rename = "Residential Property")]
    ResidentialProperty,
    #[serde(rename = "Farm Lands")]
    FarmLands,
    Investment,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::ResidentialProperty,
        Interest::FarmLands,
        Interest::Investment,
        Interest::Other,
    ];

    /// Value submitted to the form and quoted in the fallback message
    pub fn label(&self) -> &'static str {
        match self {
            Interest::ResidentialProperty => "Residential Property",
            Interest::FarmLands => "Farm Lands",
            Interest::Investment => "Investment",
            Interest::Other => "Other",
        }
    }

    /// Text shown in the select box
    pub fn option_text(&self) -> &'static str {
        match self {
            Interest::ResidentialProperty => "Residential Property",
            Interest::FarmLands => "Farm Lands / Plots",
            Interest::Investment => "Investment Opportunity",
            Interest::Other => "Other Inquiry",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LeadError::Validation(format!("Unknown interest '{}'", s)))
    }
}

/// Required fields only need some content; the value itself is free-form
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

/// A prospective-customer inquiry from one of the contact forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LeadInquiry {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    pub interest: Interest,
    pub message: Option<String>,
}

impl LeadInquiry {
    /// Create an inquiry from the two required fields, kept as typed
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            interest: Interest::default(),
            message: None,
        }
    }

    /// Optional email; blank input counts as absent
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into().trim().to_string()).filter(|e| !e.is_empty());
        self
    }

    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interest = interest;
        self
    }

    /// Optional free-text message, kept as typed; blank input counts as absent
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into()).filter(|m| !m.trim().is_empty());
        self
    }

    /// Check the form-level preconditions
    pub fn check(&self) -> Result<(), LeadError> {
        self.validate()
            .map_err(|e| LeadError::Validation(e.to_string()))
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Whether the transport lets us observe the endpoint's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Fire-and-forget: the response is never inspected
    #[default]
    Opaque,
    /// The response status decides success
    Confirmed,
}

impl FromStr for DeliveryMode {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opaque" => Ok(DeliveryMode::Opaque),
            "confirmed" => Ok(DeliveryMode::Confirmed),
            other => Err(LeadError::Configuration(format!(
                "Unknown delivery mode: {}. Supported modes: opaque, confirmed",
                other
            ))),
        }
    }
}

/// How much we know about a dispatched inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// The endpoint acknowledged the submission
    Confirmed,
    /// The request went out but its result is unknown
    Unconfirmed,
}

/// Delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub provider: String,
    pub status: DeliveryStatus,
}

impl DeliveryReceipt {
    pub fn new(provider: &str, status: DeliveryStatus) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            provider: provider.to_string(),
            status,
        }
    }
}

/// Lead capture configuration
#[derive(Debug, Clone)]
pub struct LeadConfig {
    /// Lead sink provider (google-forms, mock)
    pub provider: String,
    /// Form endpoint
    pub form_url: String,
    pub delivery_mode: DeliveryMode,
    pub timeout: Duration,
    /// Treat an unconfirmed delivery as a success
    pub accept_unconfirmed: bool,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            form_url: DEFAULT_FORM_URL.to_string(),
            delivery_mode: DeliveryMode::default(),
            timeout: Duration::from_secs(10),
            accept_unconfirmed: true,
        }
    }
}

impl LeadConfig {
    /// Create lead config from environment variables
    pub fn from_env() -> Result<Self, LeadError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let provider = std::env::var("LEADS_PROVIDER").unwrap_or(defaults.provider);
        let form_url = std::env::var("LEADS_FORM_URL").unwrap_or(defaults.form_url);

        let delivery_mode = match std::env::var("LEADS_DELIVERY_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.delivery_mode,
        };

        let timeout = match std::env::var("LEADS_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|_| {
                LeadError::Configuration(format!("LEADS_TIMEOUT_SECS is invalid: '{}'", raw))
            })?,
            Err(_) => defaults.timeout,
        };

        let accept_unconfirmed = std::env::var("LEADS_ACCEPT_UNCONFIRMED")
            .map(|raw| raw.parse().unwrap_or(true))
            .unwrap_or(defaults.accept_unconfirmed);

        Ok(Self {
            provider,
            form_url,
            delivery_mode,
            timeout,
            accept_unconfirmed,
        })
    }
}

/// Destination for lead inquiries
#[async_trait::async_trait]
pub trait LeadSink: Send + Sync {
    /// Dispatch one inquiry
    async fn submit(&self, inquiry: &LeadInquiry) -> Result<DeliveryReceipt, LeadError>;

    /// Short provider name for logs and receipts
    fn provider_name(&self) -> &'static str;
}

/// Lead sink factory
pub struct LeadSinkFactory;

impl LeadSinkFactory {
    /// Create a lead sink based on configuration
    pub fn create(config: LeadConfig) -> Result<Box<dyn LeadSink>, LeadError> {
        match config.provider.as_str() {
            "google-forms" | "google" => {
                tracing::info!("Creating Google Forms lead sink");
                let client = google_forms::GoogleFormsClient::new(&config)?;
                Ok(Box::new(client))
            }
            "mock" => {
                tracing::info!("Creating mock lead sink");
                Ok(Box::new(mock::MockLeadSink::new()))
            }
            provider => Err(LeadError::Configuration(format!(
                "Unknown lead provider: {}. Supported providers: google-forms, mock",
                provider
            ))),
        }
    }
}
