//! Google Forms Lead Sink
//!
//! POSTs a URL-encoded form body to a Google Forms `formResponse`
//! endpoint. In opaque mode the response is never inspected, so a
//! delivered request is reported as unconfirmed.

use crate::{
    DeliveryMode, DeliveryReceipt, DeliveryStatus, LeadConfig, LeadError, LeadInquiry, LeadSink,
};

pub const FIELD_NAME: &str = "entry.23900039";
pub const FIELD_PHONE: &str = "entry.1000509920";
pub const FIELD_EMAIL: &str = "entry.29073643";
pub const FIELD_INTEREST: &str = "entry.177355161";
pub const FIELD_MESSAGE: &str = "entry.1533124499";

/// Google Forms client
pub struct GoogleFormsClient {
    http: reqwest::Client,
    form_url: String,
    mode: DeliveryMode,
}

impl GoogleFormsClient {
    /// Create a new client from configuration
    pub fn new(config: &LeadConfig) -> Result<Self, LeadError> {
        if config.form_url.trim().is_empty() {
            return Err(LeadError::Configuration(
                "LEADS_FORM_URL must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LeadError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            form_url: config.form_url.clone(),
            mode: config.delivery_mode,
        })
    }

    pub fn form_url(&self) -> &str {
        &self.form_url
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Form fields in submission order; absent optionals are sent empty
    pub fn form_fields(inquiry: &LeadInquiry) -> [(&'static str, &str); 5] {
        [
            (FIELD_NAME, inquiry.name.as_str()),
            (FIELD_PHONE, inquiry.phone.as_str()),
            (FIELD_EMAIL, inquiry.email_or_empty()),
            (FIELD_INTEREST, inquiry.interest.label()),
            (FIELD_MESSAGE, inquiry.message_or_empty()),
        ]
    }
}

#[async_trait::async_trait]
impl LeadSink for GoogleFormsClient {
    async fn submit(&self, inquiry: &LeadInquiry) -> Result<DeliveryReceipt, LeadError> {
        let fields = Self::form_fields(inquiry);
        let response = self
            .http
            .post(&self.form_url)
            .form(&fields[..])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LeadError::Request(format!("Form submission timed out: {}", e))
                } else {
                    LeadError::Request(e.to_string())
                }
            })?;

        let status = match self.mode {
            DeliveryMode::Opaque => DeliveryStatus::Unconfirmed,
            DeliveryMode::Confirmed => {
                if !response.status().is_success() {
                    return Err(LeadError::Response(format!(
                        "Form endpoint returned {}",
                        response.status()
                    )));
                }
                DeliveryStatus::Confirmed
            }
        };

        tracing::debug!(
            provider = self.provider_name(),
            interest = %inquiry.interest,
            ?status,
            "Lead dispatched"
        );

        Ok(DeliveryReceipt::new(self.provider_name(), status))
    }

    fn provider_name(&self) -> &'static str {
        "google-forms"
    }
}
