//! Lead submission workflow
//!
//! Validates an inquiry, hands it to the configured sink and, when the sink
//! cannot deliver it, offers a prefilled WhatsApp chat instead. Delivery
//! failures never reach the caller.

use std::fmt;
use std::sync::Arc;

use crate::content::{fallback_message, whatsapp_link};
use crate::{DeliveryReceipt, DeliveryStatus, LeadError, LeadInquiry, LeadSink};

/// Why the fallback was offered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The sink returned an error
    DeliveryFailed(String),
    /// The request went out but unconfirmed deliveries are not trusted
    Unconfirmed,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::DeliveryFailed(reason) => write!(f, "delivery failed: {}", reason),
            FallbackReason::Unconfirmed => f.write_str("delivery unconfirmed"),
        }
    }
}

/// Prefilled WhatsApp chat offered in place of form delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackLink {
    pub url: String,
    pub message: String,
    pub reason: FallbackReason,
}

#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Accepted(DeliveryReceipt),
    Fallback(FallbackLink),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }

    pub fn fallback(&self) -> Option<&FallbackLink> {
        match self {
            SubmissionOutcome::Fallback(link) => Some(link),
            SubmissionOutcome::Accepted(_) => None,
        }
    }
}

/// Sends inquiries through a sink with a WhatsApp fallback
#[derive(Clone)]
pub struct LeadSubmitter {
    sink: Arc<dyn LeadSink>,
    whatsapp: String,
    accept_unconfirmed: bool,
}

impl LeadSubmitter {
    pub fn new(sink: Arc<dyn LeadSink>, whatsapp: impl Into<String>) -> Self {
        Self {
            sink,
            whatsapp: whatsapp.into(),
            accept_unconfirmed: true,
        }
    }

    pub fn with_accept_unconfirmed(mut self, accept: bool) -> Self {
        self.accept_unconfirmed = accept;
        self
    }

    pub fn provider_name(&self) -> &'static str {
        self.sink.provider_name()
    }

    /// Submit an inquiry. Only a validation failure is an error.
    pub async fn submit(&self, inquiry: &LeadInquiry) -> Result<SubmissionOutcome, LeadError> {
        inquiry.check()?;

        let reason = match self.sink.submit(inquiry).await {
            Ok(receipt)
                if receipt.status == DeliveryStatus::Confirmed || self.accept_unconfirmed =>
            {
                tracing::info!(
                    submission_id = %receipt.submission_id,
                    provider = %receipt.provider,
                    status = ?receipt.status,
                    "Lead accepted"
                );
                return Ok(SubmissionOutcome::Accepted(receipt));
            }
            Ok(_) => FallbackReason::Unconfirmed,
            Err(e) => FallbackReason::DeliveryFailed(e.to_string()),
        };

        tracing::warn!(
            provider = self.sink.provider_name(),
            %reason,
            "Lead not delivered, offering WhatsApp fallback"
        );

        let message = fallback_message(inquiry);
        Ok(SubmissionOutcome::Fallback(FallbackLink {
            url: whatsapp_link(&self.whatsapp, &message),
            message,
            reason,
        }))
    }
}

impl fmt::Debug for LeadSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadSubmitter")
            .field("provider", &self.sink.provider_name())
            .field("whatsapp", &self.whatsapp)
            .field("accept_unconfirmed", &self.accept_unconfirmed)
            .finish()
    }
}
