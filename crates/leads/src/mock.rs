//! Mock Lead Sink Implementation
//!
//! Programmable in-memory sink for tests and local development:
//! - `MockLeadSink`: records every inquiry it receives
//! - `MockOutcome`: Confirm, Unconfirmed, or Fail

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::{DeliveryReceipt, DeliveryStatus, LeadError, LeadInquiry, LeadSink};

/// What outcome the mock should produce
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MockOutcome {
    /// Acknowledge the inquiry
    #[default]
    Confirm,
    /// Accept the inquiry without confirming it (opaque transport)
    Unconfirmed,
    /// Reject with a request error carrying this reason
    Fail(String),
}

/// Inquiry captured by the mock sink
#[derive(Debug, Clone)]
pub struct RecordedLead {
    pub inquiry: LeadInquiry,
    pub received_at: DateTime<Utc>,
}

/// Mock lead sink with programmable outcome
#[derive(Debug, Clone, Default)]
pub struct MockLeadSink {
    outcome: Arc<RwLock<MockOutcome>>,
    history: Arc<Mutex<Vec<RecordedLead>>>,
}

impl MockLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that fails every submission
    pub fn failing(reason: impl Into<String>) -> Self {
        let sink = Self::new();
        sink.set_outcome(MockOutcome::Fail(reason.into()));
        sink
    }

    /// Configure the mock outcome
    pub fn set_outcome(&self, outcome: MockOutcome) {
        *self.outcome.write().unwrap_or_else(PoisonError::into_inner) = outcome;
    }

    /// Read current outcome
    pub fn outcome(&self) -> MockOutcome {
        self.outcome.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Get recorded inquiries
    pub fn recorded(&self) -> Vec<RecordedLead> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn submission_count(&self) -> usize {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Clear history
    pub fn reset_history(&self) {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[async_trait::async_trait]
impl LeadSink for MockLeadSink {
    async fn submit(&self, inquiry: &LeadInquiry) -> Result<DeliveryReceipt, LeadError> {
        tracing::info!(interest = %inquiry.interest, "Mock lead sink: received inquiry");

        self.history.lock().unwrap_or_else(PoisonError::into_inner).push(RecordedLead {
            inquiry: inquiry.clone(),
            received_at: Utc::now(),
        });

        match self.outcome() {
            MockOutcome::Confirm => Ok(DeliveryReceipt::new(
                self.provider_name(),
                DeliveryStatus::Confirmed,
            )),
            MockOutcome::Unconfirmed => Ok(DeliveryReceipt::new(
                self.provider_name(),
                DeliveryStatus::Unconfirmed,
            )),
            MockOutcome::Fail(reason) => Err(LeadError::Request(reason)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
