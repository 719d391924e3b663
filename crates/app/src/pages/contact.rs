//! Contact form lifecycle
//!
//! ```text
//! Idle            --Submit-----> Submitting
//! FallbackOffered --Submit-----> Submitting
//! Submitting      --Delivered--> Submitted        (fields reset)
//! Submitting      --Fallback---> FallbackOffered  (fields kept)
//! Submitting      --Rejected---> Idle
//! Submitted       --SendAnother-> Idle
//! ```

use ammaar_common::{Error, Result, StateError};
use ammaar_leads::{
    DeliveryReceipt, FallbackLink, Interest, LeadError, LeadInquiry, LeadSubmitter,
    SubmissionOutcome,
};

/// Raw field values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub interest: Interest,
    pub message: String,
}

impl ContactFields {
    pub fn to_inquiry(&self) -> LeadInquiry {
        LeadInquiry::new(&self.name, &self.phone)
            .with_email(&self.email)
            .with_interest(self.interest)
            .with_message(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    FallbackOffered,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Submitted => write!(f, "submitted"),
            Self::FallbackOffered => write!(f, "fallback_offered"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Delivered,
    Fallback,
    Rejected,
    SendAnother,
}

impl std::fmt::Display for FormEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Delivered => write!(f, "delivered"),
            Self::Fallback => write!(f, "fallback"),
            Self::Rejected => write!(f, "rejected"),
            Self::SendAnother => write!(f, "send_another"),
        }
    }
}

/// Contact form state machine
pub struct FormStateMachine;

impl FormStateMachine {
    pub fn transition(
        current: FormPhase,
        event: FormEvent,
    ) -> std::result::Result<FormPhase, StateError> {
        match (current, event) {
            (FormPhase::Idle | FormPhase::FallbackOffered, FormEvent::Submit) => {
                Ok(FormPhase::Submitting)
            }
            (FormPhase::Submitting, FormEvent::Delivered) => Ok(FormPhase::Submitted),
            (FormPhase::Submitting, FormEvent::Fallback) => Ok(FormPhase::FallbackOffered),
            (FormPhase::Submitting, FormEvent::Rejected) => Ok(FormPhase::Idle),
            (FormPhase::Submitted, FormEvent::SendAnother) => Ok(FormPhase::Idle),
            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }

    pub fn can_transition(current: FormPhase, event: FormEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}

/// The inquiry form on the home and contact pages
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
    receipt: Option<DeliveryReceipt>,
    fallback: Option<FallbackLink>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit button shows its spinner
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn receipt(&self) -> Option<&DeliveryReceipt> {
        self.receipt.as_ref()
    }

    /// WhatsApp chat offered after a failed delivery
    pub fn fallback(&self) -> Option<&FallbackLink> {
        self.fallback.as_ref()
    }

    /// Send the current fields. Invalid input leaves the form idle with its
    /// fields untouched.
    pub async fn submit(&mut self, submitter: &LeadSubmitter) -> Result<FormPhase> {
        self.apply(FormEvent::Submit)?;

        match submitter.submit(&self.fields.to_inquiry()).await {
            Ok(SubmissionOutcome::Accepted(receipt)) => {
                self.fields = ContactFields::default();
                self.receipt = Some(receipt);
                self.fallback = None;
                self.apply(FormEvent::Delivered)?;
            }
            Ok(SubmissionOutcome::Fallback(link)) => {
                self.fallback = Some(link);
                self.apply(FormEvent::Fallback)?;
            }
            Err(e) => {
                self.fallback = None;
                self.apply(FormEvent::Rejected)?;
                return Err(match e {
                    LeadError::Validation(msg) => Error::Validation(msg),
                    other => Error::Internal(other.to_string()),
                });
            }
        }

        Ok(self.phase)
    }

    /// "Send another message" on the thank-you panel
    pub fn send_another(&mut self) -> Result<()> {
        self.apply(FormEvent::SendAnother)?;
        self.receipt = None;
        Ok(())
    }

    fn apply(&mut self, event: FormEvent) -> Result<()> {
        self.phase = FormStateMachine::transition(self.phase, event)
            .map_err(|e| Error::Validation(e.to_string()))?;
        Ok(())
    }
}
