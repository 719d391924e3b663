//! State machine for the lightbox modal
//!
//! The modal follows a single-focus model: at most one project is shown at a
//! time, and selecting another project while open replaces the selection
//! rather than stacking a second overlay.
//!
//! ```text
//! Closed --Select--> Open
//! Open   --Select--> Open     (selection replaced)
//! Open   --Dismiss-> Closed
//! ```

use ammaar_common::StateError;

/// Modal visibility states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [ModalState] {
        match self {
            Self::Closed => &[Self::Open],
            Self::Open => &[Self::Open, Self::Closed],
        }
    }
}

impl std::fmt::Display for ModalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Events that trigger modal state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// A card or slide was activated
    Select,
    /// Close button or backdrop was clicked
    Dismiss,
}

impl std::fmt::Display for ModalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Dismiss => write!(f, "dismiss"),
        }
    }
}

/// Modal state machine
pub struct ModalStateMachine;

impl ModalStateMachine {
    /// Attempt a state transition
    pub fn transition(current: ModalState, event: ModalEvent) -> Result<ModalState, StateError> {
        match (current, event) {
            (_, ModalEvent::Select) => Ok(ModalState::Open),
            (ModalState::Open, ModalEvent::Dismiss) => Ok(ModalState::Closed),
            (ModalState::Closed, ModalEvent::Dismiss) => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }

    /// Check if a transition is valid without applying it
    pub fn can_transition(current: ModalState, event: ModalEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
