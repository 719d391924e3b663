//! Common state machine error types
//!
//! Shared across all domain crates that implement state machines.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} in state {from}")]
    InvalidTransition { from: String, event: String },
}
