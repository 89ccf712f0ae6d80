//! Error types for the Sales actor.

use thiserror::Error;

/// Errors that can occur while closing a table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SalesError {
    /// The table being closed does not exist.
    #[error("Table not found: {0}")]
    NotFound(String),

    /// The sale cannot be represented, e.g. the day's total would overflow.
    #[error("Sales validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
