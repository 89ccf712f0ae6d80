//! Error types for the Restaurant actor.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// A required signup field is missing.
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    /// The email is already claimed by another restaurant.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The payment token is not the accepted sentinel.
    #[error("Payment required")]
    PaymentRequired,

    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// Manager password mismatch.
    #[error("Unauthorized")]
    Unauthorized,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
