//! Engine-level error taxonomy returned by [`PosSystem`](crate::lifecycle::PosSystem).

use crate::inventory_actor::InventoryError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::restaurant_actor::RestaurantError;
use crate::sales_actor::SalesError;
use crate::table_actor::TableError;
use serde::Serialize;
use thiserror::Error;

/// Every failure a caller can see. None are retried internally.
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
#[serde(tag = "error", content = "detail")]
pub enum PosError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Payment required")]
    PaymentRequired,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    /// Actor or store plumbing failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RestaurantError> for PosError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::ValidationError(msg) => PosError::ValidationError(msg),
            RestaurantError::DuplicateEmail(email) => PosError::DuplicateEmail(email),
            RestaurantError::InvalidCredentials => PosError::InvalidCredentials,
            RestaurantError::PaymentRequired => PosError::PaymentRequired,
            RestaurantError::NotFound(key) => PosError::NotFound(key),
            RestaurantError::Unauthorized => PosError::Unauthorized,
            RestaurantError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}

impl From<TableError> for PosError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::NotFound(key) => PosError::NotFound(key),
            TableError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}

impl From<OrderError> for PosError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(key) => PosError::NotFound(key),
            OrderError::ValidationError(msg) => PosError::ValidationError(msg),
            OrderError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}

impl From<ProductError> for PosError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(key) => PosError::NotFound(key),
            ProductError::ValidationError(msg) => PosError::ValidationError(msg),
            ProductError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}

impl From<InventoryError> for PosError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::ValidationError(msg) => PosError::ValidationError(msg),
            InventoryError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}

impl From<SalesError> for PosError {
    fn from(e: SalesError) -> Self {
        match e {
            SalesError::NotFound(key) => PosError::NotFound(key),
            SalesError::ValidationError(msg) => PosError::ValidationError(msg),
            SalesError::ActorCommunicationError(msg) => PosError::Internal(msg),
        }
    }
}
