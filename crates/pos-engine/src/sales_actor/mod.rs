//! # Sales Actor
//!
//! Daily revenue under `sales:<restaurant>:<YYYY-MM-DD>`. The only way to add to a day is
//! [`SalesAction::CloseTable`], which also clears the table and removes its orders through
//! the Table and Order clients in its [`SalesContext`].
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`SalesRecord`]
//! - [`actions`] - [`SalesAction`] and [`TableClosure`]
//! - [`error`] - [`SalesError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::SalesContext;
pub use error::*;

use crate::clients::SalesClient;
use crate::model::SalesRecord;
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Sales actor and its client.
pub fn new(buffer_size: usize, store: Arc<dyn KvStore>) -> (ResourceActor<SalesRecord>, SalesClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, SalesClient::new(generic_client))
}
