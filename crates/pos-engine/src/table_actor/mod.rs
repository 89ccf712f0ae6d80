//! # Table Actor
//!
//! Owns every `table:<restaurant>:<number>` record and the order-id list attached to it.
//! It has no dependencies; the Order and Sales actors call into it.
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`Table`]
//! - [`actions`] - [`TableAction`] (`Attach`, `Clear`)
//! - [`error`] - [`TableError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TableClient;
use crate::model::Table;
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Table actor and its client.
pub fn new(buffer_size: usize, store: Arc<dyn KvStore>) -> (ResourceActor<Table>, TableClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, TableClient::new(generic_client))
}
