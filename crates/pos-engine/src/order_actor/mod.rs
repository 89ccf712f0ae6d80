//! # Order Actor
//!
//! Owns `order:<restaurant>:<order>` records and their `pending → ready` lifecycle.
//! Removal (completion or table close) is a plain delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`Order`],
//!   including the table linkage and inventory deduction run at placement
//! - [`actions`] - [`OrderAction::MarkReady`]
//! - [`error`] - [`OrderError`]
//!
//! ## Dependencies
//!
//! The actor is started with an [`OrderContext`] holding the Table, Product and Inventory
//! clients. None of those actors call back into this one, so shutdown by channel closure
//! still terminates.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, store: Arc<dyn KvStore>) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, OrderClient::new(generic_client))
}
