//! # POS Engine
//!
//! The order, table, inventory and sales ledger of a restaurant point-of-sale backend.
//!
//! - **[model]**: records stored per restaurant ([`Restaurant`](model::Restaurant),
//!   [`Table`](model::Table), [`Order`](model::Order), [`Product`](model::Product),
//!   [`InventoryItem`](model::InventoryItem), [`SalesRecord`](model::SalesRecord)).
//! - **Actors**: one `*_actor` module per ledger, each a single writer for its keys.
//! - **[clients]**: typed wrappers over the actor channels.
//! - **[lifecycle]**: [`PosSystem`](lifecycle::PosSystem), which starts, wires and stops
//!   the actors and exposes every operation.
//! - **[api]**: the tagged request/response schema.
//! - **[events]**: change notifications for push-style front ends.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod events;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod restaurant_actor;
pub mod sales_actor;
pub mod table_actor;
