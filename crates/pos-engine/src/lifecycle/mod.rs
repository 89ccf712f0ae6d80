//! # System Lifecycle & Orchestration
//!
//! [`PosSystem`] creates every actor, wires their contexts and exposes the engine's
//! operations. Actors are created first and started with their dependencies afterwards
//! (late binding through `run(context)`).
//!
//! ## Dependency graph
//!
//! ```text
//! restaurant ──► email index
//!     │
//!     └────────► table ◄──── order ──► product, inventory
//!                  ▲           ▲
//!                  └── sales ──┘
//! ```
//!
//! The graph is acyclic, so dropping the clients held by [`PosSystem`] closes the
//! actors from the top down and [`PosSystem::shutdown`] terminates.
//!
//! ## Observability
//!
//! Call [`setup_tracing`] once at startup; see [`ledger_actor::tracing`] for the log format.

pub mod pos_system;

pub use ledger_actor::tracing::setup_tracing;
pub use pos_system::*;
