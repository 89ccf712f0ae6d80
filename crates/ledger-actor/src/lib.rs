//! # Ledger Actor
//!
//! Store-backed, single-writer actors for keeping several record kinds consistent without
//! multi-key transactions.
//!
//! ## Why one actor per entity kind?
//!
//! A plain key-value store offers point `get`/`set` and nothing else, so two requests that
//! read, modify and write the same key can lose an update. This crate puts exactly one
//! Tokio task in front of every key of a given kind. The task processes requests
//! sequentially, so a read-modify-write expressed as an entity hook is atomic for that key,
//! while different kinds still run in parallel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record, its key, its hooks and actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, persistence through [`KvStore`]
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async requests
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! An order actor can therefore receive the table and inventory clients it calls from its
//! `on_create` hook, as long as the dependency graph stays acyclic (shutdown relies on
//! every client being dropped).
//!
//! ## Keys
//!
//! Records are stored under `<KIND>:<id>`. A [`ResourceClient::list`] call with a scope
//! returns every record under `<KIND>:<scope>:`; entities with composite ids
//! (`<restaurant>:<number>`) use the first segment as their scope.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations, so an actor under test
//! can run for real while its collaborators are mocked. [`MemoryStore`] backs tests that
//! exercise real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{KvStore, MemoryStore, StoreError};
