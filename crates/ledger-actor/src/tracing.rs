//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! process. Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run                       # mutations only
//! RUST_LOG=debug cargo run                      # payloads, gets and lists
//! RUST_LOG=ledger_actor=warn,pos_engine=debug cargo run
//! ```
//!
//! Every actor logs with an `entity_type` field (the storage kind), so module paths are
//! hidden (`with_target(false)`):
//!
//! ```text
//! INFO Created entity_type="order" id=3f2c...:9a1e...
//! INFO Action ok entity_type="inventory" id=3f2c...:flour
//! WARN Action failed entity_type="table" id=3f2c...:11 error=Item not found: table:3f2c...:11
//! ```

/// Initializes the global subscriber. Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
