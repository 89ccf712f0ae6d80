//! Typed clients, one per actor.
//!
//! Each wraps a `ResourceClient<T>`, implements [`ActorClient`](ledger_actor::ActorClient)
//! for the standard `get`/`delete`/`list`, and maps [`FrameworkError`](ledger_actor::FrameworkError)
//! back into the actor's own error type.

pub mod email_index_client;
pub mod inventory_client;
pub mod order_client;
pub mod product_client;
pub mod restaurant_client;
pub mod sales_client;
pub mod table_client;

pub use email_index_client::EmailIndexClient;
pub use inventory_client::InventoryClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use restaurant_client::RestaurantClient;
pub use sales_client::SalesClient;
pub use table_client::TableClient;
