//! Pure data structures stored by the ledger actors.

pub mod ids;
pub mod inventory;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod sales;
pub mod table;

pub use ids::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
pub use restaurant::*;
pub use sales::*;
pub use table::*;
