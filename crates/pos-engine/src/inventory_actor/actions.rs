//! Custom actions for the Inventory actor.

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Add `delta` (negative to consume). `unit` is only used when the record is new.
    Adjust { delta: Decimal, unit: String },
}
