//! Custom actions for the Sales actor.

use crate::model::{OrderId, SalesRecord, TableNumber};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum SalesAction {
    /// Clear the table, remove its orders and add `subtotal` plus service charge to the day.
    CloseTable {
        table_number: TableNumber,
        subtotal: Decimal,
    },
}

/// What a table close did.
#[derive(Debug, Clone, PartialEq)]
pub struct TableClosure {
    /// The day's record after the sale was added.
    pub record: SalesRecord,
    /// Amount added to the day, service charge included.
    pub amount: Decimal,
    /// Order ids that were attached to the table.
    pub removed: Vec<OrderId>,
}
