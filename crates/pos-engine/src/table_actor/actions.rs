//! Custom actions for the Table actor.

use crate::model::OrderId;

/// Changes to a table's order-id list.
#[derive(Debug, Clone)]
pub enum TableAction {
    /// Append an order id.
    Attach(OrderId),
    /// Empty the list, returning what it held.
    Clear,
}

/// Results of Table actions.
#[derive(Debug, Clone, PartialEq)]
pub enum TableActionResult {
    Attach(()),
    Clear(Vec<OrderId>),
}
