use crate::model::{OrderId, RestaurantId, TableNumber};
use serde::{Deserialize, Serialize};

/// A physical table (or the off-premises sentinel) and the orders still open on it.
///
/// `order_ids` is a back-reference: the order record is the source of truth and
/// an id may no longer resolve once the order has been completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub restaurant_id: RestaurantId,
    pub number: TableNumber,
    pub order_ids: Vec<OrderId>,
}

#[derive(Debug, Clone)]
pub struct TableCreate {
    pub restaurant_id: RestaurantId,
    pub number: TableNumber,
}
