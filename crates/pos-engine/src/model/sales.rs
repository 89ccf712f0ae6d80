use crate::model::RestaurantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue and closed-table count for one tenant-local day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub restaurant_id: RestaurantId,
    pub date: String,
    pub total: Decimal,
    pub count: u32,
}

impl SalesRecord {
    /// Additive upsert of one closed table. Returns `None`, leaving the record
    /// untouched, when the total or count would overflow.
    pub fn record_sale(&mut self, amount: Decimal) -> Option<()> {
        let total = self.total.checked_add(amount)?;
        let count = self.count.checked_add(1)?;
        self.total = total;
        self.count = count;
        Some(())
    }
}
