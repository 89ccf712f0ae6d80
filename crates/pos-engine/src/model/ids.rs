//! Identifier types.
//!
//! Every record is restaurant-scoped, so most ids are a [`ScopedKey`]: the restaurant id
//! followed by a kind-specific sub-id. Its `Display` form (`<restaurant-id>:<sub-id>`) is
//! the storage key suffix and the first segment is the list scope.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

macro_rules! minted_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// A fresh random identifier.
            pub fn mint() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

minted_id!(
    /// Opaque tenant token minted at signup.
    RestaurantId
);
minted_id!(
    /// Order identifier, unique within a restaurant.
    OrderId
);
minted_id!(
    /// Product identifier, unique within a restaurant.
    ProductId
);

/// Table number. `0` is the off-premises sentinel.
pub type TableNumber = u8;

/// The table number used for orders with no physical table.
pub const OFF_PREMISES_TABLE: TableNumber = 0;

/// A restaurant-scoped key: `<restaurant-id>:<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopedKey<K> {
    pub restaurant_id: RestaurantId,
    pub key: K,
}

impl<K> ScopedKey<K> {
    pub fn new(restaurant_id: RestaurantId, key: K) -> Self {
        Self { restaurant_id, key }
    }
}

impl<K: Display> Display for ScopedKey<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.restaurant_id, self.key)
    }
}

pub type TableKey = ScopedKey<TableNumber>;
pub type OrderKey = ScopedKey<OrderId>;
pub type ProductKey = ScopedKey<ProductId>;
/// Inventory items are keyed by ingredient name.
pub type InventoryKey = ScopedKey<String>;
/// Sales records are keyed by tenant-local day, `YYYY-MM-DD`.
pub type SalesKey = ScopedKey<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_key_display_is_storage_suffix() {
        let key = TableKey::new(RestaurantId::from("r1"), 7);
        assert_eq!(key.to_string(), "r1:7");

        let key = InventoryKey::new(RestaurantId::from("r1"), "flour".to_string());
        assert_eq!(ledger_actor::store::entity_key("inventory", &key), "inventory:r1:flour");
    }

    #[test]
    fn test_minted_ids_differ() {
        assert_ne!(OrderId::mint(), OrderId::mint());
    }
}
