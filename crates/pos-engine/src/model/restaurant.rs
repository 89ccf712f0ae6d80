use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};

/// A restaurant account.
///
/// Passwords are compared verbatim; hashing is out of scope for this engine.
#[derive(Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub email: String,
    pub password: String,
    pub name: String,
    pub paid: bool,
    /// Empty until a manager sets one.
    pub manager_password: String,
}

impl std::fmt::Debug for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Restaurant")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("paid", &self.paid)
            .finish_non_exhaustive()
    }
}

/// Signup payload. The payment token has already been checked by the client.
#[derive(Clone)]
pub struct RestaurantCreate {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for RestaurantCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantCreate")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// `restaurant-email-index:<email>` → restaurant id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailIndex {
    pub email: String,
    pub restaurant_id: RestaurantId,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub has_manager_password: bool,
}
