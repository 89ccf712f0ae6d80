//! Manager-password actions.

/// Custom actions for the Restaurant actor.
///
/// `Debug` is hand-written so passwords never reach the logs.
#[derive(Clone)]
pub enum RestaurantAction {
    /// Overwrite the manager password unconditionally.
    SetManagerPassword(String),
    /// Exact comparison against the stored manager password.
    VerifyManagerPassword(String),
}

impl std::fmt::Debug for RestaurantAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestaurantAction::SetManagerPassword(_) => f.write_str("SetManagerPassword(..)"),
            RestaurantAction::VerifyManagerPassword(_) => f.write_str("VerifyManagerPassword(..)"),
        }
    }
}
