//! Custom actions for the Order actor.

/// Kitchen-side status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// `pending → ready`. Repeating it on a ready order is a no-op.
    MarkReady,
}
