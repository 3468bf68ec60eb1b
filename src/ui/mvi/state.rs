//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloneable, comparable snapshots with a sensible empty
/// default, so a reducer can `std::mem::take` the current one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
