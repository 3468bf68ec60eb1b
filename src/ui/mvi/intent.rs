//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User input (typing, swapping, picking a photo)
/// - Timer ticks
/// - Values restored from storage
pub trait Intent: Send + 'static {}
