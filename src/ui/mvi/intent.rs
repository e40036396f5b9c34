//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Timer events that synthesize new values
/// - Values delivered by a shared state subscription
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
