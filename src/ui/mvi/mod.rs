//! Model-View-Intent (MVI) primitives shared by the demo features.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a feature's state
//! - **Intent**: Timer ticks or shared-state updates
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (writing to shared state) live in the feature drivers,
//! never in reducers.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
