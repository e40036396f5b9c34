//! Feature that samples values on timers and publishes them.

mod feature;
mod intent;
mod reducer;
mod state;

pub use feature::ProducerFeature;
pub use intent::ProducerIntent;
pub use reducer::ProducerReducer;
pub use state::ProducerState;
