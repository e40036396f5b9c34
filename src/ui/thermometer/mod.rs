//! Feature that observes only the temperature.

mod feature;
mod intent;
mod reducer;
mod state;

pub use feature::ThermometerFeature;
pub use intent::ThermometerIntent;
pub use reducer::ThermometerReducer;
pub use state::ThermometerState;
