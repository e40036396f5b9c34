//! Feature that observes both shared values.

mod feature;
mod intent;
mod reducer;
mod state;

pub use feature::DashboardFeature;
pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::DashboardState;
