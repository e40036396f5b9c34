//! Shape of the state shared between the demo features.

use crate::shared_fields;
use crate::state::SharedShape;

/// Values published by the producer and observed by the other features.
pub struct AppSharedState;

impl SharedShape for AppSharedState {
    const NAME: &'static str = "AppSharedState";
}

shared_fields!(AppSharedState {
    /// Latest sampled temperature.
    pub TEMPERATURE: i32 = "temperature";
    /// Latest greeting.
    pub GREETING: String = "greeting";
});
