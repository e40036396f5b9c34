//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use shared_state::state::{SharedShape, Subscription};
use std::time::Duration;

/// How long a subscription must stay quiet to count as "blocked".
pub const QUIET_PERIOD: Duration = Duration::from_millis(50);

/// Shape used by the integration tests.
pub struct Weather;

impl SharedShape for Weather {
    const NAME: &'static str = "Weather";
}

shared_state::shared_fields!(Weather {
    pub TEMPERATURE: i32 = "temperature";
    pub HUMIDITY: i32 = "humidity";
    pub GREETING: String = "greeting";
    pub COUNT: u64 = "count";
});

/// Take every value already queued on `sub`.
pub fn drain<T>(sub: &mut Subscription<T>) -> Vec<T> {
    std::iter::from_fn(|| sub.try_next()).collect()
}

/// Assert that `sub` yields nothing within [`QUIET_PERIOD`].
pub async fn assert_quiet<T: std::fmt::Debug>(sub: &mut Subscription<T>) {
    if let Ok(value) = tokio::time::timeout(QUIET_PERIOD, sub.next()).await {
        panic!("expected no value, got {:?}", value);
    }
}
