use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::app_state::AppSharedState;
use crate::config::ProducerConfig;
use crate::shutdown::ShutdownHandle;
use crate::state::{publisher, SharedStateError, WriteOnlyView};
use crate::ui::mvi::Reducer;
use crate::ui::producer::intent::ProducerIntent;
use crate::ui::producer::reducer::ProducerReducer;
use crate::ui::producer::state::ProducerState;

/// Publishes sampled temperatures and greetings to shared state.
///
/// Holds write-only views, so it cannot observe what others publish.
pub struct ProducerFeature {
    state: ProducerState,
    temperature: WriteOnlyView<i32>,
    greeting: WriteOnlyView<String>,
}

impl ProducerFeature {
    pub fn new(temperature: WriteOnlyView<i32>, greeting: WriteOnlyView<String>) -> Self {
        Self {
            state: ProducerState::default(),
            temperature,
            greeting,
        }
    }

    /// Build the feature against the process-wide [`AppSharedState`] store.
    pub fn from_registry() -> Result<Self, SharedStateError> {
        Ok(Self::new(
            publisher(AppSharedState::TEMPERATURE)?,
            publisher(AppSharedState::GREETING)?,
        ))
    }

    pub fn state(&self) -> &ProducerState {
        &self.state
    }

    /// Reduce `intent` into local state, then publish the new value.
    pub fn dispatch(&mut self, intent: ProducerIntent) {
        self.state = ProducerReducer::reduce(std::mem::take(&mut self.state), intent.clone());
        match intent {
            ProducerIntent::TemperatureUpdated(temperature) => {
                tracing::info!(temperature, "Producer published temperature");
                self.temperature.write(temperature);
            }
            ProducerIntent::GreetingUpdated(greeting) => {
                tracing::info!(greeting = %greeting, "Producer published greeting");
                self.greeting.write(greeting);
            }
        }
    }

    /// Drive both sample timers until shutdown; returns the final state.
    ///
    /// The first sample of each timer arrives one full interval after start.
    /// A zero interval is treated as one millisecond.
    pub async fn run(mut self, config: ProducerConfig, shutdown: ShutdownHandle) -> ProducerState {
        let mut rng = StdRng::from_entropy();
        let mut temperature_timer = tokio::time::interval(timer_period(config.temperature_interval_ms));
        let mut greeting_timer = tokio::time::interval(timer_period(config.greeting_interval_ms));
        temperature_timer.reset();
        greeting_timer.reset();

        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                _ = temperature_timer.tick() => {
                    let temperature = sample_temperature(
                        &mut rng,
                        config.temperature_min,
                        config.temperature_max,
                    );
                    self.dispatch(ProducerIntent::TemperatureUpdated(temperature));
                }
                _ = greeting_timer.tick() => {
                    if let Some(greeting) = sample_greeting(&mut rng, &config.greetings) {
                        self.dispatch(ProducerIntent::GreetingUpdated(greeting.to_string()));
                    }
                }
            }
        }

        tracing::debug!("Producer stopped");
        self.state
    }
}

fn timer_period(interval_ms: u64) -> Duration {
    Duration::from_millis(interval_ms.max(1))
}

/// Uniform sample in `min..max`; `min` itself if the range is empty.
pub fn sample_temperature<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

pub fn sample_greeting<'a, R: Rng>(rng: &mut R, greetings: &'a [String]) -> Option<&'a str> {
    greetings.choose(rng).map(String::as_str)
}
