use crate::app_state::AppSharedState;
use crate::shutdown::ShutdownHandle;
use crate::state::{observer, ReadOnlyView, SharedStateError};
use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::reducer::DashboardReducer;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

/// Observes temperature and greeting.
pub struct DashboardFeature {
    temperature: ReadOnlyView<i32>,
    greeting: ReadOnlyView<String>,
}

impl DashboardFeature {
    pub fn new(temperature: ReadOnlyView<i32>, greeting: ReadOnlyView<String>) -> Self {
        Self {
            temperature,
            greeting,
        }
    }

    pub fn from_registry() -> Result<Self, SharedStateError> {
        Ok(Self::new(
            observer(AppSharedState::TEMPERATURE)?,
            observer(AppSharedState::GREETING)?,
        ))
    }

    /// Reduce every observed value until shutdown; returns the final state.
    ///
    /// Values already queued on the subscriptions are drained before a
    /// pending shutdown is honoured.
    pub async fn run(self, shutdown: ShutdownHandle) -> DashboardState {
        let mut temperatures = self.temperature.subscribe();
        let mut greetings = self.greeting.subscribe();
        let mut state = DashboardState::default();

        loop {
            let intent = tokio::select! {
                biased;
                Some(temperature) = temperatures.next() => DashboardIntent::TemperatureUpdated(temperature),
                Some(greeting) = greetings.next() => DashboardIntent::GreetingUpdated(greeting),
                _ = shutdown.wait() => break,
            };
            state = DashboardReducer::reduce(state, intent);
            tracing::info!(
                temperature = %state.temperature_string(),
                greeting = %state.greeting_string(),
                "Dashboard updated"
            );
        }

        tracing::debug!("Dashboard stopped");
        state
    }
}
