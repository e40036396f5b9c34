use crate::app_state::AppSharedState;
use crate::shutdown::ShutdownHandle;
use crate::state::{observer, ReadOnlyView, SharedStateError};
use crate::ui::mvi::Reducer;
use crate::ui::thermometer::intent::ThermometerIntent;
use crate::ui::thermometer::reducer::ThermometerReducer;
use crate::ui::thermometer::state::ThermometerState;

pub struct ThermometerFeature {
    temperature: ReadOnlyView<i32>,
}

impl ThermometerFeature {
    pub fn new(temperature: ReadOnlyView<i32>) -> Self {
        Self { temperature }
    }

    pub fn from_registry() -> Result<Self, SharedStateError> {
        Ok(Self::new(observer(AppSharedState::TEMPERATURE)?))
    }

    pub async fn run(self, shutdown: ShutdownHandle) -> ThermometerState {
        let mut temperatures = self.temperature.subscribe();
        let mut state = ThermometerState::default();

        loop {
            let intent = tokio::select! {
                biased;
                Some(temperature) = temperatures.next() => ThermometerIntent::TemperatureUpdated(temperature),
                _ = shutdown.wait() => break,
            };
            state = ThermometerReducer::reduce(state, intent);
            tracing::info!(temperature = %state.temperature_string(), "Thermometer updated");
        }

        tracing::debug!("Thermometer stopped");
        state
    }
}
