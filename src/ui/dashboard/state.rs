use crate::state::ObservedValue;
use crate::ui::mvi::UiState;

/// What the dashboard has observed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub temperature: ObservedValue<i32>,
    pub greeting: ObservedValue<String>,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn temperature_string(&self) -> String {
        self.temperature
            .value()
            .map_or_else(|| "No Value".to_string(), |value| value.to_string())
    }

    pub fn greeting_string(&self) -> String {
        self.greeting
            .value()
            .cloned()
            .unwrap_or_else(|| "No Value".to_string())
    }
}
