use crate::ui::mvi::UiState;

/// Last values this feature produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProducerState {
    pub temperature: Option<i32>,
    pub greeting: Option<String>,
}

impl UiState for ProducerState {}

impl ProducerState {
    pub fn temperature_string(&self) -> String {
        self.temperature
            .map_or_else(|| "No Value".to_string(), |value| value.to_string())
    }
}
