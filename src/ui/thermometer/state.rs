use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermometerState {
    pub temperature: Option<i32>,
}

impl UiState for ThermometerState {}

impl ThermometerState {
    pub fn temperature_string(&self) -> String {
        self.temperature
            .map_or_else(|| "No Value".to_string(), |value| value.to_string())
    }
}
