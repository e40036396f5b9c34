use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ThermometerIntent {
    TemperatureUpdated(i32),
}

impl Intent for ThermometerIntent {}
