use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    TemperatureUpdated(i32),
    GreetingUpdated(String),
}

impl Intent for DashboardIntent {}
