use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ProducerIntent {
    /// Temperature timer fired with a new sample.
    TemperatureUpdated(i32),
    /// Greeting timer fired with a new greeting.
    GreetingUpdated(String),
}

impl Intent for ProducerIntent {}
