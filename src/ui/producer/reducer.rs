use crate::ui::mvi::Reducer;
use crate::ui::producer::intent::ProducerIntent;
use crate::ui::producer::state::ProducerState;

pub struct ProducerReducer;

impl Reducer for ProducerReducer {
    type State = ProducerState;
    type Intent = ProducerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProducerIntent::TemperatureUpdated(temperature) => ProducerState {
                temperature: Some(temperature),
                ..state
            },
            ProducerIntent::GreetingUpdated(greeting) => ProducerState {
                greeting: Some(greeting),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_keep_other_field() {
        let state = ProducerReducer::reduce_all(
            ProducerState::default(),
            [
                ProducerIntent::TemperatureUpdated(12),
                ProducerIntent::GreetingUpdated("Hola".to_string()),
            ],
        );
        assert_eq!(state.temperature, Some(12));
        assert_eq!(state.greeting.as_deref(), Some("Hola"));
    }

    #[test]
    fn latest_temperature_wins() {
        let state = ProducerReducer::reduce_all(
            ProducerState::default(),
            [
                ProducerIntent::TemperatureUpdated(5),
                ProducerIntent::TemperatureUpdated(12),
            ],
        );
        assert_eq!(state.temperature, Some(12));
        assert_eq!(state.greeting, None);
    }
}
