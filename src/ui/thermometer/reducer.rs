use crate::ui::mvi::Reducer;
use crate::ui::thermometer::intent::ThermometerIntent;
use crate::ui::thermometer::state::ThermometerState;

pub struct ThermometerReducer;

impl Reducer for ThermometerReducer {
    type State = ThermometerState;
    type Intent = ThermometerIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThermometerIntent::TemperatureUpdated(temperature) => ThermometerState {
                temperature: Some(temperature),
            },
        }
    }
}
