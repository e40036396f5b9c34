use crate::state::ObservedValue;
use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::TemperatureUpdated(temperature) => DashboardState {
                temperature: ObservedValue::Observed(temperature),
                ..state
            },
            DashboardIntent::GreetingUpdated(greeting) => DashboardState {
                greeting: ObservedValue::Observed(greeting),
                ..state
            },
        }
    }
}
