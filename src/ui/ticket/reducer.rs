use crate::ui::mvi::Reducer;
use crate::ui::ticket::intent::TicketIntent;
use crate::ui::ticket::state::DisplayState;

pub struct TicketReducer;

impl Reducer for TicketReducer {
    type State = DisplayState;
    type Intent = TicketIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TicketIntent::Tick(reading) => DisplayState {
                current_time: reading.time,
                current_date: reading.date,
                ..state
            },
            TicketIntent::Restore(stored) => DisplayState {
                profile_image: stored.profile_image.or(state.profile_image),
                user_name: stored.user_name.unwrap_or(state.user_name),
                origin: stored.origin.unwrap_or(state.origin),
                destination: stored.destination.unwrap_or(state.destination),
                ..state
            },
            TicketIntent::SetProfileImage(profile_image) => DisplayState {
                profile_image,
                ..state
            },
            TicketIntent::SetUserName(user_name) => DisplayState { user_name, ..state },
            TicketIntent::SetOrigin(origin) => DisplayState { origin, ..state },
            TicketIntent::SetDestination(destination) => DisplayState {
                destination,
                ..state
            },
            TicketIntent::SwapJourney => DisplayState {
                origin: state.destination,
                destination: state.origin,
                ..state
            },
        }
    }
}
