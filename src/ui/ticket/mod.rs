mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{Listener, SubscriptionId, TicketController};
pub use intent::TicketIntent;
pub use reducer::TicketReducer;
pub use state::{DisplayState, TicketField};
