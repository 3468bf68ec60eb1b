//! Owner of the ticket's [`DisplayState`].
//!
//! Every change goes through [`TicketReducer`]; the controller wraps each
//! reduction with its side effects:
//!
//! | Operation              | Persistence                         |
//! |------------------------|-------------------------------------|
//! | tick                   | none                                |
//! | name / origin / dest.  | write-through, on every change      |
//! | swap                   | write-through, both fields          |
//! | profile image          | deferred until `on_deactivate`      |
//!
//! Deferring the image avoids re-encoding it on every pick or crop.

use std::mem;

use crate::clock::{Clock, ClockReading};
use crate::profile_image::ProfileImage;
use crate::store::{PersistError, PersistenceAdapter};
use crate::ui::mvi::Reducer;
use crate::ui::ticket::intent::TicketIntent;
use crate::ui::ticket::reducer::TicketReducer;
use crate::ui::ticket::state::{DisplayState, TicketField};

/// Called with the new state after every change.
pub type Listener = Box<dyn FnMut(&DisplayState) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct TicketController {
    state: DisplayState,
    adapter: PersistenceAdapter,
    clock: Box<dyn Clock>,
    active: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    last_persist_error: Option<String>,
}

impl TicketController {
    /// Compute the clock, then load every persisted field.
    ///
    /// Missing keys leave the field empty (or the image absent).
    pub fn new(adapter: PersistenceAdapter, clock: Box<dyn Clock>) -> Self {
        let mut controller = Self {
            state: DisplayState::default(),
            adapter,
            clock,
            active: false,
            listeners: Vec::new(),
            next_subscription: 0,
            last_persist_error: None,
        };
        controller.tick();
        let stored = controller.adapter.load_all();
        controller.dispatch(TicketIntent::Restore(stored));
        tracing::debug!(
            has_image = controller.state.profile_image.is_some(),
            "Ticket state loaded"
        );
        controller
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Message from the most recent failed save, cleared by the next success.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Recompute time and date from the clock.
    pub fn tick(&mut self) {
        let reading = ClockReading::at(self.clock.now());
        self.dispatch(TicketIntent::Tick(reading));
    }

    /// Replace the photo. Not persisted until [`on_deactivate`](Self::on_deactivate).
    pub fn set_profile_image(&mut self, image: Option<ProfileImage>) {
        self.dispatch(TicketIntent::SetProfileImage(image));
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.dispatch(TicketIntent::SetUserName(name.into()));
        let result = self.adapter.save_user_name(&self.state.user_name);
        self.record_save("userName", result);
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.dispatch(TicketIntent::SetOrigin(origin.into()));
        let result = self.adapter.save_origin(&self.state.origin);
        self.record_save("origin", result);
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.dispatch(TicketIntent::SetDestination(destination.into()));
        let result = self.adapter.save_destination(&self.state.destination);
        self.record_save("destination", result);
    }

    /// Set any editable text field.
    pub fn set_field(&mut self, field: TicketField, value: impl Into<String>) {
        match field {
            TicketField::UserName => self.set_user_name(value),
            TicketField::Origin => self.set_origin(value),
            TicketField::Destination => self.set_destination(value),
        }
    }

    /// Exchange origin and destination, then persist both.
    ///
    /// Listeners see a single update with both values already swapped.
    pub fn swap_origin_destination(&mut self) {
        self.dispatch(TicketIntent::SwapJourney);
        let result = self.adapter.save_origin(&self.state.origin);
        self.record_save("origin", result);
        let result = self.adapter.save_destination(&self.state.destination);
        self.record_save("destination", result);
    }

    /// Picker returned a photo.
    pub fn on_image_selected(&mut self, image: ProfileImage) {
        tracing::info!(width = image.width(), height = image.height(), "Profile image selected");
        self.set_profile_image(Some(image));
    }

    /// Picker was dismissed without a photo.
    pub fn on_picker_cancelled(&mut self) {
        tracing::debug!("Profile image selection cancelled");
    }

    /// The screen became visible. Re-reads the stored photo; an absent
    /// one leaves the current photo untouched.
    pub fn on_activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        if let Some(image) = self.adapter.load_profile_image() {
            self.dispatch(TicketIntent::SetProfileImage(Some(image)));
        }
    }

    /// The screen went away. Flushes the deferred photo write.
    pub fn on_deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let result = self
            .adapter
            .save_profile_image(self.state.profile_image.as_ref());
        self.record_save("profileImage", result);
    }

    fn dispatch(&mut self, intent: TicketIntent) {
        self.state = TicketReducer::reduce(mem::take(&mut self.state), intent);
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    fn record_save(&mut self, field: &'static str, result: Result<(), PersistError>) {
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(err) => {
                tracing::warn!(field, error = %err, "Failed to persist field");
                self.last_persist_error = Some(format!("Could not save {}: {}", field, err));
            }
        }
    }
}
