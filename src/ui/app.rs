use crate::config::Config;
use crate::profile_image::ProfileImage;
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickError, PickerDialogState, PickerIntent, PickerReducer};
use crate::ui::ticket::{TicketController, TicketField};
use crate::ui::timer::IntervalTimer;
use std::time::{Duration, Instant};

/// Longest the event loop sleeps when no tick is scheduled.
const IDLE_WAIT: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Browse,
    Editing(TicketField),
    Picker,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the ticket screen: its visibility, focus and clock schedule.
pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    controller: TicketController,
    timer: IntervalTimer,
    /// Image picker dialog (MVI pattern).
    picker: PickerDialogState,
    splash_until: Option<Instant>,
}

impl App {
    pub fn new(config: Config, controller: TicketController, now: Instant) -> Self {
        let splash = config.display.splash_duration();
        let splash_until = (!splash.is_zero()).then(|| now + splash);
        Self {
            should_quit: false,
            focus: Focus::Browse,
            timer: IntervalTimer::new(config.display.tick_interval()),
            config,
            controller,
            picker: PickerDialogState::default(),
            splash_until,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &TicketController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TicketController {
        &mut self.controller
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn picker(&self) -> &PickerDialogState {
        &self.picker
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Leave the screen. Runs the deactivation hook so the photo is saved.
    pub fn request_quit(&mut self) {
        self.deactivate();
        self.should_quit = true;
    }

    pub fn is_splash_visible(&self, now: Instant) -> bool {
        self.splash_until.is_some_and(|until| now < until)
    }

    /// Screen became visible: refresh, reload the photo, start the clock.
    pub fn activate(&mut self, now: Instant) {
        if self.controller.is_active() {
            return;
        }
        tracing::debug!("Ticket screen activated");
        self.controller.on_activate();
        self.controller.tick();
        self.timer.start(now);
    }

    /// Screen went away: stop the clock, flush deferred writes.
    pub fn deactivate(&mut self) {
        if !self.controller.is_active() {
            return;
        }
        tracing::debug!("Ticket screen deactivated");
        self.timer.stop();
        self.controller.on_deactivate();
    }

    /// Fire the clock if its period has elapsed.
    pub fn on_tick(&mut self, now: Instant) {
        if self.timer.poll(now) {
            self.controller.tick();
        }
    }

    /// How long the event loop may block before something needs redrawing.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let mut wait = self.timer.time_until_due(now).unwrap_or(IDLE_WAIT);
        if let Some(until) = self.splash_until.filter(|until| now < *until) {
            wait = wait.min(until - now);
        }
        wait
    }

    pub fn begin_editing(&mut self, field: TicketField) {
        self.focus = Focus::Editing(field);
    }

    pub fn stop_editing(&mut self) {
        if matches!(self.focus, Focus::Editing(_)) {
            self.focus = Focus::Browse;
        }
    }

    /// Move editing to the next (or previous) field; from browse, start
    /// at the first (or last) one.
    pub fn cycle_field(&mut self, forward: bool) {
        let field = match (self.focus, forward) {
            (Focus::Editing(field), true) => field.next(),
            (Focus::Editing(field), false) => field.previous(),
            (_, true) => TicketField::UserName,
            (_, false) => TicketField::Destination,
        };
        self.focus = Focus::Editing(field);
    }

    pub fn editing_field(&self) -> Option<TicketField> {
        match self.focus {
            Focus::Editing(field) => Some(field),
            _ => None,
        }
    }

    /// Append typed text to the field being edited.
    pub fn insert_text(&mut self, text: &str) {
        let Some(field) = self.editing_field() else {
            return;
        };
        let typed: String = text.chars().filter(|c| !c.is_control()).collect();
        if typed.is_empty() {
            return;
        }
        let mut value = self.controller.state().field(field).to_string();
        value.push_str(&typed);
        self.controller.set_field(field, value);
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.editing_field() else {
            return;
        };
        let mut value = self.controller.state().field(field).to_string();
        if value.pop().is_some() {
            self.controller.set_field(field, value);
        }
    }

    pub fn swap_journey(&mut self) {
        self.controller.swap_origin_destination();
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Editing(_) => {
                let single_line = text.replace(['\r', '\n'], "");
                self.insert_text(&single_line);
            }
            Focus::Picker => {
                dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Paste(text.to_string()));
            }
            Focus::Browse => {}
        }
    }

    pub fn open_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Open);
        self.focus = Focus::Picker;
    }

    pub fn picker_input(&mut self, ch: char) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Input(ch));
    }

    pub fn picker_backspace(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Backspace);
    }

    /// Dismiss the picker without a photo.
    pub fn cancel_picker(&mut self) {
        self.close_picker();
        self.controller.on_picker_cancelled();
    }

    /// Load the typed path; errors keep the dialog open.
    pub fn submit_picker_path(&mut self) {
        let path = self.picker.path().unwrap_or_default().to_string();
        let result = crate::ui::picker::pick_from_path(&path);
        self.finish_pick(result);
    }

    pub fn paste_picker_image(&mut self) {
        let result = crate::ui::picker::pick_from_clipboard();
        self.finish_pick(result);
    }

    /// Hand a picker result to the controller.
    pub fn finish_pick(&mut self, result: Result<ProfileImage, PickError>) {
        match result {
            Ok(image) => {
                self.close_picker();
                self.controller.on_image_selected(image);
            }
            Err(err) => {
                tracing::debug!(error = %err, "Profile image pick failed");
                dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Failed(err.to_string()));
            }
        }
    }

    fn close_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
        self.focus = Focus::Browse;
    }
}
