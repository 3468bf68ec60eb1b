//! Screen owner: key handling, picker flow, lifecycle and clock schedule.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use transit_pass::config::Config;
use transit_pass::store::{MemoryStore, DESTINATION_KEY, ORIGIN_KEY, PROFILE_IMAGE_KEY, USER_NAME_KEY};
use transit_pass::ui::app::{App, Focus};
use transit_pass::ui::input::handle_key;
use transit_pass::ui::runtime::run_session;
use transit_pass::ui::ticket::TicketField;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

// -- editing ------------------------------------------------------------------

#[test]
fn typing_a_name_writes_every_keystroke() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.focus(), Focus::Editing(TicketField::UserName));
    type_text(&mut app, "Alex");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::Browse);
    assert_eq!(app.controller().state().user_name, "Ale");
    assert_eq!(store.writes_for(USER_NAME_KEY), 5);
}

#[test]
fn backspace_on_empty_field_writes_nothing() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(store.writes_for(ORIGIN_KEY), 0);
}

#[test]
fn tab_cycles_through_fields() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Editing(TicketField::UserName));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Editing(TicketField::Origin));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Editing(TicketField::Destination));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Editing(TicketField::UserName));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Editing(TicketField::Destination));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Browse);
}

#[test]
fn browse_letters_are_commands_but_editing_letters_are_text() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "sq");
    assert_eq!(app.controller().state().destination, "sq");
    assert!(!app.should_quit());
}

#[test]
fn paste_into_field_drops_line_breaks() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    press(&mut app, KeyCode::Char('f'));
    app.on_paste("Roma\r\nStreet");
    assert_eq!(app.controller().state().origin, "RomaStreet");
    assert_eq!(store.writes_for(ORIGIN_KEY), 1);
}

#[test]
fn paste_while_browsing_is_ignored() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    app.on_paste("Central");
    assert_eq!(store.write_count(), 0);
}

// -- swap ---------------------------------------------------------------------

#[test]
fn swap_from_browse_and_while_editing() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    app.controller_mut().set_origin("Central");
    app.controller_mut().set_destination("Airport");

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.controller().state().origin, "Airport");

    press(&mut app, KeyCode::Char('n'));
    ctrl(&mut app, 's');
    assert_eq!(app.controller().state().origin, "Central");
    assert_eq!(app.controller().state().destination, "Airport");
    assert_eq!(app.controller().state().user_name, "");
    assert_eq!(store.writes_for(DESTINATION_KEY), 3);
}

// -- picker -------------------------------------------------------------------

#[test]
fn picker_error_keeps_dialog_open() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.focus(), Focus::Picker);
    type_text(&mut app, "/no/such/photo.png");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::Picker);
    assert!(app.picker().is_visible());
    assert!(app.controller().state().profile_image.is_none());
}

#[test]
fn picker_cancel_returns_to_browse() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    press(&mut app, KeyCode::Char('p'));
    type_text(&mut app, "q");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.focus(), Focus::Browse);
    assert!(!app.picker().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn picked_photo_is_cropped_and_saved_on_quit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("me.png");
    sample_image(8, 4, 200).pixels().save(&path).unwrap();

    let store = MemoryStore::new();
    let mut app = make_app(&store);
    app.activate(Instant::now());

    press(&mut app, KeyCode::Char('p'));
    app.on_paste(path.to_str().unwrap());
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::Browse);
    let image = app.controller().state().profile_image.clone().unwrap();
    assert_eq!((image.width(), image.height()), (4, 4));
    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 0);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 1);

    let restarted = make_controller(&store);
    assert_eq!(restarted.state().profile_image, Some(image));
}

// -- lifecycle & clock ----------------------------------------------------------

#[test]
fn clock_ticks_only_while_active() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    let start = Instant::now();
    let period = app.timer().period();

    assert!(!app.timer().is_running());
    app.activate(start);
    assert!(app.timer().is_running());
    assert!(app.controller().is_active());

    app.on_tick(start + period);
    assert!(app.timer().time_until_due(start + period).is_some());

    app.deactivate();
    assert!(!app.timer().is_running());
    assert!(!app.controller().is_active());
}

#[test]
fn focus_loss_flushes_photo_once() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    app.activate(Instant::now());
    app.controller_mut()
        .on_image_selected(sample_image(3, 3, 1));

    app.deactivate();
    app.deactivate();
    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 1);

    app.activate(Instant::now());
    app.request_quit();
    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 2);
}

#[test]
fn ctrl_q_quits_from_any_focus() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    press(&mut app, KeyCode::Char('p'));
    ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.should_quit());
}

#[test]
fn splash_limits_wakeup_and_expires() {
    let store = MemoryStore::new();
    let start = Instant::now();
    let app = App::new(Config::default(), make_controller(&store), start);

    assert!(app.is_splash_visible(start));
    assert!(app.next_wakeup(start) <= Duration::from_millis(1000));
    assert!(!app.is_splash_visible(start + Duration::from_millis(1000)));
}

#[test]
fn zero_splash_is_never_shown() {
    let store = MemoryStore::new();
    let app = make_app(&store);
    assert!(!app.is_splash_visible(Instant::now()));
}

#[test]
fn failed_session_still_saves_photo() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    let result = run_session(&mut app, Instant::now(), |app| {
        app.controller_mut().on_image_selected(sample_image(4, 4, 9));
        Err(io::Error::other("draw failed"))
    });

    assert_eq!(result.unwrap_err().to_string(), "draw failed");
    assert!(!app.controller().is_active());
    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 1);
}

#[test]
fn finished_session_saves_photo_once() {
    let store = MemoryStore::new();
    let mut app = make_app(&store);

    run_session(&mut app, Instant::now(), |app| {
        assert!(app.timer().is_running());
        app.controller_mut().on_image_selected(sample_image(4, 4, 9));
        app.request_quit();
        Ok(())
    })
    .unwrap();

    assert_eq!(store.writes_for(PROFILE_IMAGE_KEY), 1);
}
