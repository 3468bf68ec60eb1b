use crate::ui::app::{App, Focus};
use crate::ui::ticket::TicketField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Picker => handle_picker_key(app, key),
        Focus::Editing(_) => handle_editing_key(app, key),
        Focus::Browse => handle_browse_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.swap_journey();
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Tab | KeyCode::Down => app.cycle_field(true),
        KeyCode::BackTab | KeyCode::Up => app.cycle_field(false),
        KeyCode::Char('n') | KeyCode::Char('N') => app.begin_editing(TicketField::UserName),
        KeyCode::Char('f') | KeyCode::Char('F') => app.begin_editing(TicketField::Origin),
        KeyCode::Char('t') | KeyCode::Char('T') => app.begin_editing(TicketField::Destination),
        KeyCode::Char('s') | KeyCode::Char('S') => app.swap_journey(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.open_picker(),
        _ => {}
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.swap_journey();
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.stop_editing(),
        KeyCode::Tab | KeyCode::Down => app.cycle_field(true),
        KeyCode::BackTab | KeyCode::Up => app.cycle_field(false),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(ch) if is_plain(key) => {
            let mut buf = [0u8; 4];
            app.insert_text(ch.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'v') {
        app.paste_picker_image();
        return;
    }
    match key.code {
        KeyCode::Esc => app.cancel_picker(),
        KeyCode::Enter => app.submit_picker_path(),
        KeyCode::Backspace => app.picker_backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.picker_input(ch),
        _ => {}
    }
}

/// No modifier other than Shift.
fn is_plain(key: KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
