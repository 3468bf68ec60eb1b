use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

/// Run the ticket screen until the user quits.
///
/// Everything that touches [`App`] happens on this thread: input, clock
/// ticks and persistence are strictly serialized.
pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    let result = run_session(&mut app, Instant::now(), |app| {
        event_loop(&mut terminal, &events, app)
    });
    drop(guard);
    result
}

/// Activate the screen, run `body`, then deactivate whatever `body`
/// returned, so the deferred photo write happens on error exits too.
pub fn run_session<F>(app: &mut App, now: Instant, body: F) -> io::Result<()>
where
    F: FnOnce(&mut App) -> io::Result<()>,
{
    app.activate(now);
    let result = body(app);
    app.deactivate();
    if let Err(err) = &result {
        tracing::error!(error = %err, "Ticket screen stopped on error");
    }
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    events: &EventHandler,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app, Instant::now()))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(app.next_wakeup(Instant::now())) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::FocusLost) => app.deactivate(),
            Ok(AppEvent::FocusGained) => app.activate(Instant::now()),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        app.on_tick(Instant::now());
    }
}
