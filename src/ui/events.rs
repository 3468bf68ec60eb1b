use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How often the reader thread checks for termination signals.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// Terminal window gained focus (screen visible again).
    FocusGained,
    /// Terminal window lost focus (screen hidden).
    FocusLost,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Reads terminal input on a background thread and forwards it to the
/// UI thread, which stays the only place state is mutated.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let signalled = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGINT] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&signalled)) {
                tracing::warn!(signal, error = %err, "Failed to register signal handler");
            }
        }

        thread::spawn(move || loop {
            if thread_stop.load(Ordering::Relaxed) {
                break;
            }

            if signalled.swap(false, Ordering::Relaxed) && tx.send(AppEvent::Shutdown).is_err() {
                break;
            }

            match event::poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal poll failed");
                    break;
                }
            }

            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Paste(text)) => AppEvent::Paste(text),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(Event::FocusGained) => AppEvent::FocusGained,
                Ok(Event::FocusLost) => AppEvent::FocusLost,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
