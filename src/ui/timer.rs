//! Recurring schedule polled by the UI loop.

use std::time::{Duration, Instant};

/// Cooperative interval timer.
///
/// Never fires on its own: the event loop asks [`poll`](Self::poll)
/// whether a period has elapsed, so ticks run on the same thread as
/// input handling and never overlap with it.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// First tick is due one period after `now`. Restarting reschedules.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// How long the caller may sleep before the next tick, `None` if stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// `true` if a tick is due at `now`.
    ///
    /// After a stall longer than one period the timer fires once and
    /// reschedules from `now` rather than replaying missed ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }
}
