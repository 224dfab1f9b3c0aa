//! Cooperative tick scheduler

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared cancellation flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// One fired tick. Only meaningful while its token is live.
#[derive(Debug, Clone)]
pub struct Tick {
    token: CancellationToken,
    sequence: u64,
}

impl Tick {
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Zero-based index of this tick within its ticker
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Produces ticks at a fixed interval when polled
#[derive(Debug)]
pub struct Ticker {
    token: CancellationToken,
    interval: Duration,
    next_due: Instant,
    fired: u64,
}

impl Ticker {
    /// Arm a ticker whose first tick is due one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        Ticker {
            token: CancellationToken::new(),
            interval,
            next_due: now + interval,
            fired: 0,
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Return at most one due tick per call. A caller that fell behind gets
    /// the overdue tick plus one more on its next poll at the same instant,
    /// not one per missed interval.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if self.token.is_cancelled() || now < self.next_due {
            return None;
        }

        let tick = Tick {
            token: self.token.clone(),
            sequence: self.fired,
        };
        self.fired += 1;
        self.next_due = (self.next_due + self.interval).max(now);
        Some(tick)
    }

    /// Time left until the next tick, zero if one is already due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.token.is_cancelled() {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }
}
