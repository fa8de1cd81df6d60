use std::{
    thread,
    time::{Duration, Instant},
};

use fragrance_core::platform::FramePacer;
use log::trace;

/// One refresh of a 60 Hz panel.
pub const VBLANK_INTERVAL: Duration = Duration::from_micros(16_667);

/// Sleeps until the next refresh deadline.
///
/// Deadlines advance by one interval per tick. A tick that overran its
/// deadline restarts the schedule from now instead of bursting to catch up.
#[derive(Debug)]
pub struct VBlankPacer {
    interval: Duration,
    next_deadline: Option<Instant>,
    ticks: u64,
    overruns: u64,
}

impl Default for VBlankPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl VBlankPacer {
    pub fn new() -> Self {
        Self::with_interval(VBLANK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
            ticks: 0,
            overruns: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks whose work ran past the deadline.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl FramePacer for VBlankPacer {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.interval);

        if deadline > now {
            thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.interval);
        } else {
            self.overruns = self.overruns.saturating_add(1);
            trace!("pacer: overrun by {:?}", now - deadline);
            self.next_deadline = Some(now + self.interval);
        }

        self.ticks = self.ticks.saturating_add(1);
    }
}
