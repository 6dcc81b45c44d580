//! Once-per-second tick for the clock face
//!
//! egui only paints when something asks it to. A frame is a **tick** when
//! the wall-clock second changed since the last tick; the app then
//! recomputes its angles and readout. Other frames reuse them.
//!
//! At the end of every frame the ticker requests a repaint for the start of
//! the next wall-clock second, so the hands move on the second rather than
//! up to a second late.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};

/// Shortest delay ever requested, so a frame landing exactly on a second
/// boundary does not spin.
const MIN_DELAY: Duration = Duration::from_millis(5);

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Tracks which wall-clock second was last shown.
#[derive(Debug, Default)]
pub struct Ticker {
    /// Seconds since midnight of the last tick.
    last_second: Option<u32>,
    /// Number of ticks since start.
    ticks: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `now` falls in a different second than the last
    /// tick (always on the first call).
    pub fn poll(&mut self, now: &NaiveTime) -> bool {
        let second = now.num_seconds_from_midnight();
        if self.last_second == Some(second) {
            return false;
        }
        self.last_second = Some(second);
        self.ticks += 1;
        log::trace!("tick {} at {}", self.ticks, now.format("%H:%M:%S"));
        true
    }

    /// Time left until the next wall-clock second begins.
    pub fn until_next(now: &NaiveTime) -> Duration {
        // nanosecond() exceeds 1e9 during a leap second
        let into_second = Duration::from_nanos(u64::from(now.nanosecond().min(999_999_999)));
        ONE_SECOND.saturating_sub(into_second).max(MIN_DELAY)
    }

    /// Call at the **start** of `update()`. Returns whether this frame is a tick.
    pub fn begin_frame(&mut self, now: &NaiveTime) -> bool {
        self.poll(now)
    }

    /// Call at the **end** of `update()` to schedule the next tick.
    pub fn end_frame(&self, ctx: &egui::Context, now: &NaiveTime) {
        ctx.request_repaint_after(Self::until_next(now));
    }
}
