//! Clockwork — wall-clock time to hand angles
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, and always
//! fall in `[0, 360)`. Sub-second precision is dropped: the face is only
//! re-evaluated once per tick.

use chrono::{Local, NaiveTime, Timelike};

/// Rotation of each hand for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

/// Compute the three hand angles for a time of day.
pub fn angles<T: Timelike>(now: &T) -> ClockAngles {
    let hour = (now.hour() % 12) as f64;
    let minute = now.minute() as f64;
    let second = now.second().min(59) as f64;

    ClockAngles {
        hour_deg: (hour + minute / 60.0) / 12.0 * 360.0,
        minute_deg: (minute + second / 60.0) / 60.0 * 360.0,
        second_deg: second / 60.0 * 360.0,
    }
}

/// Where the clockwork reads the current time from.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A time source frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Binds a [`TimeSource`] to the angle computation.
#[derive(Debug, Clone, Default)]
pub struct Clockwork<S: TimeSource = SystemTime> {
    source: S,
}

impl<S: TimeSource> Clockwork<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current time of day from the source. Callers feed the same instant
    /// to [`angles`] and the readout so both agree on the second.
    pub fn now(&self) -> NaiveTime {
        self.source.now()
    }
}
