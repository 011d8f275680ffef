//! Elapsed-time counter driven by a once-per-second interrupt.

use core::cell::Cell;

use critical_section::Mutex;

use crate::clock_face::TimeInDigits;
use crate::glyph::Digit;

/// Last second of the twelve-hour cycle
pub const MAX_SECONDS: u32 = 12 * 60 * 60 - 1;

const SECONDS_PER_MINUTE: i64 = 60;

/// Seconds counter shared between the tick interrupt and the main loop
pub struct Timekeeper {
    seconds: Mutex<Cell<u32>>,
}

impl Timekeeper {
    pub const fn new() -> Self {
        Self {
            seconds: Mutex::new(Cell::new(0)),
        }
    }

    /// Advance by one second, wrapping past [`MAX_SECONDS`] to zero
    pub fn on_second_tick(&self) {
        critical_section::with(|cs| {
            let seconds = self.seconds.borrow(cs);
            let next = seconds.get() + 1;
            seconds.set(if next > MAX_SECONDS { 0 } else { next });
        });
    }

    /// Shift the time by whole minutes
    ///
    /// Going below zero lands on [`MAX_SECONDS`] and going past it lands on
    /// zero, whatever the size of the step.
    pub fn adjust_minutes(&self, delta: i32) {
        critical_section::with(|cs| {
            let seconds = self.seconds.borrow(cs);
            let adjusted =
                i64::from(seconds.get()) + i64::from(delta) * SECONDS_PER_MINUTE;
            let wrapped = if adjusted < 0 {
                MAX_SECONDS
            } else {
                u32::try_from(adjusted)
                    .ok()
                    .filter(|&value| value <= MAX_SECONDS)
                    .unwrap_or(0)
            };
            seconds.set(wrapped);
        });
    }

    pub fn seconds(&self) -> u32 {
        critical_section::with(|cs| self.seconds.borrow(cs).get())
    }

    /// Values past [`MAX_SECONDS`] are clamped
    pub fn set_seconds(&self, value: u32) {
        critical_section::with(|cs| self.seconds.borrow(cs).set(value.min(MAX_SECONDS)));
    }
}

impl Default for Timekeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeInDigits {
    /// Digits shown for `seconds` of elapsed time
    ///
    /// The hour reads one ahead of the elapsed hours, so the face runs from
    /// 01:00 to 12:59.
    pub const fn from_seconds(seconds: u32) -> Self {
        let minutes = seconds / 60;
        let hours = minutes / 60 + 1;
        let minutes = minutes % 60;
        Self::new([
            Digit::ones_of((hours % 100) / 10),
            Digit::ones_of(hours),
            Digit::ones_of((minutes % 100) / 10),
            Digit::ones_of(minutes),
        ])
    }
}

/// Detects when the displayed minute changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteWatch {
    last_minute: Option<u32>,
}

impl MinuteWatch {
    pub const fn new() -> Self {
        Self { last_minute: None }
    }

    /// True on the first call and whenever the minute differs from the last call
    pub fn changed(&mut self, seconds: u32) -> bool {
        let minute = seconds / 60;
        let changed = self.last_minute != Some(minute);
        self.last_minute = Some(minute);
        changed
    }

    /// Make the next [`MinuteWatch::changed`] report a change
    pub fn invalidate(&mut self) {
        self.last_minute = None;
    }
}
