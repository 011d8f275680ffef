//! Bit-banged single-wire pixel protocol driver.
//!
//! Each bit is a high pulse followed by a low pulse on one data line:
//!
//! | bit | high   | low    |
//! |-----|--------|--------|
//! | 1   | 800 ns | 450 ns |
//! | 0   | 400 ns | 850 ns |
//!
//! Every phase tolerates ±150 ns. A frame ends with the line held low for at
//! least 50 µs. Pulse widths are produced by busy-waiting a fixed number of
//! cycles, so they are tied to the cycle clock of the target and must be
//! recomputed with [`PulseTiming::for_cycle_clock`] whenever it changes.
//!
//! Transmission runs inside a critical section. A single interrupt stretching
//! a pulse past tolerance corrupts the colors with no way to detect it.

#[cfg(feature = "cortex-m")]
mod pin_line;

#[cfg(feature = "cortex-m")]
pub use pin_line::PinLine;

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;

/// High time of a one bit
pub const ONE_HIGH_NS: u32 = 800;
/// Low time of a one bit
pub const ONE_LOW_NS: u32 = 450;
/// High time of a zero bit
pub const ZERO_HIGH_NS: u32 = 400;
/// Low time of a zero bit
pub const ZERO_LOW_NS: u32 = 850;
/// Allowed deviation of every phase
pub const TOLERANCE_NS: u32 = 150;
/// Minimum low time that latches a frame
pub const LATCH_NS: u32 = 50_000;

const NS_PER_SECOND: u64 = 1_000_000_000;

/// Physical data line the driver toggles
pub trait DataLine {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Busy-wait for `cycles` cycles of the cycle clock
    fn delay_cycles(&mut self, cycles: u32);
}

/// Cycle counts for each pulse phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    cycle_hz: u32,
    pub one_high: u32,
    pub one_low: u32,
    pub zero_high: u32,
    pub zero_low: u32,
    pub latch: u32,
}

impl PulseTiming {
    /// Derive cycle counts from the frequency of the busy-wait clock
    ///
    /// Pulse phases are rounded to the nearest cycle; the latch period is
    /// rounded up so it never undershoots 50 µs.
    pub const fn for_cycle_clock(cycle_hz: u32) -> Self {
        Self {
            cycle_hz,
            one_high: nearest_cycles(ONE_HIGH_NS, cycle_hz),
            one_low: nearest_cycles(ONE_LOW_NS, cycle_hz),
            zero_high: nearest_cycles(ZERO_HIGH_NS, cycle_hz),
            zero_low: nearest_cycles(ZERO_LOW_NS, cycle_hz),
            latch: ceil_cycles(LATCH_NS, cycle_hz),
        }
    }

    /// Frequency the counts were derived for
    pub const fn cycle_hz(&self) -> u32 {
        self.cycle_hz
    }

    /// Whether every phase lands within ±150 ns of its nominal width
    pub const fn is_within_tolerance(&self) -> bool {
        self.cycle_hz != 0
            && within(self.one_high, ONE_HIGH_NS, self.cycle_hz)
            && within(self.one_low, ONE_LOW_NS, self.cycle_hz)
            && within(self.zero_high, ZERO_HIGH_NS, self.cycle_hz)
            && within(self.zero_low, ZERO_LOW_NS, self.cycle_hz)
    }

    /// Actual width in nanoseconds of a phase lasting `cycles`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn width_ns(&self, cycles: u32) -> u32 {
        if self.cycle_hz == 0 {
            return 0;
        }
        ((cycles as u64 * NS_PER_SECOND) / self.cycle_hz as u64) as u32
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn nearest_cycles(ns: u32, cycle_hz: u32) -> u32 {
    ((ns as u64 * cycle_hz as u64 + NS_PER_SECOND / 2) / NS_PER_SECOND) as u32
}

#[allow(clippy::cast_possible_truncation)]
const fn ceil_cycles(ns: u32, cycle_hz: u32) -> u32 {
    (ns as u64 * cycle_hz as u64).div_ceil(NS_PER_SECOND) as u32
}

const fn within(cycles: u32, nominal_ns: u32, cycle_hz: u32) -> bool {
    let actual = (cycles as u64 * NS_PER_SECOND) / cycle_hz as u64;
    actual.abs_diff(nominal_ns as u64) <= TOLERANCE_NS as u64
}

/// Bytes of a pixel in the order they go out on the wire
pub const fn wire_bytes(pixel: Rgb) -> [u8; 3] {
    [pixel.g, pixel.r, pixel.b]
}

/// Pixel protocol driver over a bit-banged [`DataLine`]
pub struct Ws2812<L: DataLine> {
    line: L,
    timing: PulseTiming,
}

impl<L: DataLine> Ws2812<L> {
    pub const fn new(line: L, timing: PulseTiming) -> Self {
        Self { line, timing }
    }

    pub const fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Give the data line back
    pub fn release(self) -> L {
        self.line
    }

    /// Serialize one frame and latch it
    ///
    /// Interrupts are suppressed from the first bit to the end of the latch
    /// period and restored when the critical section closes.
    pub fn render(&mut self, pixels: &[Rgb]) {
        self.transmit(pixels.iter().copied());
    }

    fn transmit(&mut self, pixels: impl Iterator<Item = Rgb>) {
        critical_section::with(|_| {
            for pixel in pixels {
                for byte in wire_bytes(pixel) {
                    self.write_byte(byte);
                }
            }
            self.latch();
        });
    }

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            if byte & (1 << bit) == 0 {
                self.pulse(self.timing.zero_high, self.timing.zero_low);
            } else {
                self.pulse(self.timing.one_high, self.timing.one_low);
            }
        }
    }

    #[inline(always)]
    fn pulse(&mut self, high: u32, low: u32) {
        self.line.set_high();
        self.line.delay_cycles(high);
        self.line.set_low();
        self.line.delay_cycles(low);
    }

    fn latch(&mut self) {
        self.line.set_low();
        self.line.delay_cycles(self.timing.latch);
    }
}

impl<L: DataLine> OutputDriver for Ws2812<L> {
    fn write(&mut self, colors: &[Rgb]) {
        self.render(colors);
    }
}

impl<L: DataLine> SmartLedsWrite for Ws2812<L> {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.transmit(iterator.into_iter().map(Into::into));
        Ok(())
    }
}
