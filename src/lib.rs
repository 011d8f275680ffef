#![no_std]

pub mod app;
pub mod clock_face;
pub mod color;
pub mod encoder;
pub mod glyph;
pub mod layout;
pub mod pattern;
pub mod persist;
pub mod prerender;
pub mod strip;
pub mod timekeeping;
pub mod ws2812;

pub use app::{ClockApp, Mode};
pub use clock_face::{ClockFace, TimeInDigits};
pub use encoder::{
    ButtonGesture, ButtonThresholds, Direction, EncoderHardware, InterruptHandle, PinChange,
    PollHandle, RotaryEncoder,
};
pub use glyph::{Digit, GlyphLayout};
pub use layout::{ClockLayout, DigitPosition};
pub use pattern::{PatternId, PatternSlot};
pub use persist::{ColorStore, PersistError};
pub use strip::{PixelStrip, StripError};
pub use timekeeping::{MAX_SECONDS, Timekeeper};
pub use ws2812::{DataLine, PulseTiming, Ws2812};

pub use color::{ColorSettings, Hsv, Rgb};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The clock face is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
