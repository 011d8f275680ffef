//! Decorative patterns shown in pattern mode
//!
//! Patterns live in an enum so switching between them needs no allocation.
//! Each step draws one frame onto the strip and returns how long the frame
//! should be held before the next step. Pushing the frame out is the caller's
//! job.

mod popcorn;
mod rainbow_crossing;
mod sine_wave;
mod snake;
mod sweep;

use embassy_time::Duration;
pub use popcorn::{PopcornPattern, PopcornVariant};
pub use rainbow_crossing::RainbowCrossingPattern;
pub use sine_wave::SineWavePattern;
pub use snake::{MAX_SNAKE_LEN, SnakePattern};
pub use sweep::SinglePixelSweepPattern;

use crate::strip::PixelStrip;

const PATTERN_ID_SWEEP: u8 = 0;
const PATTERN_ID_RAINBOW_CROSSING: u8 = 1;
const PATTERN_ID_RAINBOW_CROSSING_SLOW: u8 = 2;
const PATTERN_ID_POPCORN: u8 = 3;
const PATTERN_ID_POPCORN_HOLD: u8 = 4;
const PATTERN_ID_SINE_WAVE: u8 = 5;
const PATTERN_ID_SNAKE: u8 = 6;

pub trait Pattern {
    /// Draw the next frame and return how long to hold it
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration;

    /// Start over from the first frame
    fn reset(&mut self);
}

/// Known patterns, in the order the encoder walks through them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternId {
    SinglePixelSweep = PATTERN_ID_SWEEP,
    RainbowCrossing = PATTERN_ID_RAINBOW_CROSSING,
    RainbowCrossingSlow = PATTERN_ID_RAINBOW_CROSSING_SLOW,
    Popcorn = PATTERN_ID_POPCORN,
    PopcornHold = PATTERN_ID_POPCORN_HOLD,
    SineWave = PATTERN_ID_SINE_WAVE,
    Snake = PATTERN_ID_SNAKE,
}

impl PatternId {
    pub const ALL: [Self; 7] = [
        Self::SinglePixelSweep,
        Self::RainbowCrossing,
        Self::RainbowCrossingSlow,
        Self::Popcorn,
        Self::PopcornHold,
        Self::SineWave,
        Self::Snake,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_SWEEP => Self::SinglePixelSweep,
            PATTERN_ID_RAINBOW_CROSSING => Self::RainbowCrossing,
            PATTERN_ID_RAINBOW_CROSSING_SLOW => Self::RainbowCrossingSlow,
            PATTERN_ID_POPCORN => Self::Popcorn,
            PATTERN_ID_POPCORN_HOLD => Self::PopcornHold,
            PATTERN_ID_SINE_WAVE => Self::SineWave,
            PATTERN_ID_SNAKE => Self::Snake,
            _ => return None,
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SinglePixelSweep => "single_pixel_sweep",
            Self::RainbowCrossing => "rainbow_crossing",
            Self::RainbowCrossingSlow => "rainbow_crossing_slow",
            Self::Popcorn => "popcorn",
            Self::PopcornHold => "popcorn_hold",
            Self::SineWave => "sine_wave",
            Self::Snake => "snake",
        }
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::SinglePixelSweep => PatternSlot::SinglePixelSweep(SinglePixelSweepPattern::new()),
            Self::RainbowCrossing => PatternSlot::RainbowCrossing(RainbowCrossingPattern::new(
                Duration::from_millis(0),
            )),
            Self::RainbowCrossingSlow => PatternSlot::RainbowCrossingSlow(
                RainbowCrossingPattern::new(Duration::from_millis(75)),
            ),
            Self::Popcorn => PatternSlot::Popcorn(PopcornPattern::new(PopcornVariant::Fresh)),
            Self::PopcornHold => {
                PatternSlot::PopcornHold(PopcornPattern::new(PopcornVariant::Accumulate))
            }
            Self::SineWave => PatternSlot::SineWave(SineWavePattern::new()),
            Self::Snake => PatternSlot::Snake(SnakePattern::new()),
        }
    }
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    SinglePixelSweep(SinglePixelSweepPattern),
    RainbowCrossing(RainbowCrossingPattern),
    RainbowCrossingSlow(RainbowCrossingPattern),
    Popcorn(PopcornPattern),
    PopcornHold(PopcornPattern),
    SineWave(SineWavePattern),
    Snake(SnakePattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        PatternId::SinglePixelSweep.to_slot()
    }
}

impl PatternSlot {
    /// Draw the next frame of the current pattern
    pub fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        match self {
            Self::SinglePixelSweep(pattern) => pattern.step(strip),
            Self::RainbowCrossing(pattern) | Self::RainbowCrossingSlow(pattern) => {
                pattern.step(strip)
            }
            Self::Popcorn(pattern) | Self::PopcornHold(pattern) => pattern.step(strip),
            Self::SineWave(pattern) => pattern.step(strip),
            Self::Snake(pattern) => pattern.step(strip),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::SinglePixelSweep(pattern) => pattern.reset(),
            Self::RainbowCrossing(pattern) | Self::RainbowCrossingSlow(pattern) => {
                pattern.reset();
            }
            Self::Popcorn(pattern) | Self::PopcornHold(pattern) => pattern.reset(),
            Self::SineWave(pattern) => pattern.reset(),
            Self::Snake(pattern) => pattern.reset(),
        }
    }

    pub fn id(&self) -> PatternId {
        match self {
            Self::SinglePixelSweep(_) => PatternId::SinglePixelSweep,
            Self::RainbowCrossing(_) => PatternId::RainbowCrossing,
            Self::RainbowCrossingSlow(_) => PatternId::RainbowCrossingSlow,
            Self::Popcorn(_) => PatternId::Popcorn,
            Self::PopcornHold(_) => PatternId::PopcornHold,
            Self::SineWave(_) => PatternId::SineWave,
            Self::Snake(_) => PatternId::Snake,
        }
    }
}

/// SplitMix64 finalizer, used as a cheap deterministic noise source
pub(crate) const fn hash(x: u64) -> u32 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    let folded = (z ^ (z >> 31)) as u32;
    folded
}
