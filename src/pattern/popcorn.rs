use embassy_time::Duration;

use super::{Pattern, hash};
use crate::color::{BLACK, Rgb};
use crate::strip::PixelStrip;

const FRAME_HOLD: Duration = Duration::from_millis(150);

/// Pixels popped per frame
const POPS_PER_FRAME: u64 = 8;

/// Frames an accumulating popcorn keeps before clearing
const FRAMES_BEFORE_CLEAR: u32 = 8;

/// How popped pixels persist between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopcornVariant {
    /// Every frame starts from a black strip
    Fresh,
    /// Pixels pile up, and the strip is cleared every eight frames
    Accumulate,
}

/// Random pixels flashing in random colours
#[derive(Debug, Clone)]
pub struct PopcornPattern {
    variant: PopcornVariant,
    frame: u32,
    seed: u64,
}

impl PopcornPattern {
    pub const fn new(variant: PopcornVariant) -> Self {
        Self {
            variant,
            frame: 0,
            seed: 0,
        }
    }

    pub const fn variant(&self) -> PopcornVariant {
        self.variant
    }

    fn next_random(&mut self) -> u32 {
        self.seed = self.seed.wrapping_add(1);
        hash(self.seed)
    }

    /// Channel value in `0..255`
    #[allow(clippy::cast_possible_truncation)]
    fn next_channel(&mut self) -> u8 {
        (self.next_random() % 255) as u8
    }
}

impl Pattern for PopcornPattern {
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        let clear = match self.variant {
            PopcornVariant::Fresh => true,
            PopcornVariant::Accumulate => self.frame % FRAMES_BEFORE_CLEAR == 0,
        };
        if clear {
            strip.set_strip_constant(BLACK);
        }

        for _ in 0..POPS_PER_FRAME {
            let index = self.next_random() as usize % strip.len();
            let color = Rgb::new(
                self.next_channel(),
                self.next_channel(),
                self.next_channel(),
            );
            strip.set_pixel(index, color);
        }

        self.frame = self.frame.wrapping_add(1);
        FRAME_HOLD
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
