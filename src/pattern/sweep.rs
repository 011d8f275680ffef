use embassy_time::Duration;

use super::Pattern;
use crate::color::{BLACK, WHITE};
use crate::strip::PixelStrip;

const FRAME_HOLD: Duration = Duration::from_millis(50);

/// Lights the strip one white pixel at a time
///
/// The first pass draws over whatever the strip showed. Every later pass
/// starts on black.
#[derive(Debug, Clone, Default)]
pub struct SinglePixelSweepPattern {
    index: usize,
    wrapped: bool,
}

impl SinglePixelSweepPattern {
    pub const fn new() -> Self {
        Self {
            index: 0,
            wrapped: false,
        }
    }

    /// Pixel the next step will light
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Pattern for SinglePixelSweepPattern {
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        if self.wrapped {
            strip.set_strip_constant(BLACK);
            self.wrapped = false;
        }
        strip.set_pixel(self.index, WHITE);
        if self.index + 1 >= strip.len() {
            self.index = 0;
            self.wrapped = true;
        } else {
            self.index += 1;
        }
        FRAME_HOLD
    }

    fn reset(&mut self) {
        self.index = 0;
        self.wrapped = false;
    }
}
