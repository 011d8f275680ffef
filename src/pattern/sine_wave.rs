use core::f32::consts::TAU;

use embassy_time::Duration;

use super::Pattern;
use crate::color::{Hsv, hsv2rgb};
use crate::strip::PixelStrip;

const FRAME_HOLD: Duration = Duration::from_millis(40);

/// Pixels per full wave along the strip
const WAVELENGTH: f32 = 16.0;

/// Phase advance per frame, in fractions of a wave
const PHASE_STEP: f32 = 1.0 / 32.0;

/// Hue advance per full wave period
const HUE_STEP_PER_WAVE: u8 = 8;

/// Brightness wave travelling along the strip, slowly shifting hue
#[derive(Debug, Clone, Default)]
pub struct SineWavePattern {
    /// Current phase in `0.0..1.0`
    phase: f32,
    hue: u8,
}

impl SineWavePattern {
    pub const fn new() -> Self {
        Self { phase: 0.0, hue: 0 }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    /// Brightness of pixel `index` at the current phase
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn level(&self, index: usize) -> u8 {
        let angle = (index as f32 / WAVELENGTH + self.phase) * TAU;
        let value = 0.5 * (1.0 + libm::sinf(angle));
        libm::roundf(value * 255.0).clamp(0.0, 255.0) as u8
    }
}

impl Pattern for SineWavePattern {
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        for index in 0..strip.len() {
            let color = hsv2rgb(Hsv {
                hue: self.hue,
                sat: 255,
                val: self.level(index),
            });
            strip.set_pixel(index, color);
        }

        self.phase += PHASE_STEP;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
            self.hue = self.hue.wrapping_add(HUE_STEP_PER_WAVE);
        }
        FRAME_HOLD
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
