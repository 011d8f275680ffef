mod palette;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use palette::{COLOR_CHOICES, RAINBOW, wrap_index};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = rgb_from_u32(0x00_00_00);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Digit and background colors of the clock face
///
/// This is the pair that gets persisted and fed into the prerender cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSettings {
    pub digit: Rgb,
    pub background: Rgb,
}

impl ColorSettings {
    pub const fn new(digit: Rgb, background: Rgb) -> Self {
        Self { digit, background }
    }
}

impl Default for ColorSettings {
    /// White digits on a black face
    fn default() -> Self {
        Self::new(WHITE, BLACK)
    }
}
