//! Prerendered digit pixels.
//!
//! Glyph bits are evaluated once per color change instead of once per frame;
//! at runtime a digit is a plain copy of 14 pixels.

use crate::color::{BLACK, ColorSettings, Rgb};
use crate::glyph::{DIGIT_COUNT, Digit, GlyphLayout, PIXELS_PER_DIGIT};

/// Pixels of one prerendered digit
pub type DigitPixels = [Rgb; PIXELS_PER_DIGIT];

type LayoutCache = [DigitPixels; DIGIT_COUNT];

/// Prerendered pixels for both glyph layouts and all ten digits
///
/// The cache is only valid for the colors it was last rendered with. Any color
/// change must go through [`DigitCache::prerender`] again.
#[derive(Debug, Clone)]
pub struct DigitCache {
    up: LayoutCache,
    down: LayoutCache,
    colors: Option<ColorSettings>,
}

impl DigitCache {
    /// Empty cache; every entry is black until the first prerender
    pub const fn new() -> Self {
        Self {
            up: [[BLACK; PIXELS_PER_DIGIT]; DIGIT_COUNT],
            down: [[BLACK; PIXELS_PER_DIGIT]; DIGIT_COUNT],
            colors: None,
        }
    }

    /// Regenerate every entry for `colors`
    pub fn prerender(&mut self, colors: ColorSettings) {
        for layout in GlyphLayout::ALL {
            let table = layout.table();
            let cache = self.layout_mut(layout);
            for (pixels, &pattern) in cache.iter_mut().zip(table) {
                render_pattern(pattern, colors, pixels);
            }
        }
        self.colors = Some(colors);
    }

    /// Colors the cache was last rendered with
    pub const fn colors(&self) -> Option<ColorSettings> {
        self.colors
    }

    pub const fn entry(&self, layout: GlyphLayout, digit: Digit) -> &DigitPixels {
        match layout {
            GlyphLayout::Up => &self.up[digit.index()],
            GlyphLayout::Down => &self.down[digit.index()],
        }
    }

    fn layout_mut(&mut self, layout: GlyphLayout) -> &mut LayoutCache {
        match layout {
            GlyphLayout::Up => &mut self.up,
            GlyphLayout::Down => &mut self.down,
        }
    }
}

impl Default for DigitCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `pattern` MSB first, one pixel per bit
fn render_pattern(pattern: u16, colors: ColorSettings, pixels: &mut DigitPixels) {
    let mut mask = 0x8000_u16;
    for pixel in pixels.iter_mut() {
        *pixel = if pattern & mask == 0 {
            colors.background
        } else {
            colors.digit
        };
        mask >>= 1;
    }
}
