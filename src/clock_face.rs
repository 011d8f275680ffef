#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, ColorSettings};
use crate::glyph::{Digit, TailPatch};
use crate::layout::{ClockLayout, DIGIT_POSITIONS, DigitPosition, SHORT_COPY_PIXELS, TAIL_PIXELS};
use crate::prerender::DigitCache;
use crate::strip::{PixelStrip, StripError};

/// The four digits shown on the face, hours first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeInDigits {
    pub hours_tens: Digit,
    pub hours_ones: Digit,
    pub minutes_tens: Digit,
    pub minutes_ones: Digit,
}

impl TimeInDigits {
    pub const ZERO: Self = Self::new([Digit::ZERO; DIGIT_POSITIONS]);

    pub const fn new(digits: [Digit; DIGIT_POSITIONS]) -> Self {
        Self {
            hours_tens: digits[0],
            hours_ones: digits[1],
            minutes_tens: digits[2],
            minutes_ones: digits[3],
        }
    }

    pub const fn digit(&self, position: DigitPosition) -> Digit {
        match position {
            DigitPosition::HoursTens => self.hours_tens,
            DigitPosition::HoursOnes => self.hours_ones,
            DigitPosition::MinutesTens => self.minutes_tens,
            DigitPosition::MinutesOnes => self.minutes_ones,
        }
    }
}

/// Render engine of the clock face
///
/// Owns the pixel strip, the prerender cache and the output driver. Digits are
/// copied from the cache, and a position is only rewritten when its value
/// changes.
pub struct ClockFace<'a, O: OutputDriver> {
    // External dependencies and configuration
    output: O,
    layout: ClockLayout,

    // Internal state
    strip: PixelStrip<'a>,
    cache: DigitCache,
    colors: ColorSettings,
    rendered: [Option<Digit>; DIGIT_POSITIONS],
}

impl<'a, O: OutputDriver> ClockFace<'a, O> {
    /// Create the face and prerender `colors`
    ///
    /// Fails if `layout` addresses pixels the strip does not have.
    pub fn new(
        strip: PixelStrip<'a>,
        output: O,
        layout: ClockLayout,
        colors: ColorSettings,
    ) -> Result<Self, StripError> {
        if !layout.fits() || strip.len() < layout.pixel_count {
            #[cfg(feature = "esp32-log")]
            println!(
                "[clock_face] layout needs {} pixels, strip has {}",
                layout.pixel_count,
                strip.len()
            );
            return Err(StripError::LayoutDoesNotFit);
        }

        let mut face = Self {
            output,
            layout,
            strip,
            cache: DigitCache::new(),
            colors,
            rendered: [None; DIGIT_POSITIONS],
        };
        face.prerender(colors);
        Ok(face)
    }

    /// Regenerate the digit cache and repaint the face background
    ///
    /// Every position is forgotten, so the next [`ClockFace::render_time`]
    /// writes all digits in the new colors.
    pub fn prerender(&mut self, colors: ColorSettings) {
        self.colors = colors;
        self.cache.prerender(colors);
        self.strip.set_strip_constant(colors.background);
        self.rendered = [None; DIGIT_POSITIONS];
    }

    pub const fn colors(&self) -> ColorSettings {
        self.colors
    }

    pub const fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    /// Copy `digit` into `position` unless it is already shown there
    ///
    /// Returns whether any pixel was written.
    pub fn render_digit_if_changed(&mut self, position: DigitPosition, digit: Digit) -> bool {
        if self.rendered[position.index()] == Some(digit) {
            return false;
        }
        self.write_digit(position, digit);
        true
    }

    /// Update changed digits and push the frame
    pub fn render_time(&mut self, time: &TimeInDigits) {
        for position in DigitPosition::ALL {
            self.render_digit_if_changed(position, time.digit(position));
        }
        self.show();
    }

    /// Write every digit regardless of what is shown, then push the frame
    pub fn force_render(&mut self, time: &TimeInDigits) {
        for position in DigitPosition::ALL {
            self.write_digit(position, time.digit(position));
        }
        self.show();
    }

    /// Blank the whole face and push the frame
    pub fn clear_and_render(&mut self) {
        self.strip.set_strip_constant(BLACK);
        self.rendered = [None; DIGIT_POSITIONS];
        self.show();
    }

    /// Push the current strip contents to the output
    pub fn show(&mut self) {
        self.output.write(self.strip.pixels());
    }

    pub const fn strip(&self) -> &PixelStrip<'a> {
        &self.strip
    }

    /// Raw access for patterns
    ///
    /// Digit tracking is dropped, since the caller may overwrite any digit.
    pub fn strip_mut(&mut self) -> &mut PixelStrip<'a> {
        self.rendered = [None; DIGIT_POSITIONS];
        &mut self.strip
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn write_digit(&mut self, position: DigitPosition, digit: Digit) {
        let slot = self.layout.slot(position);
        let pixels = self.cache.entry(slot.glyphs, digit);
        if slot.short {
            self.strip
                .set_block_from_source(slot.start, &pixels[..SHORT_COPY_PIXELS]);
            self.patch_tail(digit);
        } else {
            self.strip.set_block_from_source(slot.start, pixels);
        }
        self.rendered[position.index()] = Some(digit);
    }

    /// Paint the tail of the short digit from the wiring table
    fn patch_tail(&mut self, digit: Digit) {
        let start = self.layout.tail_start;
        let patch = TailPatch::for_digit(digit);
        self.strip
            .set_block_constant(start, TAIL_PIXELS, self.colors.background);
        if patch.first_lit() {
            self.strip.set_pixel(start, self.colors.digit);
        }
        if patch.last_lit() {
            self.strip.set_pixel(start + TAIL_PIXELS - 1, self.colors.digit);
        }
    }
}
