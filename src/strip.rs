//! Pixel strip bound to a caller-owned buffer.
//!
//! Every mutator is bounds-checked and silently ignores writes that would
//! fall outside the strip. There is no fault channel on the render path, and a
//! dropped write is better than touching memory past the strip.

use core::fmt;

use crate::color::Rgb;

/// Error returned when a strip cannot be bound to its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// The backing buffer holds no pixels
    EmptyBuffer,
    /// The requested strip length is zero
    ZeroLength,
    /// The requested strip length does not fit in the buffer
    LengthExceedsBuffer,
    /// The clock layout addresses pixels past the end of the strip
    LayoutDoesNotFit,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer => f.write_str("pixel buffer is empty"),
            Self::ZeroLength => f.write_str("strip length is zero"),
            Self::LengthExceedsBuffer => f.write_str("strip length exceeds pixel buffer"),
            Self::LayoutDoesNotFit => f.write_str("clock layout does not fit the strip"),
        }
    }
}

/// Fixed-length run of pixels
#[derive(Debug)]
pub struct PixelStrip<'a> {
    pixels: &'a mut [Rgb],
}

impl<'a> PixelStrip<'a> {
    /// Bind the first `length` pixels of `buffer`
    pub fn new(buffer: &'a mut [Rgb], length: usize) -> Result<Self, StripError> {
        if buffer.is_empty() {
            return Err(StripError::EmptyBuffer);
        }
        if length == 0 {
            return Err(StripError::ZeroLength);
        }
        if length > buffer.len() {
            return Err(StripError::LengthExceedsBuffer);
        }
        Ok(Self {
            pixels: &mut buffer[..length],
        })
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a strip cannot be bound to zero pixels
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Current pixel values, in wire order
    pub fn pixels(&self) -> &[Rgb] {
        &*self.pixels
    }

    /// Read back a single pixel
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set a single pixel; out-of-range indices are ignored
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Fill `count` pixels starting at `start` with one color
    pub fn set_block_constant(&mut self, start: usize, count: usize, color: Rgb) {
        if let Some(block) = self.block_mut(start, count) {
            block.fill(color);
        }
    }

    /// Copy `source` onto the strip starting at `start`
    pub fn set_block_from_source(&mut self, start: usize, source: &[Rgb]) {
        if let Some(block) = self.block_mut(start, source.len()) {
            block.copy_from_slice(source);
        }
    }

    /// Fill the whole strip with one color
    pub fn set_strip_constant(&mut self, color: Rgb) {
        self.set_block_constant(0, self.len(), color);
    }

    fn block_mut(&mut self, start: usize, count: usize) -> Option<&mut [Rgb]> {
        let end = start.checked_add(count)?;
        if end > self.pixels.len() {
            return None;
        }
        Some(&mut self.pixels[start..end])
    }
}
