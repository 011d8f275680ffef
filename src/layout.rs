//! Physical layout of the clock board.

use crate::glyph::{GlyphLayout, PIXELS_PER_DIGIT};

/// Number of digit positions on the face
pub const DIGIT_POSITIONS: usize = 4;

/// One of the four digit positions, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    HoursTens,
    HoursOnes,
    MinutesTens,
    MinutesOnes,
}

impl DigitPosition {
    pub const ALL: [Self; DIGIT_POSITIONS] = [
        Self::HoursTens,
        Self::HoursOnes,
        Self::MinutesTens,
        Self::MinutesOnes,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Where a digit lives on the strip and how it is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSlot {
    pub start: usize,
    pub glyphs: GlyphLayout,
    /// Short digits lose their last pixel and get their tail patched
    pub short: bool,
}

/// Pixel geometry of a clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockLayout {
    pub pixel_count: usize,
    pub slots: [DigitSlot; DIGIT_POSITIONS],
    /// First pixel of the three-pixel tail of the short digit
    pub tail_start: usize,
}

/// Pixels of the short digit's tail
pub const TAIL_PIXELS: usize = 3;

/// Cache pixels the generic copy writes for a short digit
pub const SHORT_COPY_PIXELS: usize = PIXELS_PER_DIGIT - 4;

impl ClockLayout {
    /// The 64-pixel Maverick board
    pub const MAVERICK: Self = Self {
        pixel_count: 64,
        slots: [
            DigitSlot {
                start: 1,
                glyphs: GlyphLayout::Up,
                short: false,
            },
            DigitSlot {
                start: 16,
                glyphs: GlyphLayout::Down,
                short: false,
            },
            DigitSlot {
                start: 36,
                glyphs: GlyphLayout::Down,
                short: false,
            },
            DigitSlot {
                start: 51,
                glyphs: GlyphLayout::Up,
                short: true,
            },
        ],
        tail_start: 61,
    };

    pub const fn slot(&self, position: DigitPosition) -> DigitSlot {
        self.slots[position.index()]
    }

    /// Whether every digit and the tail fit inside the strip
    pub const fn fits(&self) -> bool {
        let mut i = 0;
        while i < DIGIT_POSITIONS {
            let slot = self.slots[i];
            let width = if slot.short {
                SHORT_COPY_PIXELS
            } else {
                PIXELS_PER_DIGIT
            };
            match slot.start.checked_add(width) {
                Some(end) if end <= self.pixel_count => {}
                _ => return false,
            }
            i += 1;
        }
        match self.tail_start.checked_add(TAIL_PIXELS) {
            Some(end) => end <= self.pixel_count,
            None => false,
        }
    }
}

impl Default for ClockLayout {
    fn default() -> Self {
        Self::MAVERICK
    }
}
