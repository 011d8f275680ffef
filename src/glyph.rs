//! Seven-segment-style digit glyphs for the clock board.
//!
//! Each glyph is a 16-bit pattern read MSB first: bit `15 - i` says whether
//! pixel `i` of the digit shows the digit color (1) or the background (0).
//! A digit has 14 physical pixels, so the two lowest bits are always zero.
//!
//! Two tables exist because the digits are wired in two directions on the
//! board: the "up" digits (positions 1 and 4) and the "down" digits
//! (positions 2 and 3).

use core::fmt;

/// Number of distinct digit values
pub const DIGIT_COUNT: usize = 10;

/// Nominal number of pixels in one digit
pub const PIXELS_PER_DIGIT: usize = 14;

/// Decimal digit value, always in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    /// Returns `None` for values above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value < DIGIT_COUNT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Least significant decimal digit of `value`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn ones_of(value: u32) -> Self {
        Self((value % 10) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wiring direction of a digit on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphLayout {
    Up,
    Down,
}

impl GlyphLayout {
    pub const ALL: [Self; 2] = [Self::Up, Self::Down];

    pub const fn table(self) -> &'static [u16; DIGIT_COUNT] {
        match self {
            Self::Up => &UP_GLYPHS,
            Self::Down => &DOWN_GLYPHS,
        }
    }

    /// Bit pattern for `digit`
    pub const fn pattern(self, digit: Digit) -> u16 {
        self.table()[digit.index()]
    }

    /// Whether pixel `pixel` of `digit` shows the digit color
    pub const fn is_lit(self, digit: Digit, pixel: usize) -> bool {
        pixel < PIXELS_PER_DIGIT && self.pattern(digit) & (0x8000_u16 >> pixel) != 0
    }
}

const UP_GLYPHS: [u16; DIGIT_COUNT] = [
    0b1101_1100_0101_0100, // 0
    0b0000_0101_0101_0100, // 1
    0b1110_1101_0100_0100, // 2
    0b1010_1101_0101_0100, // 3
    0b1011_1001_1000_0100, // 4
    0b1011_1101_0101_0000, // 5
    0b1110_0111_0101_0000, // 6
    0b1000_1101_1000_0100, // 7
    0b1111_1101_0101_0100, // 8
    0b1011_1101_1000_0100, // 9
];

const DOWN_GLYPHS: [u16; DIGIT_COUNT] = [
    0b1101_1100_0101_0100, // 0
    0b0000_0101_0101_0100, // 1
    0b1011_1101_0101_0000, // 2
    0b1010_1101_0101_0100, // 3
    0b1110_1011_0001_0000, // 4
    0b1110_1101_0100_0100, // 5
    0b0011_1101_1100_0100, // 6
    0b1000_1011_0101_0000, // 7
    0b1111_1101_0101_0100, // 8
    0b1110_1011_0101_0000, // 9
];

/// Which of the last three pixels of the short digit show the digit color
///
/// The short digit has 13 pixels, and its tail does not follow the glyph
/// bits. The mapping comes from how the tail pixels are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TailPatch {
    /// First and last lit ("11")
    Both,
    /// Only the last lit ("10")
    LastOnly,
    /// Only the first lit ("01")
    FirstOnly,
    /// All three background
    Neither,
}

impl TailPatch {
    pub const fn for_digit(digit: Digit) -> Self {
        match digit.value() {
            0 | 1 | 3 | 8 => Self::Both,
            2 | 4 | 7 | 9 => Self::LastOnly,
            5 | 6 => Self::FirstOnly,
            _ => Self::Neither,
        }
    }

    pub const fn first_lit(self) -> bool {
        matches!(self, Self::Both | Self::FirstOnly)
    }

    pub const fn last_lit(self) -> bool {
        matches!(self, Self::Both | Self::LastOnly)
    }
}
