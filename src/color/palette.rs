use super::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Colors offered while editing the clock face colors
#[allow(clippy::unreadable_literal)]
pub const COLOR_CHOICES: [Rgb; 15] = hex_palette![
    0xFF0000, // Red
    0x00FF00, // Green
    0x0000FF, // Blue
    0xFF00FF, // Magenta
    0xFFFF00, // Yellow
    0xFFA500, // Orange
    0x00FFFF, // Cyan
    0xFFFFFF, // White
    0x000000, // Black
    0x0050EF, // Cobalt
    0xF0A30A, // Auburn
    0xA1D269, // Easter green
    0x994C00, // Burnt orange
    0x7FFF00, // Lime green
    0xFF4500, // Orange red
];

/// Band colors used by the crossing rainbow patterns
#[allow(clippy::unreadable_literal)]
pub const RAINBOW: [Rgb; 6] = hex_palette![
    0xFF0000, // Red
    0xFF4500, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x0000FF, // Blue
    0xFF00FF, // Magenta
];

/// Move `index` by `delta` inside `0..len`, wrapping around at both ends
///
/// Stepping below zero lands on the last entry and stepping past the end lands
/// on the first one, no matter how large `delta` is.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(index: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as i64 + i64::from(delta);
    if moved < 0 {
        len - 1
    } else if moved as usize >= len {
        0
    } else {
        moved as usize
    }
}
