//! Rainbow bands sweeping diagonally across the clock face

use embassy_time::Duration;

use super::Pattern;
use crate::color::{RAINBOW, Rgb};
use crate::strip::PixelStrip;

// Pixel indices of the five horizontal rows of the Maverick board, left to
// right. The middle row is the longest; the outer rows lag it by two columns.
const ROW1: [usize; 12] = [5, 6, 15, 16, 25, 26, 35, 36, 45, 46, 55, 56];
const ROW2: [usize; 13] = [4, 7, 14, 17, 24, 27, 34, 37, 44, 47, 54, 57, 63];
const ROW3: [usize; 14] = [0, 3, 8, 13, 18, 23, 28, 33, 38, 43, 48, 53, 58, 62];
const ROW4: [usize; 13] = [2, 9, 12, 19, 22, 29, 32, 39, 42, 49, 52, 59, 61];
const ROW5: [usize; 12] = [1, 10, 11, 20, 21, 30, 31, 40, 41, 50, 51, 60];

/// Columns of the middle row
const COLUMNS: usize = ROW3.len();

/// Paints one column per step in the current band colour, switching to the
/// next rainbow colour after each full pass
#[derive(Debug, Clone)]
pub struct RainbowCrossingPattern {
    hold: Duration,
    column: usize,
    band: usize,
}

impl RainbowCrossingPattern {
    pub const fn new(hold: Duration) -> Self {
        Self {
            hold,
            column: 0,
            band: 0,
        }
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    /// Colour of the band being painted
    pub const fn band_color(&self) -> Rgb {
        RAINBOW[self.band]
    }

    fn paint_column(&self, strip: &mut PixelStrip<'_>) {
        let color = self.band_color();
        let column = self.column;

        strip.set_pixel(ROW3[column], color);
        if let Some(inner) = column.checked_sub(1) {
            // Rows 2 and 4 have one column less than the middle row
            for row in [&ROW2[..], &ROW4[..]] {
                if let Some(&pixel) = row.get(inner) {
                    strip.set_pixel(pixel, color);
                }
            }
        }
        if let Some(outer) = column.checked_sub(2) {
            for row in [&ROW1[..], &ROW5[..]] {
                if let Some(&pixel) = row.get(outer) {
                    strip.set_pixel(pixel, color);
                }
            }
        }
    }
}

impl Pattern for RainbowCrossingPattern {
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        self.paint_column(strip);

        if self.column + 1 == COLUMNS {
            self.column = 0;
            self.band = (self.band + 1) % RAINBOW.len();
        } else {
            self.column += 1;
        }
        self.hold
    }

    fn reset(&mut self) {
        self.column = 0;
        self.band = 0;
    }
}
