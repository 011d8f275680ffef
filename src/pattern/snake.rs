use embassy_time::Duration;
use heapless::Deque;

use super::{Pattern, hash};
use crate::color::{BLACK, COLOR_CHOICES, Rgb};
use crate::strip::PixelStrip;

const FRAME_HOLD: Duration = Duration::from_millis(60);

/// Longest the snake grows before it starts over
pub const MAX_SNAKE_LEN: usize = 16;

/// Steps between two growth spurts
const STEPS_PER_GROWTH: u32 = 8;

/// A coloured snake crawling along the strip, growing as it goes
///
/// The body is a ring of pixel indices, head at the back. Once it reaches
/// [`MAX_SNAKE_LEN`] it shrinks back to a single pixel in a new colour.
#[derive(Debug, Clone)]
pub struct SnakePattern {
    body: Deque<usize, MAX_SNAKE_LEN>,
    color: Rgb,
    steps: u32,
}

impl Default for SnakePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakePattern {
    pub const fn new() -> Self {
        Self {
            body: Deque::new(),
            color: COLOR_CHOICES[0],
            steps: 0,
        }
    }

    /// Current body length in pixels
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Option<usize> {
        self.body.back().copied()
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    fn pick_color(&mut self) {
        // Skip black, the snake would be invisible
        let choices = COLOR_CHOICES.iter().filter(|&&color| color != BLACK);
        let count = choices.clone().count();
        let pick = hash(u64::from(self.steps)) as usize % count;
        if let Some(&color) = choices.clone().nth(pick) {
            self.color = color;
        }
    }
}

impl Pattern for SnakePattern {
    fn step(&mut self, strip: &mut PixelStrip<'_>) -> Duration {
        let len = strip.len();
        let head = self.head().map_or(0, |head| (head + 1) % len);

        let grow = self.steps % STEPS_PER_GROWTH == 0;
        if self.body.is_full() {
            while self.body.len() > 1 {
                self.body.pop_front();
            }
            self.pick_color();
        } else if !grow {
            self.body.pop_front();
        }
        // Room is guaranteed by the pops above
        let _ = self.body.push_back(head);
        self.steps = self.steps.wrapping_add(1);

        strip.set_strip_constant(BLACK);
        for &pixel in self.body.iter() {
            strip.set_pixel(pixel, self.color);
        }
        FRAME_HOLD
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
