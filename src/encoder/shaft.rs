/// Pin history vector of a clockwise detent: last (dt, clk) = 10, now 00
const CLOCKWISE_DETENT: u8 = 0b1000;
/// Pin history vector of a counter-clockwise detent: last (dt, clk) = 01, now 00
const COUNTER_CLOCKWISE_DETENT: u8 = 0b0100;

/// Rotation direction of the shaft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Count contribution of one detent
    pub const fn step(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Quadrature decoder state of the encoder shaft
///
/// The vector holds the previous pin pair in bits 3..2 and the current one in
/// bits 1..0, each pair as `(dt << 1) | clk`. Only the two settled detent
/// vectors count; every other vector is a transition or contact bounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaftState {
    vector: u8,
    counts: i32,
    direction: Option<Direction>,
}

impl ShaftState {
    pub const fn new() -> Self {
        Self {
            vector: 0,
            counts: 0,
            direction: None,
        }
    }

    /// Feed one pin sample; returns the direction if it completed a detent
    pub fn on_edge(&mut self, clk: bool, dt: bool) -> Option<Direction> {
        self.vector = ((self.vector << 2) & 0b1100) | (u8::from(dt) << 1) | u8::from(clk);

        let direction = match self.vector {
            CLOCKWISE_DETENT => Direction::Clockwise,
            COUNTER_CLOCKWISE_DETENT => Direction::CounterClockwise,
            _ => return None,
        };
        self.counts = self.counts.saturating_add(direction.step());
        self.direction = Some(direction);
        Some(direction)
    }

    /// Accumulated detents since the last take
    pub const fn counts(&self) -> i32 {
        self.counts
    }

    pub fn take_counts(&mut self) -> i32 {
        core::mem::take(&mut self.counts)
    }

    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub const fn vector(&self) -> u8 {
        self.vector
    }
}

impl Default for ShaftState {
    fn default() -> Self {
        Self::new()
    }
}
