//! Rotary encoder with push button.
//!
//! Pin-change interrupts feed the decoder through an [`InterruptHandle`]; the
//! main loop drains it through a [`PollHandle`]. Both handles point at the
//! same [`RotaryEncoder`], whose state lives behind `critical-section`
//! mutexes. Every read-and-reset is a single critical section, so an edge that
//! arrives during a poll lands either in the value returned or in the next one.

mod button;
mod shaft;

use core::cell::{Cell, RefCell};

use critical_section::Mutex;

pub use button::{ButtonGesture, ButtonState, ButtonThresholds};
pub use shaft::{Direction, ShaftState};

/// Source of a pin-change interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinChange {
    Clk,
    Dt,
    Switch,
}

/// Encoder pins and edge timer, as seen from the interrupt handler
pub trait EncoderHardware {
    fn clk(&mut self) -> bool;
    fn dt(&mut self) -> bool;
    /// `true` while the button is held down
    fn switch_pressed(&mut self) -> bool;
    /// Current value of the free-running edge timer
    fn timestamp(&mut self) -> u16;
}

/// Decoder state shared between interrupt and main-loop context
pub struct RotaryEncoder {
    enabled: Mutex<Cell<bool>>,
    shaft: Mutex<RefCell<ShaftState>>,
    button: Mutex<RefCell<ButtonState>>,
}

impl RotaryEncoder {
    /// Create a disabled encoder
    pub const fn new(thresholds: ButtonThresholds) -> Self {
        Self {
            enabled: Mutex::new(Cell::new(false)),
            shaft: Mutex::new(RefCell::new(ShaftState::new())),
            button: Mutex::new(RefCell::new(ButtonState::new(thresholds))),
        }
    }

    /// Clear all decoder state and start accepting edges
    pub fn enable(&self) {
        critical_section::with(|cs| {
            *self.shaft.borrow(cs).borrow_mut() = ShaftState::new();
            self.button.borrow(cs).borrow_mut().reset();
            self.enabled.borrow(cs).set(true);
        });
    }

    /// Ignore edges until the next [`RotaryEncoder::enable`]
    pub fn disable(&self) {
        critical_section::with(|cs| self.enabled.borrow(cs).set(false));
    }

    pub fn is_enabled(&self) -> bool {
        critical_section::with(|cs| self.enabled.borrow(cs).get())
    }

    /// Handle for the pin-change interrupt
    pub const fn interrupts(&self) -> InterruptHandle<'_> {
        InterruptHandle { encoder: self }
    }

    /// Handle for the main loop
    pub const fn poller(&self) -> PollHandle<'_> {
        PollHandle { encoder: self }
    }
}

impl Default for RotaryEncoder {
    fn default() -> Self {
        Self::new(ButtonThresholds::default())
    }
}

/// Interrupt-side view of a [`RotaryEncoder`]
#[derive(Clone, Copy)]
pub struct InterruptHandle<'a> {
    encoder: &'a RotaryEncoder,
}

impl InterruptHandle<'_> {
    /// Route one pin-change interrupt to the axis it belongs to
    pub fn dispatch<H: EncoderHardware>(&self, change: PinChange, hardware: &mut H) {
        match change {
            PinChange::Clk | PinChange::Dt => {
                let (clk, dt) = (hardware.clk(), hardware.dt());
                self.on_shaft_edge(clk, dt);
            }
            PinChange::Switch => {
                let timestamp = hardware.timestamp();
                self.on_button_edge(hardware.switch_pressed(), timestamp);
            }
        }
    }

    /// New CLK/DT sample after an edge on either pin
    pub fn on_shaft_edge(&self, clk: bool, dt: bool) {
        critical_section::with(|cs| {
            if self.encoder.enabled.borrow(cs).get() {
                self.encoder.shaft.borrow(cs).borrow_mut().on_edge(clk, dt);
            }
        });
    }

    /// Button edge; `pressed` is the level after the edge
    pub fn on_button_edge(&self, pressed: bool, timestamp: u16) {
        critical_section::with(|cs| {
            if !self.encoder.enabled.borrow(cs).get() {
                return;
            }
            let mut button = self.encoder.button.borrow(cs).borrow_mut();
            if pressed {
                button.on_press(timestamp);
            } else {
                button.on_release(timestamp);
            }
        });
    }
}

/// Main-loop view of a [`RotaryEncoder`]
#[derive(Clone, Copy)]
pub struct PollHandle<'a> {
    encoder: &'a RotaryEncoder,
}

impl PollHandle<'_> {
    /// Detents since the last call, positive clockwise
    pub fn take_rotation_counts(&self) -> i32 {
        critical_section::with(|cs| self.encoder.shaft.borrow(cs).borrow_mut().take_counts())
    }

    /// Latest gesture; reads as [`ButtonGesture::Resting`] until the next release
    pub fn take_button_state(&self) -> ButtonGesture {
        critical_section::with(|cs| self.encoder.button.borrow(cs).borrow_mut().take_gesture())
    }

    /// Whether the button was released since the last call
    pub fn take_press_occurred(&self) -> bool {
        critical_section::with(|cs| {
            self.encoder
                .button
                .borrow(cs)
                .borrow_mut()
                .take_press_occurred()
        })
    }

    pub fn last_direction(&self) -> Option<Direction> {
        critical_section::with(|cs| self.encoder.shaft.borrow(cs).borrow().direction())
    }

    pub fn multi_click_count(&self) -> u16 {
        critical_section::with(|cs| self.encoder.button.borrow(cs).borrow().multi_clicks())
    }
}
