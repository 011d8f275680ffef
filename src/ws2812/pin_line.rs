use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::DataLine;

/// [`DataLine`] over a push-pull GPIO, timed with the Cortex-M cycle counter loop
///
/// The pulse counts handed to `delay_cycles` are whole-phase widths, so
/// `overhead_cycles` (the cost of one pin write on the target) is subtracted
/// from each wait.
///
/// The pin must be infallible, as plain GPIO outputs on most HALs are.
pub struct PinLine<P: OutputPin<Error = Infallible>> {
    pin: P,
    overhead_cycles: u32,
}

impl<P: OutputPin<Error = Infallible>> PinLine<P> {
    pub const fn new(pin: P, overhead_cycles: u32) -> Self {
        Self {
            pin,
            overhead_cycles,
        }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin<Error = Infallible>> DataLine for PinLine<P> {
    #[inline(always)]
    fn set_high(&mut self) {
        let Ok(()) = self.pin.set_high();
    }

    #[inline(always)]
    fn set_low(&mut self) {
        let Ok(()) = self.pin.set_low();
    }

    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        let cycles = cycles.saturating_sub(self.overhead_cycles);
        if cycles > 0 {
            cortex_m::asm::delay(cycles);
        }
    }
}
