use core::convert::Infallible;

use super::traits::PressInput;
use embassy_stm32::gpio::{Flex, Pull};

/// Push button wired between a GPIO and 3V3.
///
/// Starts out unconfigured; [`PressInput::configure_as_input`] switches the
/// pin to input with the internal pull-down so an open switch reads low.
pub struct GpioButton<'d> {
    pin: Flex<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: Flex<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> PressInput for GpioButton<'d> {
    type Error = Infallible;

    fn configure_as_input(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_input(Pull::Down);
        Ok(())
    }

    fn is_pressed(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }
}
