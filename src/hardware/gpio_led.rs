use super::traits::Led;
use embassy_stm32::gpio::Output;

/// LED sinking current into the pin (Blue Pill PC13): low is lit.
pub struct GpioLed<'d> {
    pin: Output<'d>,
    lit: bool,
}

impl<'d> GpioLed<'d> {
    /// Takes an output that was created high, i.e. with the LED dark.
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, lit: false }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        self.pin.set_low();
        self.lit = true;
    }

    fn off(&mut self) {
        self.pin.set_high();
        self.lit = false;
    }

    fn is_on(&self) -> bool {
        self.lit
    }
}
