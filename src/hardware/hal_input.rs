//! Adapter from an embedded-hal input pin to [`PressInput`].

use embedded_hal::digital::InputPin;

use super::traits::PressInput;

/// Active-high button on any `embedded_hal::digital::InputPin`.
///
/// The HAL pin type is expected to already be an input with pull-down
/// (most HALs fix the mode at construction), so configuring is a no-op.
pub struct HalInput<P> {
    pin: P,
}

impl<P: InputPin> HalInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> PressInput for HalInput<P> {
    type Error = P::Error;

    fn configure_as_input(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    #[test]
    fn reads_high_as_pressed() {
        let expectations = [
            Transaction::get(State::Low),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut input = HalInput::new(Mock::new(&expectations));

        input.configure_as_input().unwrap();
        assert!(!input.is_pressed().unwrap());
        assert!(input.is_pressed().unwrap());
        assert!(!input.is_pressed().unwrap());

        input.into_inner().done();
    }
}
