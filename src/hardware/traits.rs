/// A digital line a button is wired to.
///
/// `true` from [`is_pressed`](PressInput::is_pressed) means the button is
/// physically held down. Implementations decide how that maps onto the
/// electrical level.
pub trait PressInput {
    type Error;

    /// Put the line in input mode with a pull-down, so an open switch reads released.
    fn configure_as_input(&mut self) -> Result<(), Self::Error>;

    fn is_pressed(&mut self) -> Result<bool, Self::Error>;
}

impl<T: PressInput + ?Sized> PressInput for &mut T {
    type Error = T::Error;

    fn configure_as_input(&mut self) -> Result<(), Self::Error> {
        (**self).configure_as_input()
    }

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        (**self).is_pressed()
    }
}

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn is_on(&self) -> bool;

    fn toggle(&mut self) {
        if self.is_on() {
            self.off();
        } else {
            self.on();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeLed {
        lit: bool,
        writes: u32,
    }

    impl Led for FakeLed {
        fn on(&mut self) {
            self.lit = true;
            self.writes += 1;
        }

        fn off(&mut self) {
            self.lit = false;
            self.writes += 1;
        }

        fn is_on(&self) -> bool {
            self.lit
        }
    }

    #[test]
    fn toggle_flips_state() {
        let mut led = FakeLed::default();
        led.toggle();
        assert!(led.is_on());
        led.toggle();
        assert!(!led.is_on());
        assert_eq!(led.writes, 2);
    }
}
