//! Input and output capabilities, plus their concrete drivers.

pub mod hal_input;
pub mod traits;

#[cfg(target_arch = "arm")]
pub mod gpio_button;
#[cfg(target_arch = "arm")]
pub mod gpio_led;
