//! Short/long press classification for a single polled GPIO button.
//!
//! The library holds everything that can run on the host: the press
//! classifier state machine, the input capability trait with its
//! embedded-hal adapter, and the firmware configuration constants.
//! The STM32 drivers under `hardware` are only compiled for ARM targets.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`) and with the `defmt`
//! feature off, so no global logger is needed to link them.

#![cfg_attr(not(test), no_std)]

pub mod classifier;
pub mod config;
pub mod hardware;

pub use classifier::{PressClassifier, PressKind, Transition};
pub use hardware::traits::PressInput;
