//! Compile-time configuration for the classifier and the demo firmware.

/// Consecutive "still pressed" ticks that turn a press into a long press.
pub const LONG_PRESS_THRESHOLD: u32 = 25;

/// Polling tick period. With the default threshold a long press is 250 ms.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Press events buffered between the button task and the LED task.
pub const PRESS_QUEUE_DEPTH: usize = 4;

/// LED blinks shown for a long press.
pub const LONG_PRESS_BLINKS: u8 = 3;

/// Half period of a long-press blink.
pub const BLINK_INTERVAL_MS: u64 = 80;

/// Period of the "still alive" status log in `main`.
pub const STATUS_INTERVAL_MS: u64 = 5_000;
