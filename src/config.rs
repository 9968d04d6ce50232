//! Compile-time configuration
//!
//! Everything the console needs to know that is not wiring, see [`crate::pins`]
//! for that.

/// Firmware identity shown on the info screen
pub const FIRMWARE_VERSION: &str = concat!(
    "Version ",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR"),
    " public mini"
);

/// UART console speed
pub const BAUD_RATE: u32 = 115_200;

// Time
/// NTP server used for time synchronization
pub const NTP_SERVER: &str = "pool.ntp.org";
/// Standard offset from UTC, Central European Time +1 hour
pub const GMT_OFFSET_SECS: i64 = 3600;
/// Daylight saving offset, +1 hour
pub const DAYLIGHT_OFFSET_SECS: i64 = 3600;
/// Clock strip refresh period
pub const TIME_REFRESH_MS: u64 = 1000;
/// Height of the clock strip at the bottom of the screen
pub const TIME_STRIP_HEIGHT: u32 = 16;

// Storage
/// Size of the emulated EEPROM
pub const STORE_SIZE: usize = 512;
/// Typical erased flash value
pub const ERASE_VALUE: u8 = 0xFF;
/// NVS namespace and key holding the EEPROM image
pub const STORE_NAMESPACE: &str = "console";
pub const STORE_KEY: &str = "eeprom";

// Wi-Fi
/// Association polls before giving up
pub const WIFI_MAX_ATTEMPTS: u32 = 20;
/// Pause between association polls
pub const WIFI_ATTEMPT_DELAY_MS: u32 = 500;
/// Pause between scan results, paces the list on screen
pub const SCAN_ITEM_DELAY_MS: u32 = 100;

// Input
/// Poll period while a handler waits for a line
pub const INPUT_POLL_MS: u32 = 10;
/// A notepad line consisting of only this ends the session
pub const NOTEPAD_TERMINATOR: &str = ".";

// How long result screens stay up before returning to the loop
pub const HOLD_SHORT_MS: u32 = 2000;
pub const HOLD_LONG_MS: u32 = 3000;
pub const SHUTDOWN_DELAY_MS: u32 = 200;
pub const RESTART_DELAY_MS: u32 = 500;

// Boot logo, must match build.rs
pub const LOGO_WIDTH: u32 = 204;
pub const LOGO_HEIGHT: u32 = 192;
