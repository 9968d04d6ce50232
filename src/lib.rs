//! Serial command console for an ESP32-S3 with an ILI9341 TFT
//!
//! The console logic in [`console`] only talks to the capabilities named by
//! [`board::Board`], so it runs the same against the real peripherals in
//! `esp` and against the doubles used by the tests.

pub mod board;
pub mod clock;
pub mod command;
pub mod config;
pub mod console;
pub mod ili9341;
pub mod network;
pub mod pins;
pub mod screen;
pub mod session;
pub mod storage;
pub mod terminal;

#[cfg(target_os = "espidf")]
pub mod esp;

#[cfg(test)]
mod testing;
