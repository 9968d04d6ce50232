//! ILI9341 TFT Display Driver
//!
//! Used with the common 2.4"/2.8" 320x240 SPI TFT modules.
//!
//! This driver is losely modeled after the TFT_eSPI init tables but built for
//! [`embedded_graphics`](https://github.com/jamwaffles/embedded-graphics), the
//! driver itself is the draw target. There is no frame buffer: every draw call
//! goes straight to the controller RAM.
//!
//! ### Usage
//! 1. create the driver with [`driver::Ili9341::new`], which resets and
//!    initializes the panel in landscape orientation
//! 1. draw onto it with `embedded_graphics` primitives and text
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod driver;
pub mod interface;

mod cmd;
mod flag;

pub use driver::{Ili9341, Orientation};

/// Panel width in its native portrait orientation
pub const WIDTH: u16 = 240;

/// Panel height in its native portrait orientation
pub const HEIGHT: u16 = 320;
