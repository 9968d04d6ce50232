//! Capabilities the console needs from the hardware
//!
//! A [`Board`] names one concrete type per capability. The ESP32 build wires
//! the real peripherals, tests use in-memory doubles.

use std::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::Clock;
use crate::network::Network;
use crate::screen::Screen;
use crate::storage::{Eeprom, Persistence};
use crate::terminal::Terminal;

/// Restart and power-down. On hardware neither returns.
pub trait Power {
    fn restart(&mut self);

    /// Low power halt with no wake source
    fn deep_sleep(&mut self);
}

pub trait Board {
    type DisplayError: fmt::Debug;
    type Display: DrawTarget<Color = Rgb565, Error = Self::DisplayError> + OriginDimensions;
    type Terminal: Terminal;
    type Network: Network;
    type Clock: Clock;
    type Power: Power;
    type Persistence: Persistence;
}

/// Every peripheral the console talks to
pub struct Hardware<B: Board> {
    pub screen: Screen<B::Display>,
    pub terminal: B::Terminal,
    pub network: B::Network,
    pub clock: B::Clock,
    pub power: B::Power,
    pub store: Eeprom<B::Persistence>,
}

impl<B: Board> Hardware<B> {
    pub fn new(
        display: B::Display,
        terminal: B::Terminal,
        network: B::Network,
        clock: B::Clock,
        power: B::Power,
        store: Eeprom<B::Persistence>,
    ) -> Self {
        Self {
            screen: Screen::new(display),
            terminal,
            network,
            clock,
            power,
            store,
        }
    }
}
