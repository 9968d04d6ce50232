use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Console;
use crate::board::{Board, Power};
use crate::clock::Clock;
use crate::config::{ERASE_VALUE, HOLD_SHORT_MS, RESTART_DELAY_MS, SHUTDOWN_DELAY_MS};
use crate::session::Mode;
use crate::terminal::Terminal;

impl<B: Board> Console<B> {
    pub(super) fn restart(&mut self) -> Result<()> {
        self.hw.terminal.write_line("Restarting...")?;
        log::info!("Restart requested");
        self.hw.clock.delay_ms(RESTART_DELAY_MS);
        self.hw.power.restart();
        self.session.mode = Mode::Halted;
        Ok(())
    }

    /// Deep sleep without a wake source, only a reset brings the board back
    pub(super) fn shutdown(&mut self) -> Result<()> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::RED, Rgb565::BLACK);
        screen.println("Shutting down system...")?;
        self.hw.clock.delay_ms(SHUTDOWN_DELAY_MS);
        self.hw.screen.println(" ")?;

        log::info!("Entering deep sleep");
        self.hw.power.deep_sleep();
        self.session.mode = Mode::Halted;
        Ok(())
    }

    /// Fill the whole store with the erase value and commit
    pub(super) fn erase_store(&mut self) -> Result<()> {
        self.hw.terminal.write_line("Erasing EEPROM")?;
        for offset in 0..self.hw.store.len() {
            self.hw.store.write(offset, ERASE_VALUE)?;
        }
        self.hw.store.commit()?;

        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::RED, Rgb565::BLACK);
        screen.println("EEPROM erased!")?;
        self.hold(HOLD_SHORT_MS);
        self.hw.terminal.write_line("EEPROM has been erased.")?;
        Ok(())
    }
}
