use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Console;
use crate::board::Board;
use crate::command::Command;
use crate::config::{HOLD_SHORT_MS, LOGO_HEIGHT, LOGO_WIDTH};

impl<B: Board> Console<B> {
    /// Main menu, every command with its shortcut
    pub(super) fn show_menu(&mut self) -> Result<()> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        screen.println("Enter command:")?;
        for command in Command::ALL {
            screen.println(&command.to_string())?;
        }
        Ok(())
    }

    /// Centered boot logo, raw big endian RGB565
    pub(super) fn show_logo(&mut self, logo: &[u8]) -> Result<()> {
        let expected = (LOGO_WIDTH * LOGO_HEIGHT * 2) as usize;
        if logo.len() != expected {
            log::warn!(
                "Logo has {} bytes, expected {} for {}x{}, skipping",
                logo.len(),
                expected,
                LOGO_WIDTH,
                LOGO_HEIGHT
            );
            return Ok(());
        }

        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        let x = (screen.width() - LOGO_WIDTH as i32) / 2;
        let y = (screen.height() - LOGO_HEIGHT as i32) / 2;
        screen.draw_image(logo, LOGO_WIDTH, Point::new(x, y))?;
        self.hold(HOLD_SHORT_MS);
        Ok(())
    }
}
