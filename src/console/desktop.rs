//! Static desktop mock: sky, sun, clouds, a grass bar and four icons.
//! Nothing here reacts to input.

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Console;
use crate::board::Board;

/// Icon edge length
pub const ICON_SIZE: u32 = 60;
/// Gap around and between icons
pub const ICON_MARGIN: i32 = 20;

const FRAME_COLOR: Rgb565 = Rgb565::WHITE;
const GLYPH_COLOR: Rgb565 = Rgb565::BLACK;
const BAR_HEIGHT: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Network,
    Info,
    Scan,
    Power,
}

/// Top left corner of an icon frame. Three icons in the first row, power below.
pub fn icon_origin(icon: Icon) -> Point {
    let step = ICON_SIZE as i32 + ICON_MARGIN;
    match icon {
        Icon::Network => Point::new(ICON_MARGIN, ICON_MARGIN),
        Icon::Info => Point::new(ICON_MARGIN + step, ICON_MARGIN),
        Icon::Scan => Point::new(ICON_MARGIN + 2 * step, ICON_MARGIN),
        Icon::Power => Point::new(ICON_MARGIN, ICON_MARGIN + step),
    }
}

impl<B: Board> Console<B> {
    pub(super) fn show_desktop(&mut self) -> Result<()> {
        let screen = &mut self.hw.screen;
        let (width, height) = (screen.width(), screen.height());

        screen.clear(Rgb565::CYAN)?;

        // Sun
        screen.fill_circle(width - 40, 40, 20, Rgb565::YELLOW)?;

        // Clouds
        for (cx, cy, r) in [
            (40, 30, 10),
            (50, 25, 12),
            (60, 30, 10),
            (90, 40, 8),
            (98, 35, 10),
            (108, 40, 8),
        ] {
            screen.fill_circle(cx, cy, r, Rgb565::WHITE)?;
        }

        // Bottom bar
        screen.fill_rect(
            0,
            height - BAR_HEIGHT as i32,
            width as u32,
            BAR_HEIGHT,
            Rgb565::GREEN,
        )?;

        for icon in [Icon::Network, Icon::Info, Icon::Scan, Icon::Power] {
            let origin = icon_origin(icon);
            screen.draw_rect(origin.x, origin.y, ICON_SIZE, ICON_SIZE, FRAME_COLOR)?;
            let Point { x, y } = origin;
            match icon {
                Icon::Network => {
                    // Dot and three waves
                    for r in [2, 10, 16, 22] {
                        screen.draw_circle(x + 30, y + 40, r, GLYPH_COLOR)?;
                    }
                }
                Icon::Info => {
                    screen.fill_circle(x + 30, y + 20, 4, GLYPH_COLOR)?;
                    screen.fill_rect(x + 28, y + 28, 4, 20, GLYPH_COLOR)?;
                }
                Icon::Scan => {
                    // Magnifying glass
                    screen.draw_circle(x + 25, y + 25, 15, GLYPH_COLOR)?;
                    screen.draw_line(x + 35, y + 35, x + 50, y + 50, GLYPH_COLOR)?;
                }
                Icon::Power => {
                    screen.draw_circle(x + 30, y + 30, 20, GLYPH_COLOR)?;
                    screen.draw_line(x + 30, y + 10, x + 30, y + 30, GLYPH_COLOR)?;
                }
            }
        }

        log::info!("Desktop drawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::console;

    #[test]
    fn icons_sit_on_a_fixed_grid() {
        assert_eq!(icon_origin(Icon::Network), Point::new(20, 20));
        assert_eq!(icon_origin(Icon::Info), Point::new(100, 20));
        assert_eq!(icon_origin(Icon::Scan), Point::new(180, 20));
        assert_eq!(icon_origin(Icon::Power), Point::new(20, 100));
    }

    #[test]
    fn desktop_draws_background_and_frames() {
        let mut console = console();
        console.show_desktop().unwrap();
        let display = console.hardware().screen.display();

        // Sky, grass, sun
        assert_eq!(display.pixel(150, 150), Rgb565::CYAN);
        assert_eq!(display.pixel(5, 235), Rgb565::GREEN);
        assert_eq!(display.pixel(280, 40), Rgb565::YELLOW);

        for icon in [Icon::Network, Icon::Info, Icon::Scan, Icon::Power] {
            let Point { x, y } = icon_origin(icon);
            assert_eq!(display.pixel(x, y), FRAME_COLOR, "{:?}", icon);
            assert_eq!(display.pixel(x + 59, y + 59), FRAME_COLOR, "{:?}", icon);
        }

        // Body of the "i"
        let Point { x, y } = icon_origin(Icon::Info);
        assert_eq!(display.pixel(x + 29, y + 40), GLYPH_COLOR);
    }

    #[test]
    fn desktop_prints_no_text() {
        let mut console = console();
        console.show_desktop().unwrap();
        assert!(console.hardware().screen.lines().iter().all(|l| l.is_empty()));
        assert!(console.hardware().terminal.output().is_empty());
    }
}
