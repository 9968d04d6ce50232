//! ILI9341 Display Driver Implementation
//!
//! High level functions for initialization, orientation and windowed pixel
//! writes, plus the [`DrawTarget`] implementation used by the console screens.
//!
//! ## Drawing model
//!
//! Every draw call sets a column/page address window and streams RGB565 words
//! into it. Solid fills are the cheapest: one window, one repeated color.
//! Pixels outside the visible area are clipped before anything is sent.

pub use display_interface::DisplayError;

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::ili9341::interface::DisplayInterface;
use crate::ili9341::{cmd::Cmd, flag::Flag, HEIGHT, WIDTH};

/// Screen orientation, numbered like the TFT_eSPI rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Rotation 0, 240x320
    Portrait,
    /// Rotation 1, 320x240
    Landscape,
    /// Rotation 2, 240x320 upside down
    PortraitFlipped,
    /// Rotation 3, 320x240 upside down
    LandscapeFlipped,
}

impl Orientation {
    fn madctl(self) -> u8 {
        match self {
            Orientation::Portrait => Flag::MADCTL_MX | Flag::MADCTL_BGR,
            Orientation::Landscape => Flag::MADCTL_MV | Flag::MADCTL_BGR,
            Orientation::PortraitFlipped => Flag::MADCTL_MY | Flag::MADCTL_BGR,
            Orientation::LandscapeFlipped => {
                Flag::MADCTL_MX | Flag::MADCTL_MY | Flag::MADCTL_MV | Flag::MADCTL_BGR
            }
        }
    }

    fn is_landscape(self) -> bool {
        matches!(
            self,
            Orientation::Landscape | Orientation::LandscapeFlipped
        )
    }
}

/// ILI9341 TFT Display Driver
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for timing
pub struct Ili9341<SPI, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, DC, RST>,
    delay: DELAY,
    orientation: Orientation,
}

impl<SPI, DC, RST, DELAY> Ili9341<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create and initialize the display driver
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: DELAY,
        orientation: Orientation,
    ) -> Result<Self, DisplayError> {
        let interface = DisplayInterface::new(spi, dc, rst);
        let mut ili9341 = Ili9341 {
            interface,
            delay,
            orientation,
        };
        ili9341.init()?;
        Ok(ili9341)
    }

    /// Reset and run the power-on register sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing ILI9341 display");

        self.interface.reset(&mut self.delay)?;

        self.interface.cmd(Cmd::SW_RESET)?;
        self.delay.delay_ms(120);

        // Power
        self.interface
            .cmd_with_data(Cmd::POWER_CONTROL_1, &[Flag::POWER_CONTROL_1_GVDD])?;
        self.interface
            .cmd_with_data(Cmd::POWER_CONTROL_2, &[Flag::POWER_CONTROL_2_STEP_UP])?;
        self.interface
            .cmd_with_data(Cmd::VCOM_CONTROL_1, &[Flag::VCOM_HIGH, Flag::VCOM_LOW])?;
        self.interface
            .cmd_with_data(Cmd::VCOM_CONTROL_2, &[Flag::VCOM_OFFSET])?;

        // Memory layout and pixel format
        self.set_orientation(self.orientation)?;
        self.interface
            .cmd_with_data(Cmd::PIXEL_FORMAT_SET, &[Flag::PIXEL_FORMAT_16BIT])?;

        // Timing and gamma
        self.interface.cmd_with_data(
            Cmd::FRAME_RATE_CONTROL,
            &[Flag::FRAME_RATE_DIVISION, Flag::FRAME_RATE_70HZ],
        )?;
        self.interface
            .cmd_with_data(Cmd::DISPLAY_FUNCTION_CONTROL, &Flag::DISPLAY_FUNCTION_DEFAULT)?;
        self.interface
            .cmd_with_data(Cmd::GAMMA_SET, &[Flag::GAMMA_CURVE_1])?;
        self.interface
            .cmd_with_data(Cmd::POSITIVE_GAMMA, &Flag::POSITIVE_GAMMA_TABLE)?;
        self.interface
            .cmd_with_data(Cmd::NEGATIVE_GAMMA, &Flag::NEGATIVE_GAMMA_TABLE)?;
        self.interface.cmd(Cmd::INVERSION_OFF)?;

        // Wake up; the controller needs 120ms after SLEEP_OUT
        self.interface.cmd(Cmd::SLEEP_OUT)?;
        self.delay.delay_ms(120);
        self.interface.cmd(Cmd::NORMAL_MODE_ON)?;
        self.interface.cmd(Cmd::DISPLAY_ON)?;

        log::info!(
            "ILI9341 ready, {}x{}",
            self.size().width,
            self.size().height
        );
        Ok(())
    }

    /// Change the scan direction; width and height swap in landscape
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.interface
            .cmd_with_data(Cmd::MEMORY_ACCESS_CONTROL, &[orientation.madctl()])?;
        self.orientation = orientation;
        Ok(())
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the inclusive address window that the next pixel stream fills
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.interface
            .cmd_with_data(Cmd::COLUMN_ADDRESS_SET, &[x0h, x0l, x1h, x1l])?;
        self.interface
            .cmd_with_data(Cmd::PAGE_ADDRESS_SET, &[y0h, y0l, y1h, y1l])
    }

    /// Window covering a rectangle that is already clipped to the screen
    fn set_window_for(&mut self, area: &Rectangle) -> Result<(), DisplayError> {
        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = x0 + area.size.width as u16 - 1;
        let y1 = y0 + area.size.height as u16 - 1;
        self.set_window(x0, y0, x1, y1)
    }
}

impl<SPI, DC, RST, DELAY> OriginDimensions for Ili9341<SPI, DC, RST, DELAY> {
    fn size(&self) -> Size {
        if self.orientation.is_landscape() {
            Size::new(HEIGHT as u32, WIDTH as u32)
        } else {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }
}

impl<SPI, DC, RST, DELAY> DrawTarget for Ili9341<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.interface.pixels([color.into_storage()])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        if clipped == *area {
            self.set_window_for(area)?;
            return self
                .interface
                .pixels(colors.into_iter().map(|c| c.into_storage()));
        }

        // Partially visible, fall back to per pixel writes
        self.draw_iter(
            area.points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }
        self.set_window_for(&clipped)?;
        self.interface
            .pixels_x_times(color.into_storage(), clipped.size.width * clipped.size.height)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.bounding_box();
        self.fill_solid(&area, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// What went over the wire, split on the D/C line
    #[derive(Debug, Clone, PartialEq)]
    enum Wire {
        Cmd(u8),
        Data(Vec<u8>),
    }

    #[derive(Default)]
    struct Bus {
        dc_high: bool,
        log: Vec<Wire>,
    }

    struct Spi(Rc<RefCell<Bus>>);
    struct Dc(Rc<RefCell<Bus>>);
    struct Rst;
    struct NoDelay;

    impl ErrorType for Spi {
        type Error = Infallible;
    }

    impl SpiDevice for Spi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            let mut bus = self.0.borrow_mut();
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    if bus.dc_high {
                        match bus.log.last_mut() {
                            Some(Wire::Data(data)) => data.extend_from_slice(bytes),
                            _ => bus.log.push(Wire::Data(bytes.to_vec())),
                        }
                    } else {
                        for b in bytes.iter() {
                            bus.log.push(Wire::Cmd(*b));
                        }
                    }
                }
            }
            Ok(())
        }
    }

    impl embedded_hal::digital::ErrorType for Dc {
        type Error = Infallible;
    }

    impl OutputPin for Dc {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = false;
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = true;
            Ok(())
        }
    }

    impl embedded_hal::digital::ErrorType for Rst {
        type Error = Infallible;
    }

    impl OutputPin for Rst {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn landscape() -> (Ili9341<Spi, Dc, Rst, NoDelay>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let display = Ili9341::new(
            Spi(bus.clone()),
            Dc(bus.clone()),
            Rst,
            NoDelay,
            Orientation::Landscape,
        )
        .unwrap();
        bus.borrow_mut().log.clear();
        (display, bus)
    }

    #[test]
    fn init_ends_with_display_on_in_landscape() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let display = Ili9341::new(
            Spi(bus.clone()),
            Dc(bus.clone()),
            Rst,
            NoDelay,
            Orientation::Landscape,
        )
        .unwrap();

        let log = &bus.borrow().log;
        assert_eq!(log.first(), Some(&Wire::Cmd(Cmd::SW_RESET)));
        assert_eq!(log.last(), Some(&Wire::Cmd(Cmd::DISPLAY_ON)));
        let madctl = log
            .iter()
            .position(|w| *w == Wire::Cmd(Cmd::MEMORY_ACCESS_CONTROL))
            .unwrap();
        assert_eq!(
            log[madctl + 1],
            Wire::Data(vec![Flag::MADCTL_MV | Flag::MADCTL_BGR])
        );
        assert_eq!(display.size(), Size::new(320, 240));
    }

    #[test]
    fn fill_solid_clips_to_screen_and_streams_one_color() {
        let (mut display, bus) = landscape();

        display
            .fill_solid(
                &Rectangle::new(Point::new(310, 230), Size::new(40, 40)),
                Rgb565::RED,
            )
            .unwrap();

        let log = &bus.borrow().log;
        assert_eq!(log[0], Wire::Cmd(Cmd::COLUMN_ADDRESS_SET));
        assert_eq!(log[1], Wire::Data(vec![0x01, 0x36, 0x01, 0x3F])); // 310..=319
        assert_eq!(log[2], Wire::Cmd(Cmd::PAGE_ADDRESS_SET));
        assert_eq!(log[3], Wire::Data(vec![0x00, 0xE6, 0x00, 0xEF])); // 230..=239
        assert_eq!(log[4], Wire::Cmd(Cmd::MEMORY_WRITE));
        match &log[5] {
            Wire::Data(bytes) => {
                assert_eq!(bytes.len(), 10 * 10 * 2);
                assert!(bytes.chunks(2).all(|c| c == [0xF8, 0x00]));
            }
            other => panic!("expected pixel data, got {:?}", other),
        }
    }

    #[test]
    fn pixels_outside_the_screen_are_dropped() {
        let (mut display, bus) = landscape();

        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::WHITE),
                Pixel(Point::new(320, 0), Rgb565::WHITE),
            ])
            .unwrap();
        assert!(bus.borrow().log.is_empty());

        display
            .draw_iter([Pixel(Point::new(1, 2), Rgb565::WHITE)])
            .unwrap();
        assert_eq!(
            bus.borrow().log.last(),
            Some(&Wire::Data(vec![0xFF, 0xFF]))
        );
    }
}
