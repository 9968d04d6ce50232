//! Display interface using SPI
use crate::ili9341::cmd::Cmd;
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

const RESET_PULSE_MS: u32 = 5;
const RESET_SETTLE_MS: u32 = 150;

/// Pixels per SPI transfer when streaming colors
const CHUNK_PIXELS: usize = 64;

/// The connection interface of the ILI9341: SPI plus data/command and reset lines
pub struct DisplayInterface<SPI, DC, RST> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
}

impl<SPI, DC, RST> DisplayInterface<SPI, DC, RST> {
    /// Create the interface, nothing is sent yet
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        DisplayInterface { spi, dc, rst }
    }
}

impl<SPI, DC, RST> DisplayInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(&[command]) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Stream RGB565 values as big endian words, after MEMORY_WRITE
    pub(crate) fn pixels<I>(&mut self, colors: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = u16>,
    {
        self.cmd(Cmd::MEMORY_WRITE)?;
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        let mut buffer = [0u8; CHUNK_PIXELS * 2];
        let mut filled = 0;
        for color in colors {
            buffer[filled..filled + 2].copy_from_slice(&color.to_be_bytes());
            filled += 2;
            if filled == buffer.len() {
                self.spi
                    .write(&buffer)
                    .map_err(|_| DisplayError::BusWriteError)?;
                filled = 0;
            }
        }

        if filled > 0 {
            self.spi
                .write(&buffer[..filled])
                .map_err(|_| DisplayError::BusWriteError)?;
        }
        Ok(())
    }

    /// Send the same color `repetitions` times, after MEMORY_WRITE
    /// Used for filling rectangles and the whole frame
    pub(crate) fn pixels_x_times(&mut self, color: u16, repetitions: u32) -> Result<(), DisplayError> {
        self.cmd(Cmd::MEMORY_WRITE)?;
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        let mut buffer = [0u8; CHUNK_PIXELS * 2];
        for pair in buffer.chunks_exact_mut(2) {
            pair.copy_from_slice(&color.to_be_bytes());
        }

        let full_chunks = repetitions as usize / CHUNK_PIXELS;
        let remainder = repetitions as usize % CHUNK_PIXELS;

        for _ in 0..full_chunks {
            self.spi
                .write(&buffer)
                .map_err(|_| DisplayError::BusWriteError)?;
        }

        if remainder > 0 {
            self.spi
                .write(&buffer[..remainder * 2])
                .map_err(|_| DisplayError::BusWriteError)?;
        }
        Ok(())
    }

    /// Hardware reset pulse
    pub(crate) fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_PULSE_MS * 4);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}
