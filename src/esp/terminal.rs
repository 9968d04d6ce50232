use anyhow::{Context, Result};
use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::uart::UartDriver;

use crate::terminal::{LineBuffer, Terminal};

/// Serial console on UART0
pub struct UartTerminal {
    uart: UartDriver<'static>,
    lines: LineBuffer,
}

impl UartTerminal {
    pub fn new(uart: UartDriver<'static>) -> Self {
        Self {
            uart,
            lines: LineBuffer::new(),
        }
    }

    /// Move whatever the driver has buffered into the line assembler
    fn drain(&mut self) -> Result<()> {
        let mut chunk = [0u8; 64];
        loop {
            let read = self
                .uart
                .read(&mut chunk, NON_BLOCK)
                .context("UART read failed")?;
            if read == 0 {
                return Ok(());
            }
            self.lines.push(&chunk[..read]);
        }
    }
}

impl Terminal for UartTerminal {
    fn poll_line(&mut self) -> Result<Option<String>> {
        self.drain()?;
        Ok(self.lines.pop_line())
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        let mut bytes = text.as_bytes();
        while !bytes.is_empty() {
            let written = self.uart.write(bytes).context("UART write failed")?;
            bytes = &bytes[written..];
        }
        Ok(())
    }
}
