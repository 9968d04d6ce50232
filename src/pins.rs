//! Pin definitions for the ILI9341 TFT and the serial console
//!
//! This module contains all GPIO pin assignments used in the hardware configuration.

/// Pin configuration constants for the ESP32-S3 board
pub struct Pins;

#[allow(dead_code)]
impl Pins {
    // SPI Display pins
    /// Chip Select pin for SPI display
    pub const CS: u8 = 10;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 9;
    /// Reset pin for display
    pub const RST: u8 = 14;
    /// SPI Clock pin
    pub const SCK: u8 = 12;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 11;
    /// Backlight enable
    pub const BACKLIGHT: u8 = 21;

    // Console
    /// UART0 transmit
    pub const UART_TX: u8 = 43;
    /// UART0 receive
    pub const UART_RX: u8 = 44;
}
