//! ESP32-S3 wiring: peripherals taken once, handed to the console, never returned

mod clock;
mod power;
mod storage;
mod terminal;
mod wifi;

pub use clock::EspClock;
pub use power::EspPower;
pub use storage::NvsPersistence;
pub use terminal::UartTerminal;
pub use wifi::EspNetwork;

use anyhow::{anyhow, Context, Result};
use display_interface::DisplayError;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::gpio::{self, AnyOutputPin, Output, OutputPin, PinDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi::{self, SpiDeviceDriver, SpiDriver};
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};

use crate::board::{Board, Hardware};
use crate::config::BAUD_RATE;
use crate::console::Console;
use crate::ili9341::{Ili9341, Orientation};
use crate::pins::Pins;
use crate::storage::Eeprom;

pub type Tft = Ili9341<
    SpiDeviceDriver<'static, SpiDriver<'static>>,
    PinDriver<'static, AnyOutputPin, Output>,
    PinDriver<'static, AnyOutputPin, Output>,
    Delay,
>;

pub struct EspBoard;

impl Board for EspBoard {
    type DisplayError = DisplayError;
    type Display = Tft;
    type Terminal = UartTerminal;
    type Network = EspNetwork;
    type Clock = EspClock;
    type Power = EspPower;
    type Persistence = NvsPersistence;
}

/// Bring up every peripheral, show the boot screens and run the console.
/// Returns only if the console halts without the board going down.
pub fn run(logo: &[u8]) -> Result<()> {
    let peripherals = Peripherals::take().context("Could not take peripherals")?;
    let pins = peripherals.pins;

    log::info!(
        "Pins: SCK {} MOSI {} CS {} DC {} RST {} BL {}, UART TX {} RX {}",
        Pins::SCK,
        Pins::MOSI,
        Pins::CS,
        Pins::DC,
        Pins::RST,
        Pins::BACKLIGHT,
        Pins::UART_TX,
        Pins::UART_RX
    );

    let uart_config = uart::config::Config::default().baudrate(Hertz(BAUD_RATE));
    let uart = UartDriver::new(
        peripherals.uart0,
        pins.gpio43, // Pins::UART_TX
        pins.gpio44, // Pins::UART_RX
        Option::<gpio::AnyIOPin>::None,
        Option::<gpio::AnyIOPin>::None,
        &uart_config,
    )
    .context("Could not create UART driver")?;
    let terminal = UartTerminal::new(uart);

    log::info!("Configuring SPI for the TFT");
    let spi = SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio12,                    // SCK - Pins::SCK
        pins.gpio11,                    // MOSI - Pins::MOSI
        Option::<gpio::AnyIOPin>::None, // No MISO, the panel is write only
        Some(pins.gpio10),              // CS - Pins::CS
        &spi::SpiDriverConfig::new(),
        &spi::SpiConfig::new().baudrate(40.MHz().into()),
    )
    .context("Could not create SPI device driver")?;

    let mut backlight = PinDriver::output(pins.gpio21)?; // Pins::BACKLIGHT
    backlight.set_high()?;

    let display = Ili9341::new(
        spi,
        PinDriver::output(pins.gpio9.downgrade_output())?, // Pins::DC
        PinDriver::output(pins.gpio14.downgrade_output())?, // Pins::RST
        Delay::default(),
        Orientation::Landscape,
    )
    .map_err(|e| anyhow!("Display init failed: {:?}", e))?;

    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let wifi = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sys_loop.clone(), Some(nvs.clone()))?,
        sys_loop,
    )?;
    let network = EspNetwork::new(wifi);

    let clock = EspClock::start()?;
    let store = Eeprom::begin(NvsPersistence::open(nvs)?)?;

    let hardware: Hardware<EspBoard> =
        Hardware::new(display, terminal, network, clock, EspPower, store);
    let mut console = Console::new(hardware);
    console.boot(logo)?;
    console.run();

    // Keep the backlight driver alive as long as the console runs
    drop(backlight);
    Ok(())
}
