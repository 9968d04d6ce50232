use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Console;
use crate::board::Board;
use crate::clock::Clock;
use crate::config::{
    FIRMWARE_VERSION, HOLD_LONG_MS, HOLD_SHORT_MS, SCAN_ITEM_DELAY_MS, WIFI_ATTEMPT_DELAY_MS,
    WIFI_MAX_ATTEMPTS,
};
use crate::network::{Credentials, Network};
use crate::terminal::Terminal;

impl<B: Board> Console<B> {
    /// Ask for SSID and password, then try to associate.
    /// The credentials stay in memory only.
    pub(super) fn configure_wifi(&mut self) -> Result<()> {
        let ssid = self.prompt("Enter SSID:")?;
        let password = self.prompt("Enter password:")?;
        let credentials = Credentials::new(ssid, password);

        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.println("Connecting...")?;
        log::info!("Connecting to {:?}", credentials);

        let connected = match self.hw.network.begin(&credentials) {
            Ok(()) => self.wait_for_association()?,
            Err(e) => {
                log::warn!("Could not start association: {:?}", e);
                false
            }
        };
        self.session.credentials = Some(credentials);

        self.hw.screen.clear(Rgb565::BLACK)?;
        if connected {
            self.hw.screen.println("Connected to WiFi!")?;
            self.hw.terminal.write_line("WiFi connected.")?;
        } else {
            self.hw.screen.println("Failed to connect.")?;
            self.hw.terminal.write_line("WiFi not connected.")?;
        }
        self.hold(HOLD_SHORT_MS);
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        screen.println(question)?;
        self.hw.terminal.write_line(question)?;
        self.read_line_blocking()
    }

    /// Poll the link a fixed number of times, one dot per attempt
    fn wait_for_association(&mut self) -> Result<bool> {
        let mut attempts = 0;
        while !self.hw.network.is_connected() && attempts < WIFI_MAX_ATTEMPTS {
            self.hw.clock.delay_ms(WIFI_ATTEMPT_DELAY_MS);
            self.hw.terminal.write_str(".")?;
            attempts += 1;
        }
        self.hw.terminal.write_line("")?;

        let connected = self.hw.network.is_connected();
        log::info!(
            "Association {} after {} attempts",
            if connected { "succeeded" } else { "failed" },
            attempts
        );
        Ok(connected)
    }

    /// Firmware version and the current address, if any
    pub(super) fn show_info(&mut self) -> Result<()> {
        let address = if self.hw.network.is_connected() {
            self.hw.network.local_ip()
        } else {
            None
        };

        let mut lines = vec!["System info:".to_string(), FIRMWARE_VERSION.to_string()];
        match address {
            Some(ip) => lines.push(format!("IP: {}", ip)),
            None => lines.push("Not connected to WiFi.".to_string()),
        }

        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        for line in &lines {
            screen.println(line)?;
        }
        for line in &lines {
            self.hw.terminal.write_line(line)?;
        }
        self.hold(HOLD_LONG_MS);
        Ok(())
    }

    /// List nearby networks in discovery order
    pub(super) fn scan_wifi(&mut self) -> Result<()> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        screen.println("Scanning WiFi networks...")?;
        self.hw.terminal.write_line("Scanning WiFi networks...")?;

        let networks = match self.hw.network.scan() {
            Ok(networks) => networks,
            Err(e) => {
                log::error!("Scan failed: {:?}", e);
                self.hw.screen.println("Scan failed.")?;
                self.hw.terminal.write_line("Scan failed.")?;
                self.hold(HOLD_LONG_MS);
                return Ok(());
            }
        };
        log::info!("Found {} networks", networks.len());

        if networks.is_empty() {
            self.hw.screen.println("No networks found.")?;
            self.hw.terminal.write_line("No networks found.")?;
        } else {
            for (i, network) in networks.iter().enumerate() {
                let line = format!("{}: {} ({} dBm)", i + 1, network.ssid, network.rssi);
                self.hw.screen.println(&line)?;
                self.hw.terminal.write_line(&line)?;
                self.hw.clock.delay_ms(SCAN_ITEM_DELAY_MS);
            }
        }
        self.hold(HOLD_LONG_MS);
        Ok(())
    }
}
