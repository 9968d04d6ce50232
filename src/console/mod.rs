//! The command console: one loop, one handler at a time
//!
//! Every pass of the loop refreshes the clock strip when a second has passed
//! and dispatches at most one complete input line. Handlers run to completion
//! (they may block on input or on the network) before the loop continues.
//! The notepad is the exception: it is a mode of the loop, so the loop keeps
//! its shape while a note is being typed.

mod clock;
mod desktop;
mod menu;
mod notepad;
mod system;
mod wifi;

pub use desktop::{icon_origin, Icon, ICON_MARGIN, ICON_SIZE};

use anyhow::Result;

use crate::board::{Board, Hardware};
use crate::clock::Clock;
use crate::command::Command;
use crate::config::INPUT_POLL_MS;
use crate::session::{Mode, Session};
use crate::terminal::Terminal;

pub struct Console<B: Board> {
    hw: Hardware<B>,
    session: Session,
}

impl<B: Board> Console<B> {
    pub fn new(hw: Hardware<B>) -> Self {
        Self {
            hw,
            session: Session::new(),
        }
    }

    /// Announce time sync, show the logo if there is one, then the menu
    pub fn boot(&mut self, logo: &[u8]) -> Result<()> {
        self.hw
            .terminal
            .write_line("Synchronizing time with NTP...")?;
        if !logo.is_empty() {
            self.show_logo(logo)?;
        }
        self.show_menu()
    }

    /// Loop until a reset or shutdown halts the console
    pub fn run(&mut self) {
        log::info!("Console ready");
        while !self.session.is_halted() {
            if let Err(e) = self.step() {
                log::error!("Command failed: {:?}", e);
            }
            // Yield, the idle task has to feed the watchdog
            self.hw.clock.delay_ms(INPUT_POLL_MS);
        }
        log::info!("Console halted");
    }

    /// One pass of the loop: clock strip, then at most one input line
    pub fn step(&mut self) -> Result<()> {
        if let Err(e) = self.refresh_clock() {
            log::warn!("Clock refresh failed: {:?}", e);
        }

        match self.hw.terminal.poll_line()? {
            Some(line) => self.handle_line(&line),
            None => Ok(()),
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        match self.session.mode {
            Mode::Idle => self.dispatch(line),
            Mode::Notepad(_) => self.notepad_line(line),
            Mode::Halted => Ok(()),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let Some(command) = Command::parse(line) else {
            log::debug!("Unknown command {:?}", line);
            return self.hw.terminal.write_line("Unknown command!");
        };
        log::info!("Command {:?}", command);

        let announcement = match (line.trim(), command) {
            ("1", _) => Some("WiFi selected"),
            ("2", _) => Some("Info selected"),
            ("3", _) => Some("Scan selected"),
            ("4", _) => Some("Shutdown selected"),
            // Letter path only
            (_, Command::Shutdown) => Some("Shutting down..."),
            _ => None,
        };
        if let Some(announcement) = announcement {
            self.hw.terminal.write_line(announcement)?;
        }

        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Menu => self.show_menu(),
            Command::Desktop => self.show_desktop(),
            Command::Wifi => self.configure_wifi(),
            Command::Info => self.show_info(),
            Command::Scan => self.scan_wifi(),
            Command::Reset => self.restart(),
            Command::Shutdown => self.shutdown(),
            Command::Notepad => self.start_notepad(),
            Command::Erase => self.erase_store(),
        }
    }

    /// Wait for a full line, polling the terminal. Starves the clock on purpose.
    fn read_line_blocking(&mut self) -> Result<String> {
        loop {
            if let Some(line) = self.hw.terminal.poll_line()? {
                return Ok(line.trim().to_string());
            }
            self.hw.clock.delay_ms(INPUT_POLL_MS);
        }
    }

    /// Keep a result screen up
    fn hold(&mut self, ms: u32) {
        self.hw.clock.delay_ms(ms);
    }

    pub fn hardware(&self) -> &Hardware<B> {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut Hardware<B> {
        &mut self.hw
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
