//! In-memory doubles for every board capability

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::net::Ipv4Addr;

use anyhow::{bail, Result};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::board::{Board, Hardware, Power};
use crate::clock::{Clock, TimeOfDay};
use crate::console::Console;
use crate::network::{AccessPoint, Credentials, Network};
use crate::storage::{Eeprom, Persistence};
use crate::terminal::Terminal;

/// A console over fresh doubles: black 320x240 screen, erased store, no network
pub fn console() -> Console<TestBoard> {
    let store = Eeprom::begin(MemoryPersistence::default()).unwrap();
    Console::new(Hardware::new(
        FrameBuffer::new(320, 240),
        ScriptedTerminal::default(),
        FakeNetwork::default(),
        VirtualClock::default(),
        RecordingPower::default(),
        store,
    ))
}

pub struct TestBoard;

impl Board for TestBoard {
    type DisplayError = Infallible;
    type Display = FrameBuffer;
    type Terminal = ScriptedTerminal;
    type Network = FakeNetwork;
    type Clock = VirtualClock;
    type Power = RecordingPower;
    type Persistence = MemoryPersistence;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }

    /// Number of pixels of `color` inside the rectangle
    pub fn count_in(&self, x: u32, y: u32, width: u32, height: u32, color: Rgb565) -> usize {
        let mut count = 0;
        for py in y..(y + height).min(self.height) {
            for px in x..(x + width).min(self.width) {
                if self.pixels[(py * self.width + px) as usize] == color {
                    count += 1;
                }
            }
        }
        count
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }
        Ok(())
    }
}

/// Serves queued lines and records everything written
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    /// Lines that show up only after a number of empty polls
    delayed: Option<(u32, Vec<String>)>,
    output: String,
}

impl ScriptedTerminal {
    pub fn push_line(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    pub fn release_after_polls(&mut self, polls: u32, lines: &[&str]) {
        self.delayed = Some((polls, lines.iter().map(|l| l.to_string()).collect()));
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Terminal for ScriptedTerminal {
    fn poll_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.input.pop_front() {
            return Ok(Some(line));
        }
        match self.delayed.take() {
            Some((0, lines)) => {
                self.input.extend(lines);
                Ok(self.input.pop_front())
            }
            Some((polls, lines)) => {
                self.delayed = Some((polls - 1, lines));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

/// Station that associates after a number of link checks, or never
#[derive(Debug, Default)]
pub struct FakeNetwork {
    /// Link checks after `begin` until associated, `None` never associates
    checks_until_up: Option<u32>,
    checks: Cell<u32>,
    ip: Option<Ipv4Addr>,
    associated: bool,
    access_points: Vec<AccessPoint>,
    scan_fails: bool,
    begin_fails: bool,
    begun: Vec<Credentials>,
}

impl FakeNetwork {
    pub fn reachable_after(checks: u32, ip: Ipv4Addr) -> Self {
        Self {
            checks_until_up: Some(checks),
            ip: Some(ip),
            ..Self::default()
        }
    }

    /// Already associated, as if configured before
    pub fn connected(ip: Ipv4Addr) -> Self {
        Self {
            checks_until_up: Some(0),
            ip: Some(ip),
            associated: true,
            ..Self::default()
        }
    }

    pub fn set_access_points(&mut self, access_points: Vec<AccessPoint>) {
        self.access_points = access_points;
    }

    pub fn fail_scan(&mut self) {
        self.scan_fails = true;
    }

    /// `begin` rejects the credentials, like a driver refusing an overlong SSID
    pub fn fail_begin(&mut self) {
        self.begin_fails = true;
    }

    pub fn begun(&self) -> &[Credentials] {
        &self.begun
    }
}

impl Network for FakeNetwork {
    fn begin(&mut self, credentials: &Credentials) -> Result<()> {
        self.begun.push(credentials.clone());
        if self.begin_fails {
            bail!("SSID longer than 32 bytes");
        }
        self.associated = true;
        self.checks.set(0);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        if !self.associated {
            return false;
        }
        let Some(needed) = self.checks_until_up else {
            return false;
        };
        let seen = self.checks.get();
        self.checks.set(seen + 1);
        seen >= needed
    }

    fn local_ip(&self) -> Option<Ipv4Addr> {
        if self.associated && self.checks_until_up.is_some() {
            self.ip
        } else {
            None
        }
    }

    fn scan(&mut self) -> Result<Vec<AccessPoint>> {
        if self.scan_fails {
            bail!("radio busy");
        }
        Ok(self.access_points.clone())
    }
}

/// Time only moves when a test advances it or code delays
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: u64,
    time: Option<TimeOfDay>,
    delays: Vec<u32>,
}

impl VirtualClock {
    /// Guards tests against a handler blocking forever on input
    const MAX_DELAYS: usize = 100_000;

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    pub fn set_time(&mut self, time: Option<TimeOfDay>) {
        self.time = time;
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl Clock for VirtualClock {
    fn millis(&self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        assert!(
            self.delays.len() < Self::MAX_DELAYS,
            "runaway delay loop, is a handler waiting for input that never comes?"
        );
        self.delays.push(ms);
        self.now += u64::from(ms);
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        self.time
    }
}

#[derive(Debug, Default)]
pub struct RecordingPower {
    pub restarts: u32,
    pub sleeps: u32,
}

impl Power for RecordingPower {
    fn restart(&mut self) {
        self.restarts += 1;
    }

    fn deep_sleep(&mut self) {
        self.sleeps += 1;
    }
}

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub image: Option<Vec<u8>>,
    pub saves: u32,
}

impl MemoryPersistence {
    pub fn with_image(image: Vec<u8>) -> Self {
        Self {
            image: Some(image),
            saves: 0,
        }
    }
}

impl Persistence for MemoryPersistence {
    fn load(&mut self, image: &mut [u8]) -> Result<bool> {
        match &self.image {
            Some(stored) if stored.len() == image.len() => {
                image.copy_from_slice(stored);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn save(&mut self, image: &[u8]) -> Result<()> {
        self.image = Some(image.to_vec());
        self.saves += 1;
        Ok(())
    }
}
