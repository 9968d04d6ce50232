//! Station mode Wi-Fi as seen by the console

use std::fmt;
use std::net::Ipv4Addr;

use anyhow::Result;

/// Network name and secret typed in on the console. Kept in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
}

impl Credentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

// Keep the secret out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// One scan result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPoint {
    pub ssid: String,
    /// Signal strength in dBm
    pub rssi: i8,
}

/// Radio operation run while starting an association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioStep {
    Disconnect,
    /// Apply the client configuration built from the credentials
    Configure,
    Start,
    Connect,
}

/// Order of radio operations for a new association.
///
/// The client configuration is applied exactly once and before the radio is
/// started, so starting never replaces it.
pub fn association_steps(started: bool, connected: bool) -> Vec<RadioStep> {
    let mut steps = Vec::with_capacity(4);
    if connected {
        steps.push(RadioStep::Disconnect);
    }
    steps.push(RadioStep::Configure);
    if !started {
        steps.push(RadioStep::Start);
    }
    steps.push(RadioStep::Connect);
    steps
}

pub trait Network {
    /// Start associating, returns without waiting for the link
    fn begin(&mut self, credentials: &Credentials) -> Result<()>;

    fn is_connected(&self) -> bool;

    /// Address assigned by DHCP, `None` when not associated
    fn local_ip(&self) -> Option<Ipv4Addr>;

    /// Blocking scan, results in discovery order
    fn scan(&mut self) -> Result<Vec<AccessPoint>>;
}
