use std::net::Ipv4Addr;

use anyhow::{anyhow, Context, Result};
use embedded_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};

use crate::network::{association_steps, AccessPoint, Credentials, Network, RadioStep};

/// Station mode radio. Association is started here and polled by the console.
pub struct EspNetwork {
    wifi: BlockingWifi<EspWifi<'static>>,
}

impl EspNetwork {
    pub fn new(wifi: BlockingWifi<EspWifi<'static>>) -> Self {
        Self { wifi }
    }

    /// Start with a blank client configuration, only used for scanning
    fn ensure_started(&mut self) -> Result<()> {
        if !self.wifi.is_started()? {
            self.wifi
                .set_configuration(&Configuration::Client(ClientConfiguration::default()))?;
            self.wifi.start().context("Failed to start WiFi")?;
        }
        Ok(())
    }
}

impl Network for EspNetwork {
    fn begin(&mut self, credentials: &Credentials) -> Result<()> {
        let auth_method = if credentials.password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        let wifi_config = Configuration::Client(ClientConfiguration {
            ssid: credentials
                .ssid
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("SSID longer than 32 bytes"))?,
            password: credentials
                .password
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("Password longer than 64 bytes"))?,
            auth_method,
            ..Default::default()
        });

        let started = self.wifi.is_started()?;
        let connected = self.wifi.is_connected()?;
        for step in association_steps(started, connected) {
            match step {
                RadioStep::Disconnect => self.wifi.disconnect()?,
                RadioStep::Configure => self.wifi.set_configuration(&wifi_config)?,
                RadioStep::Start => self.wifi.start().context("Failed to start WiFi")?,
                // Non-blocking, the console polls for the link
                RadioStep::Connect => self.wifi.wifi_mut().connect().context("Failed to connect")?,
            }
        }
        log::info!("Association with {} started", credentials.ssid);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        let associated = self.wifi.is_connected().unwrap_or(false);
        associated && self.wifi.wifi().sta_netif().is_up().unwrap_or(false)
    }

    fn local_ip(&self) -> Option<Ipv4Addr> {
        match self.wifi.wifi().sta_netif().get_ip_info() {
            Ok(info) if !info.ip.is_unspecified() => Some(Ipv4Addr::from(info.ip.octets())),
            Ok(_) => None,
            Err(e) => {
                log::warn!("No IP info: {:?}", e);
                None
            }
        }
    }

    fn scan(&mut self) -> Result<Vec<AccessPoint>> {
        self.ensure_started()?;
        let ap_infos = self.wifi.scan().context("WiFi scan failed")?;
        Ok(ap_infos
            .into_iter()
            .map(|ap| AccessPoint {
                ssid: ap.ssid.to_string(),
                rssi: ap.signal_strength,
            })
            .collect())
    }
}
