use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::sntp::{EspSntp, SntpConf};

use crate::clock::{Clock, TimeOfDay};
use crate::config::NTP_SERVER;

/// Monotonic tick from boot and wall clock kept in sync by SNTP
pub struct EspClock {
    boot: Instant,
    // Synchronization stops when this is dropped
    _sntp: EspSntp<'static>,
}

impl EspClock {
    /// Start SNTP in the background. The time reads as unavailable until the first sync.
    pub fn start() -> Result<Self> {
        let mut conf = SntpConf::default();
        conf.servers[0] = NTP_SERVER;
        let sntp = EspSntp::new(&conf)?;
        log::info!("SNTP started with {}", NTP_SERVER);
        Ok(Self {
            boot: Instant::now(),
            _sntp: sntp,
        })
    }
}

impl Clock for EspClock {
    fn millis(&self) -> u64 {
        self.boot.elapsed().as_millis() as u64
    }

    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        let epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        TimeOfDay::from_epoch(epoch.as_secs() as i64)
    }
}
