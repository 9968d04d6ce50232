use anyhow::{Context, Result};
use esp_idf_svc::nvs::{EspNvs, EspNvsPartition, NvsDefault};

use crate::config::{STORE_KEY, STORE_NAMESPACE};
use crate::storage::Persistence;

/// EEPROM image kept as one blob in the default NVS partition
pub struct NvsPersistence {
    nvs: EspNvs<NvsDefault>,
}

impl NvsPersistence {
    pub fn open(partition: EspNvsPartition<NvsDefault>) -> Result<Self> {
        let nvs = EspNvs::new(partition, STORE_NAMESPACE, true)
            .with_context(|| format!("Failed to open NVS namespace {}", STORE_NAMESPACE))?;
        Ok(Self { nvs })
    }
}

impl Persistence for NvsPersistence {
    fn load(&mut self, image: &mut [u8]) -> Result<bool> {
        let expected = image.len();
        match self.nvs.get_raw(STORE_KEY, image)? {
            Some(stored) if stored.len() == expected => Ok(true),
            Some(stored) => {
                log::warn!(
                    "Stored EEPROM image has {} bytes, expected {}, ignoring it",
                    stored.len(),
                    expected
                );
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn save(&mut self, image: &[u8]) -> Result<()> {
        self.nvs.set_raw(STORE_KEY, image)?;
        Ok(())
    }
}
