//! EEPROM emulation on top of a persisted byte image
//!
//! Reads and writes hit a RAM mirror; nothing reaches flash until [`Eeprom::commit`].

use anyhow::{bail, Context, Result};

use crate::config::{ERASE_VALUE, STORE_SIZE};

/// Where the store image lives between boots
pub trait Persistence {
    /// Fill `image` from the backing store. Returns `false` if nothing was stored yet.
    fn load(&mut self, image: &mut [u8]) -> Result<bool>;

    fn save(&mut self, image: &[u8]) -> Result<()>;
}

/// Fixed size byte store addressed by offset
pub struct Eeprom<P> {
    backend: P,
    image: [u8; STORE_SIZE],
    dirty: bool,
}

impl<P: Persistence> Eeprom<P> {
    /// Load the image, a store that was never written reads as erased
    pub fn begin(mut backend: P) -> Result<Self> {
        let mut image = [ERASE_VALUE; STORE_SIZE];
        let found = backend
            .load(&mut image)
            .context("Failed to load EEPROM image")?;
        if !found {
            log::info!("No EEPROM image stored yet, starting erased");
            image = [ERASE_VALUE; STORE_SIZE];
        }
        Ok(Self {
            backend,
            image,
            dirty: false,
        })
    }

    pub fn len(&self) -> usize {
        self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    pub fn read(&self, offset: usize) -> Result<u8> {
        match self.image.get(offset) {
            Some(value) => Ok(*value),
            None => bail!("EEPROM offset {} out of range (0..{})", offset, STORE_SIZE),
        }
    }

    pub fn write(&mut self, offset: usize, value: u8) -> Result<()> {
        let Some(slot) = self.image.get_mut(offset) else {
            bail!("EEPROM offset {} out of range (0..{})", offset, STORE_SIZE);
        };
        if *slot != value {
            *slot = value;
            self.dirty = true;
        }
        Ok(())
    }

    /// Persist the image if anything changed since the last commit
    pub fn commit(&mut self) -> Result<()> {
        if !self.dirty {
            log::debug!("EEPROM commit skipped, nothing changed");
            return Ok(());
        }
        self.backend
            .save(&self.image)
            .context("Failed to commit EEPROM image")?;
        self.dirty = false;
        log::info!("EEPROM committed ({} bytes)", self.image.len());
        Ok(())
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }
}
