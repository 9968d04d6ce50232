use anyhow::Result;

use super::Console;
use crate::board::Board;
use crate::clock::Clock;
use crate::config::{TIME_REFRESH_MS, TIME_STRIP_HEIGHT};

impl<B: Board> Console<B> {
    /// Redraw the time strip at most once per refresh period.
    /// Leaves the screen alone while the time is not synchronized.
    pub(super) fn refresh_clock(&mut self) -> Result<()> {
        let now = self.hw.clock.millis();
        if now.saturating_sub(self.session.last_time_update) <= TIME_REFRESH_MS {
            return Ok(());
        }
        self.session.last_time_update = now;

        let Some(time) = self.hw.clock.local_time() else {
            log::debug!("Failed to obtain time");
            return Ok(());
        };
        self.hw
            .screen
            .draw_status(&format!("Time: {}", time), TIME_STRIP_HEIGHT)
    }
}
