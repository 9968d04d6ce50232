use esp_idf_svc::hal::reset;
use esp_idf_svc::sys;

use crate::board::Power;

pub struct EspPower;

impl Power for EspPower {
    fn restart(&mut self) {
        reset::restart();
    }

    fn deep_sleep(&mut self) {
        // No wake source is armed, only the reset button brings the board back
        unsafe {
            sys::esp_deep_sleep_start();
        }
    }
}
