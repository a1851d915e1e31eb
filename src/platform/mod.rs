// ESP32 Power Test — Platform Capabilities
//
// Everything the driver needs from the chip, behind one trait so the test
// sequence can run against real hardware or a scripted fake.

#[cfg(target_os = "espidf")]
pub mod esp;
#[cfg(test)]
pub mod fake;

use crate::chip::ChipInfo;
use crate::error::SleepError;

pub trait Platform {
    /// Cooperative delay of at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Configure the timer wake source for the next light sleep.
    fn arm_wake_timer(&mut self, micros: u64) -> Result<(), SleepError>;

    /// Enter light sleep and block until the wake source fires.
    fn enter_suspend(&mut self) -> Result<(), SleepError>;

    fn chip_info(&self) -> ChipInfo;

    /// Reset the device.  Does not return.
    fn restart(&mut self) -> !;
}
