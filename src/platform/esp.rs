// ESP32 Power Test — ESP-IDF Platform
//
// Raw `esp_sleep_*` / `esp_chip_info` calls; FreeRTOS delay from esp-idf-hal.

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::reset::WakeupReason;
use esp_idf_sys::EspError;

use super::Platform;
use crate::chip::ChipInfo;
use crate::error::SleepError;

/// The chip this firmware is running on.
pub struct EspPlatform {
    _private: (),
}

impl EspPlatform {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for EspPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for EspPlatform {
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }

    fn arm_wake_timer(&mut self, micros: u64) -> Result<(), SleepError> {
        let ret = unsafe { esp_idf_sys::esp_sleep_enable_timer_wakeup(micros) };
        EspError::convert(ret).map_err(|e| SleepError::TimerConfig {
            micros,
            code: e.code(),
        })
    }

    fn enter_suspend(&mut self) -> Result<(), SleepError> {
        // Returns ESP_OK once the core has woken up again.
        let ret = unsafe { esp_idf_sys::esp_light_sleep_start() };
        EspError::convert(ret).map_err(|e| SleepError::SuspendTransition {
            detail: format!("esp_light_sleep_start failed: {}", e),
        })?;

        match WakeupReason::get() {
            WakeupReason::Timer => Ok(()),
            other => Err(SleepError::SuspendTransition {
                detail: format!("woke by {:?} instead of timer", other),
            }),
        }
    }

    fn chip_info(&self) -> ChipInfo {
        unsafe {
            let mut info: esp_idf_sys::esp_chip_info_t = core::mem::zeroed();
            esp_idf_sys::esp_chip_info(&mut info);

            let mut flash_size: u32 = 0;
            let ret = esp_idf_sys::esp_flash_get_size(core::ptr::null_mut(), &mut flash_size);
            if let Err(e) = EspError::convert(ret) {
                log::warn!("Flash size query failed: {}", e);
                flash_size = 0;
            }

            ChipInfo {
                cores: info.cores as u8,
                features: info.features as u32,
                revision: info.revision as u16,
                flash_size_bytes: flash_size,
            }
        }
    }

    fn restart(&mut self) -> ! {
        unsafe {
            esp_idf_sys::esp_restart();
        }
    }
}
