// ESP32 Power Test — Chip Descriptor

use core::fmt;

// ---------------------------------------------------------------------------
// Feature bits (ESP-IDF `CHIP_FEATURE_*` numbering)
// ---------------------------------------------------------------------------
pub const FEATURE_EMB_FLASH: u32 = 1 << 0;
pub const FEATURE_WIFI_BGN: u32 = 1 << 1;
pub const FEATURE_BLE: u32 = 1 << 4;
pub const FEATURE_BT: u32 = 1 << 5;

const BYTES_PER_MB: u32 = 1024 * 1024;

/// Snapshot of the chip, queried once at boot for the summary log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipInfo {
    pub cores: u8,
    pub features: u32,
    pub revision: u16,
    pub flash_size_bytes: u32,
}

impl ChipInfo {
    pub fn has_wifi(&self) -> bool {
        self.features & FEATURE_WIFI_BGN != 0
    }

    pub fn has_bt(&self) -> bool {
        self.features & FEATURE_BT != 0
    }

    pub fn has_ble(&self) -> bool {
        self.features & FEATURE_BLE != 0
    }

    pub fn has_embedded_flash(&self) -> bool {
        self.features & FEATURE_EMB_FLASH != 0
    }

    pub fn flash_size_mb(&self) -> u32 {
        self.flash_size_bytes / BYTES_PER_MB
    }
}

impl fmt::Display for ChipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This is ESP32 chip with {} CPU cores, {}{}{}, silicon revision {}, {}MB {} flash",
            self.cores,
            if self.has_wifi() { "WiFi" } else { "" },
            if self.has_bt() { "/BT" } else { "" },
            if self.has_ble() { "/BLE" } else { "" },
            self.revision,
            self.flash_size_mb(),
            if self.has_embedded_flash() { "embedded" } else { "external" },
        )
    }
}
