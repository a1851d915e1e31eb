// ESP32 Power Test — Test Configuration
//
// Defaults are compile-time constants; the test to run is picked with the
// `active-test` / `light-sleep-test` Cargo features.  Everything is folded
// into a `TestConfig` value that `main` hands to the driver.

use core::fmt;

// ---------------------------------------------------------------------------
// Test Parameters
// ---------------------------------------------------------------------------
pub const TEST_DURATION_SECS: u32 = 60;
pub const SWITCH_FREQ_HZ: f64 = 0.5;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------
pub const PRE_TEST_COUNTDOWN_SECS: u32 = 5;
pub const RESTART_COUNTDOWN_SECS: u32 = 5;
pub const ONE_SECOND_MS: u32 = 1000;
pub const ONE_SECOND_US: u64 = 1_000_000;

// ---------------------------------------------------------------------------
// Test Selection
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMode {
    /// CPU stays powered and idles in one-second delays.
    Active,
    /// A single timer-woken light sleep for the whole duration.
    LightSleep,
    /// Alternate active and light-sleep half-periods.
    Switch,
}

impl TestMode {
    /// Mode selected by the enabled Cargo features.
    pub fn from_features() -> Self {
        if cfg!(feature = "active-test") {
            Self::Active
        } else if cfg!(feature = "light-sleep-test") {
            Self::LightSleep
        } else {
            Self::Switch
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            Self::Active => "[ESP32] Active Mode Test",
            Self::LightSleep => "[ESP32] Light-sleep Mode Test",
            Self::Switch => "[ESP32] Mode-switching Test",
        }
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::LightSleep => "light-sleep",
            Self::Switch => "switch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestConfig {
    pub mode: TestMode,
    pub duration_secs: u32,
    pub switch_freq_hz: f64,
}

impl TestConfig {
    pub fn new(mode: TestMode, duration_secs: u32, switch_freq_hz: f64) -> anyhow::Result<Self> {
        anyhow::ensure!(
            switch_freq_hz.is_finite() && switch_freq_hz > 0.0,
            "switch frequency must be a positive number of Hz (got {})",
            switch_freq_hz
        );
        Ok(Self {
            mode,
            duration_secs,
            switch_freq_hz,
        })
    }

    /// Configuration baked into this firmware image.
    pub fn from_build() -> anyhow::Result<Self> {
        Self::new(TestMode::from_features(), TEST_DURATION_SECS, SWITCH_FREQ_HZ)
    }

    /// Number of active/sleep cycles in the switch test.  Each cycle spends
    /// two half-periods, so this is `floor(duration / (2 / freq))`.
    pub fn switch_cycles(&self) -> u32 {
        let full_period_secs = 2.0 / self.switch_freq_hz;
        floor_decimal(self.duration_secs as f64 / full_period_secs) as u32
    }

    pub fn half_period_ms(&self) -> u32 {
        floor_decimal(ONE_SECOND_MS as f64 / self.switch_freq_hz) as u32
    }

    pub fn half_period_us(&self) -> u64 {
        floor_decimal(ONE_SECOND_US as f64 / self.switch_freq_hz) as u64
    }
}

/// Floor that absorbs the binary rounding of decimal frequencies: 0.7 Hz is
/// stored just below 0.7, which would otherwise turn 7.0 into 6.999...
fn floor_decimal(x: f64) -> f64 {
    (x * (1.0 + 1e-12)).floor()
}
