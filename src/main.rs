// ESP32 Power Test — Firmware Entry Point
//
// Boot sequence:
//   1. Log the reset reason and a one-line chip summary.
//   2. Run the test selected at build time (active / light-sleep / switch).
//   3. Count down five seconds and restart the device.
//
// Current draw is measured externally while the test runs.

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_hal::reset::ResetReason;
    use power_test::config::TestConfig;
    use power_test::platform::{esp::EspPlatform, Platform};
    use power_test::tasks::power;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("ESP32 power test firmware starting…");
    log::info!("Reset reason: {:?}", ResetReason::get());

    let config = TestConfig::from_build()?;
    log::info!(
        "Selected {} test: {} s, switch frequency {} Hz",
        config.mode,
        config.duration_secs,
        config.switch_freq_hz
    );

    let mut platform = EspPlatform::new();
    log::info!("{}", platform.chip_info());

    power::run(&mut platform, &config);
    power::restart_after_countdown(&mut platform)
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("esp32-power-test is firmware; build it for an ESP-IDF target");
}
