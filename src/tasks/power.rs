// ESP32 Power Test — Power-Test Driver
//
// Runs one of three procedures (active, light-sleep, mode-switching) on the
// calling task, logs a summary, then counts down and restarts the device.
// Sleep failures are logged and never stop the sequence.

use core::fmt;

use crate::config::*;
use crate::error::SleepError;
use crate::platform::Platform;

/// What a test run did, logged once after `Finished!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestReport {
    pub mode: TestMode,
    /// Sleep cycles the procedure intended to run.
    pub planned: u32,
    /// Suspends that woke up from the timer.
    pub woken: u32,
    /// Cycles lost to a timer or suspend error.
    pub failed: u32,
}

impl TestReport {
    fn new(mode: TestMode, planned: u32) -> Self {
        Self {
            mode,
            planned,
            woken: 0,
            failed: 0,
        }
    }

    fn record(&mut self, outcome: &Result<(), SleepError>) {
        match outcome {
            Ok(()) => self.woken += 1,
            Err(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} test: {} sleep cycle(s) planned, {} woke, {} failed",
            self.mode, self.planned, self.woken, self.failed
        )
    }
}

/// Run the configured procedure to completion.
pub fn run(platform: &mut impl Platform, config: &TestConfig) -> TestReport {
    let report = match config.mode {
        TestMode::Active => active_test(platform, config.duration_secs),
        TestMode::LightSleep => light_sleep_test(platform, config.duration_secs),
        TestMode::Switch => switch_test(platform, config),
    };
    log::info!("Finished!");
    log::info!("{}", report);
    report
}

/// Fixed countdown, then reset.  Runs whatever the test outcome was.
pub fn restart_after_countdown(platform: &mut impl Platform) -> ! {
    for i in (1..=RESTART_COUNTDOWN_SECS).rev() {
        log::info!("Restarting in {} seconds...", i);
        platform.delay_ms(ONE_SECOND_MS);
    }
    log::info!("Restarting now.");
    log::logger().flush();
    platform.restart()
}

pub fn delay_before_test(platform: &mut impl Platform) {
    for i in (1..=PRE_TEST_COUNTDOWN_SECS).rev() {
        log::info!("TEST will start in {} seconds...", i);
        platform.delay_ms(ONE_SECOND_MS);
    }
}

/// Idle with the CPU fully powered, one second at a time.
pub fn active_test(platform: &mut impl Platform, duration_secs: u32) -> TestReport {
    log::info!("{}", TestMode::Active.banner());
    delay_before_test(platform);

    for _ in 0..duration_secs {
        platform.delay_ms(ONE_SECOND_MS);
    }
    TestReport::new(TestMode::Active, 0)
}

/// One timer-woken light sleep covering the whole duration.
pub fn light_sleep_test(platform: &mut impl Platform, duration_secs: u32) -> TestReport {
    log::info!("{}", TestMode::LightSleep.banner());
    delay_before_test(platform);

    let mut report = TestReport::new(TestMode::LightSleep, 1);
    let micros = duration_secs as u64 * ONE_SECOND_US;
    if let Err(e) = platform.arm_wake_timer(micros) {
        log::error!("Sleep timer config error! {}", e);
        report.failed += 1;
        return report;
    }

    let outcome = platform.enter_suspend();
    log_wakeup(&outcome);
    report.record(&outcome);
    report
}

/// Alternate an active half-period with a timer-woken light sleep of the
/// same length, `switch_cycles()` times.
pub fn switch_test(platform: &mut impl Platform, config: &TestConfig) -> TestReport {
    log::info!("{}", TestMode::Switch.banner());
    delay_before_test(platform);

    let cycles = config.switch_cycles();
    let half_ms = config.half_period_ms();
    let half_us = config.half_period_us();
    let mut report = TestReport::new(TestMode::Switch, cycles);

    for _ in 0..cycles {
        log::info!("Good night .zzZ");
        platform.delay_ms(half_ms);

        let outcome = platform
            .arm_wake_timer(half_us)
            .and_then(|()| platform.enter_suspend());
        match &outcome {
            Err(e @ SleepError::TimerConfig { .. }) => {
                log::error!("Sleep timer config error! {}", e)
            }
            _ => log_wakeup(&outcome),
        }
        report.record(&outcome);
    }
    report
}

fn log_wakeup(outcome: &Result<(), SleepError>) {
    match outcome {
        Ok(()) => log::info!("Good morning :-)"),
        Err(e) => log::warn!("Ooops, something went wrong... {}", e),
    }
}
