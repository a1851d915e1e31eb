// Scripted platform and log capture for driver tests.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, Log, Metadata, Record};

use super::Platform;
use crate::chip::ChipInfo;
use crate::error::SleepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Delay(u32),
    ArmWakeTimer(u64),
    Suspend,
    Restart,
}

/// Panic payload used to unwind out of `restart()`.
pub const RESTART_PANIC: &str = "fake platform restarted";

#[derive(Debug, Default)]
pub struct FakePlatform {
    pub calls: Vec<Call>,
    pub chip: ChipInfo,
    /// Every `arm_wake_timer` call fails.
    pub fail_arm: bool,
    /// Zero-based suspend attempts that fail.
    pub fail_suspends: Vec<usize>,
    pub suspends: usize,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }
}

impl Platform for FakePlatform {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(Call::Delay(ms));
    }

    fn arm_wake_timer(&mut self, micros: u64) -> Result<(), SleepError> {
        self.calls.push(Call::ArmWakeTimer(micros));
        if self.fail_arm {
            Err(SleepError::TimerConfig { micros, code: 0x102 })
        } else {
            Ok(())
        }
    }

    fn enter_suspend(&mut self) -> Result<(), SleepError> {
        self.calls.push(Call::Suspend);
        let attempt = self.suspends;
        self.suspends += 1;
        if self.fail_suspends.contains(&attempt) {
            Err(SleepError::SuspendTransition {
                detail: "woke by Gpio instead of timer".into(),
            })
        } else {
            Ok(())
        }
    }

    fn chip_info(&self) -> ChipInfo {
        self.chip
    }

    fn restart(&mut self) -> ! {
        self.calls.push(Call::Restart);
        std::panic::panic_any(RESTART_PANIC)
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

thread_local! {
    static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records every line on the logging thread; tests run on their own threads,
/// so each test sees only its own output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.with(|lines| {
            lines
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's lines.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    LINES.with(|lines| lines.borrow_mut().clear());
}

/// Lines logged on this thread since `capture_logs`.
pub fn take_logs() -> Vec<(Level, String)> {
    LINES.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}
