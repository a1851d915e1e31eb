// ESP32 Power Test — Sleep Errors
//
// Both kinds are non-fatal: the driver logs them and moves on to its next
// scheduled action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SleepError {
    /// The wake timer could not be armed; no suspend is attempted.
    #[error("sleep timer config error ({micros} us, esp_err {code})")]
    TimerConfig { micros: u64, code: i32 },
    /// Light sleep was rejected or woke from something other than the timer.
    #[error("suspend transition failed: {detail}")]
    SuspendTransition { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = SleepError::TimerConfig { micros: 2_000_000, code: 258 };
        assert_eq!(e.to_string(), "sleep timer config error (2000000 us, esp_err 258)");

        let e = SleepError::SuspendTransition { detail: "woke by Gpio".into() };
        assert_eq!(e.to_string(), "suspend transition failed: woke by Gpio");
    }
}
