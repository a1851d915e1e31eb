// ESP32 Power Test — Library
//
// Test sequencing lives here so it can be exercised on the host against a
// fake platform; `main.rs` wires it to the real chip.

pub mod chip;
pub mod config;
pub mod error;
pub mod platform;
pub mod tasks;
