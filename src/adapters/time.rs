//! Blocking delay adapter.
//!
//! Implements `embedded_hal::delay::DelayNs` with `std::thread::sleep`.
//! The programs only ever sleep through this trait, so tests substitute a
//! recording delay and never block.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
