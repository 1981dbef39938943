//! Shared mutable context threaded through every FSM handler.
//!
//! Handlers read the timing parameters and write the bridge command plus
//! how long the caller should hold it before the next tick.

use crate::config::MotorConfig;
use crate::drivers::h_bridge::BridgeState;

#[derive(Debug, Clone)]
pub struct SequenceContext {
    /// Forward interval (ms).
    pub forward_ms: u32,
    /// Reverse interval (ms).
    pub reverse_ms: u32,

    /// Direction command for the bridge, applied by the caller after each tick.
    pub command: BridgeState,
    /// How long to hold `command` before the next tick (ms).
    pub dwell_ms: u32,

    /// Full forward+reverse cycles to run.
    pub cycles_wanted: u32,
    pub cycles_completed: u32,

    /// Ticks since the current state was entered (set by the engine).
    pub ticks_in_state: u64,
    /// Total ticks since start (set by the engine).
    pub total_ticks: u64,
}

impl SequenceContext {
    pub fn new(config: &MotorConfig) -> Self {
        Self {
            forward_ms: config.forward_ms,
            reverse_ms: config.reverse_ms,
            command: BridgeState::Coasting,
            dwell_ms: 0,
            cycles_wanted: 1,
            cycles_completed: 0,
            ticks_in_state: 0,
            total_ticks: 0,
        }
    }

    pub fn cycles_remaining(&self) -> u32 {
        self.cycles_wanted.saturating_sub(self.cycles_completed)
    }
}
