//! The four demo programs.
//!
//! Each one is a single `run` that takes the hardware context, a delay and
//! its configuration section. Runs never release pins themselves; the
//! caller owns the context and releases through
//! [`GpioContext::cleanup`](crate::context::GpioContext::cleanup) or drop.

pub mod diagnostic;
pub mod led;
pub mod motor;
pub mod servo;

/// Which program a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Led,
    Motor,
    Servo,
    Diagnostic,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Self::Led => "led",
            Self::Motor => "motor",
            Self::Servo => "servo",
            Self::Diagnostic => "teszt",
        }
    }
}
