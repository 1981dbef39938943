//! Unified error types for the GPIO demo programs.
//!
//! A single `Error` enum that every program funnels into, with the pin-level
//! failures kept in their own [`GpioError`] so the hardware context and the
//! backends can report them without knowing about configuration or pin names.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pin operation failed.
    Gpio(GpioError),
    /// Configuration is invalid.
    Config(&'static str),
    /// A pin was requested by a name that is not in the pin table.
    UnknownPin(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::UnknownPin(name) => write!(f, "unknown pin constant `{name}`"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpio(e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpioError {
    /// Pin number is outside the BCM range of the header.
    InvalidPin(u8),
    /// Pin was written before being set up as an output.
    NotConfigured(u8),
    /// Duty-cycle change requested on a pin with no PWM running.
    PwmNotRunning(u8),
    /// PWM frequency must be strictly positive.
    InvalidFrequency,
    /// Duty cycle outside 0–100 %.
    InvalidDuty,
    /// Claim table is full.
    TooManyPins,
    /// The hardware backend rejected the operation.
    Backend { pin: u8, reason: String },
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "GPIO{pin} is not a valid BCM pin"),
            Self::NotConfigured(pin) => write!(f, "GPIO{pin} has not been set up as an output"),
            Self::PwmNotRunning(pin) => write!(f, "GPIO{pin} has no PWM running"),
            Self::InvalidFrequency => write!(f, "PWM frequency must be above 0 Hz"),
            Self::InvalidDuty => write!(f, "duty cycle must be within 0-100 %"),
            Self::TooManyPins => write!(f, "pin claim table full"),
            Self::Backend { pin, reason } => write!(f, "GPIO{pin}: {reason}"),
        }
    }
}

impl std::error::Error for GpioError {}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
