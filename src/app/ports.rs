//! Port traits: the boundary between the programs and the GPIO hardware.
//!
//! ```text
//!   Backend (rppal / sim / mock) ──▶ GpioPort ──▶ GpioContext ──▶ programs
//! ```
//!
//! Backends implement [`GpioPort`]. The [`GpioContext`](crate::context::GpioContext)
//! owns one and does all bookkeeping (which pins are claimed, which run PWM),
//! so a backend only has to perform the raw operation on the pin it is
//! handed. Delays go through `embedded_hal::delay::DelayNs`, which the
//! adapters and the test mocks implement.

use embedded_hal::digital::PinState;

use crate::error::GpioError;

/// Raw pin operations a hardware backend must provide.
///
/// Duty cycles are percentages (0.0–100.0) and frequencies are in Hz; the
/// context has already validated both before calling in.
pub trait GpioPort {
    /// Claim `pin` as a digital output and drive `initial`.
    fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError>;

    /// Drive a level on a claimed output.
    fn write(&mut self, pin: u8, level: PinState) -> Result<(), GpioError>;

    /// Start software PWM on a claimed output.
    fn start_pwm(&mut self, pin: u8, frequency_hz: f64, duty_percent: f64)
    -> Result<(), GpioError>;

    /// Change the duty cycle of a running PWM channel.
    fn set_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError>;

    /// Stop PWM, leaving the pin claimed as an output.
    fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError>;

    /// Return the pin to its unclaimed, non-driven state.
    fn release(&mut self, pin: u8) -> Result<(), GpioError>;
}

impl<P: GpioPort + ?Sized> GpioPort for &mut P {
    fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError> {
        (**self).setup_output(pin, initial)
    }

    fn write(&mut self, pin: u8, level: PinState) -> Result<(), GpioError> {
        (**self).write(pin, level)
    }

    fn start_pwm(
        &mut self,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        (**self).start_pwm(pin, frequency_hz, duty_percent)
    }

    fn set_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError> {
        (**self).set_duty_cycle(pin, duty_percent)
    }

    fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError> {
        (**self).stop_pwm(pin)
    }

    fn release(&mut self, pin: u8) -> Result<(), GpioError> {
        (**self).release(pin)
    }
}
