//! Hobby servo on a software-PWM channel.
//!
//! Position is commanded as a raw duty cycle. At 50 Hz (20 ms frame) the
//! usual 1.0–2.0 ms pulse range is 5–10 % duty, with 7.5 % as neutral.

use embedded_hal::digital::PinState;

use crate::app::ports::GpioPort;
use crate::context::GpioContext;
use crate::error::GpioError;

pub struct Servo {
    pin: u8,
    duty_percent: f64,
}

impl Servo {
    /// Claim `pin` and start PWM at `frequency_hz` / `duty_percent`.
    pub fn attach<P: GpioPort>(
        ctx: &mut GpioContext<P>,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<Self, GpioError> {
        ctx.setup_output(pin, PinState::Low)?;
        ctx.start_pwm(pin, frequency_hz, duty_percent)?;
        Ok(Self { pin, duty_percent })
    }

    pub fn set_duty<P: GpioPort>(
        &mut self,
        ctx: &mut GpioContext<P>,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        ctx.change_duty_cycle(self.pin, duty_percent)?;
        self.duty_percent = duty_percent;
        Ok(())
    }

    pub fn duty(&self) -> f64 {
        self.duty_percent
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }
}
