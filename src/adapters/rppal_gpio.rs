//! Raspberry Pi GPIO backend on `rppal`.
//!
//! Each claimed pin is held as an `rppal` [`OutputPin`]. PWM is rppal's
//! software PWM, which works on any header pin (the motor enables and the
//! servo are not all on hardware-PWM capable pins). Releasing a pin drops
//! its `OutputPin`; rppal then restores the pin's original mode, which is
//! the "released, non-driven" state the programs expect after cleanup.

use std::collections::HashMap;

use embedded_hal::digital::PinState;
use log::info;
use rppal::gpio::{Gpio, Level, OutputPin};

use crate::app::ports::GpioPort;
use crate::error::GpioError;

fn backend_err(pin: u8, e: rppal::gpio::Error) -> GpioError {
    GpioError::Backend {
        pin,
        reason: e.to_string(),
    }
}

fn to_level(state: PinState) -> Level {
    match state {
        PinState::Low => Level::Low,
        PinState::High => Level::High,
    }
}

struct Claimed {
    out: OutputPin,
    /// Frequency of the running software PWM, if any.
    pwm_hz: Option<f64>,
}

pub struct RppalGpio {
    gpio: Gpio,
    outputs: HashMap<u8, Claimed>,
}

impl RppalGpio {
    /// Open `/dev/gpiomem` (or `/dev/mem`) for the detected Pi model.
    pub fn new() -> Result<Self, GpioError> {
        let gpio = Gpio::new().map_err(|e| GpioError::Backend {
            pin: 0,
            reason: format!("GPIO unavailable: {e}"),
        })?;
        info!("rppal: GPIO peripheral opened");
        Ok(Self {
            gpio,
            outputs: HashMap::new(),
        })
    }

    fn claimed(&mut self, pin: u8) -> Result<&mut Claimed, GpioError> {
        self.outputs
            .get_mut(&pin)
            .ok_or(GpioError::NotConfigured(pin))
    }
}

impl GpioPort for RppalGpio {
    fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError> {
        let io = self.gpio.get(pin).map_err(|e| backend_err(pin, e))?;
        let out = match initial {
            PinState::Low => io.into_output_low(),
            PinState::High => io.into_output_high(),
        };
        self.outputs.insert(pin, Claimed { out, pwm_hz: None });
        Ok(())
    }

    fn write(&mut self, pin: u8, level: PinState) -> Result<(), GpioError> {
        self.claimed(pin)?.out.write(to_level(level));
        Ok(())
    }

    fn start_pwm(
        &mut self,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        let c = self.claimed(pin)?;
        c.out
            .set_pwm_frequency(frequency_hz, duty_percent / 100.0)
            .map_err(|e| backend_err(pin, e))?;
        c.pwm_hz = Some(frequency_hz);
        Ok(())
    }

    fn set_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError> {
        // rppal has no duty-only setter: re-issue at the running frequency.
        let c = self.claimed(pin)?;
        let hz = c.pwm_hz.ok_or(GpioError::PwmNotRunning(pin))?;
        c.out
            .set_pwm_frequency(hz, duty_percent / 100.0)
            .map_err(|e| backend_err(pin, e))
    }

    fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError> {
        let c = self.claimed(pin)?;
        c.out.clear_pwm().map_err(|e| backend_err(pin, e))?;
        c.pwm_hz = None;
        Ok(())
    }

    fn release(&mut self, pin: u8) -> Result<(), GpioError> {
        // Dropping the OutputPin resets the pin (reset_on_drop defaults to true).
        self.outputs.remove(&pin);
        Ok(())
    }
}
