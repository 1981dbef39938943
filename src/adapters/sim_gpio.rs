//! In-memory GPIO backend.
//!
//! Used when the crate is built without the `rpi` feature and by unit
//! tests. Tracks the level and PWM duty of every claimed pin and logs each
//! operation at debug level, so the programs can be dry-run on any host.

use std::collections::BTreeMap;

use embedded_hal::digital::PinState;
use log::debug;

use crate::app::ports::GpioPort;
use crate::error::GpioError;

#[derive(Debug, Clone, Copy)]
struct SimPin {
    level: PinState,
    pwm: Option<(f64, f64)>,
}

#[derive(Debug, Default)]
pub struct SimGpio {
    pins: BTreeMap<u8, SimPin>,
}

impl SimGpio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.pins.get(&pin).map(|p| p.level)
    }

    pub fn duty(&self, pin: u8) -> Option<f64> {
        self.pins.get(&pin).and_then(|p| p.pwm).map(|(_, duty)| duty)
    }

    pub fn is_claimed(&self, pin: u8) -> bool {
        self.pins.contains_key(&pin)
    }

    pub fn claimed_count(&self) -> usize {
        self.pins.len()
    }

    fn pin_mut(&mut self, pin: u8) -> Result<&mut SimPin, GpioError> {
        self.pins.get_mut(&pin).ok_or(GpioError::NotConfigured(pin))
    }
}

impl GpioPort for SimGpio {
    fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError> {
        debug!("sim: GPIO{} setup output {:?}", pin, initial);
        self.pins.insert(
            pin,
            SimPin {
                level: initial,
                pwm: None,
            },
        );
        Ok(())
    }

    fn write(&mut self, pin: u8, level: PinState) -> Result<(), GpioError> {
        debug!("sim: GPIO{} <- {:?}", pin, level);
        self.pin_mut(pin)?.level = level;
        Ok(())
    }

    fn start_pwm(
        &mut self,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        debug!(
            "sim: GPIO{} pwm {:.0} Hz {:.1}%",
            pin, frequency_hz, duty_percent
        );
        self.pin_mut(pin)?.pwm = Some((frequency_hz, duty_percent));
        Ok(())
    }

    fn set_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError> {
        debug!("sim: GPIO{} duty {:.1}%", pin, duty_percent);
        let p = self.pin_mut(pin)?;
        let (freq, _) = p.pwm.ok_or(GpioError::PwmNotRunning(pin))?;
        p.pwm = Some((freq, duty_percent));
        Ok(())
    }

    fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError> {
        debug!("sim: GPIO{} pwm stop", pin);
        self.pin_mut(pin)?.pwm = None;
        Ok(())
    }

    fn release(&mut self, pin: u8) -> Result<(), GpioError> {
        debug!("sim: GPIO{} released", pin);
        self.pins.remove(&pin);
        Ok(())
    }
}
