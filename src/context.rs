//! Explicit hardware context.
//!
//! `GpioContext` is created once at program start and passed by `&mut` to
//! every driver and program that touches a pin. It owns the backend
//! ([`GpioPort`]) and a fixed-capacity claim table recording which pins are
//! set up, the level each one drives, and whether it runs PWM.
//!
//! Release is scoped: [`GpioContext::cleanup`] stops PWM and releases every
//! claimed pin, and dropping the context runs the same cleanup for anything
//! still claimed, so an early `?` return never leaves a pin driven.

use embedded_hal::digital::PinState;
use heapless::Vec;
use log::{debug, info, warn};

use crate::app::ports::GpioPort;
use crate::error::GpioError;
use crate::pins;

/// One slot per BCM pin on the header.
pub const MAX_CLAIMS: usize = pins::MAX_BCM_PIN as usize + 1;

/// Software PWM parameters of a claimed pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwmState {
    pub frequency_hz: f64,
    pub duty_percent: f64,
}

/// Bookkeeping for one claimed pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinClaim {
    pub pin: u8,
    pub level: PinState,
    pub pwm: Option<PwmState>,
}

pub struct GpioContext<P: GpioPort> {
    port: P,
    claims: Vec<PinClaim, MAX_CLAIMS>,
}

fn check_duty(duty_percent: f64) -> Result<(), GpioError> {
    if (0.0..=100.0).contains(&duty_percent) {
        Ok(())
    } else {
        Err(GpioError::InvalidDuty)
    }
}

impl<P: GpioPort> GpioContext<P> {
    pub fn new(port: P) -> Self {
        info!("GPIO context opened (BCM numbering)");
        Self {
            port,
            claims: Vec::new(),
        }
    }

    /// Claim `pin` as an output and drive `initial`.
    ///
    /// Setting up a pin that is already claimed only re-drives the level.
    pub fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError> {
        if !pins::is_valid(pin) {
            return Err(GpioError::InvalidPin(pin));
        }

        if let Some(idx) = self.index_of(pin) {
            warn!("GPIO{} already in use, re-driving {:?}", pin, initial);
            self.port.write(pin, initial)?;
            self.claims[idx].level = initial;
            return Ok(());
        }

        if self.claims.is_full() {
            return Err(GpioError::TooManyPins);
        }
        self.port.setup_output(pin, initial)?;
        self.claims
            .push(PinClaim {
                pin,
                level: initial,
                pwm: None,
            })
            .map_err(|_| GpioError::TooManyPins)?;
        debug!("GPIO{} -> output, initial {:?}", pin, initial);
        Ok(())
    }

    /// Drive a level on a pin previously set up with [`setup_output`](Self::setup_output).
    pub fn output(&mut self, pin: u8, level: PinState) -> Result<(), GpioError> {
        let idx = self.index_of(pin).ok_or(GpioError::NotConfigured(pin))?;
        self.port.write(pin, level)?;
        self.claims[idx].level = level;
        debug!("GPIO{} = {:?}", pin, level);
        Ok(())
    }

    /// Start software PWM on a claimed output.
    pub fn start_pwm(
        &mut self,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        let idx = self.index_of(pin).ok_or(GpioError::NotConfigured(pin))?;
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return Err(GpioError::InvalidFrequency);
        }
        check_duty(duty_percent)?;

        self.port.start_pwm(pin, frequency_hz, duty_percent)?;
        self.claims[idx].pwm = Some(PwmState {
            frequency_hz,
            duty_percent,
        });
        debug!(
            "GPIO{} PWM start {:.0} Hz @ {:.1}%",
            pin, frequency_hz, duty_percent
        );
        Ok(())
    }

    pub fn change_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError> {
        let idx = self.index_of(pin).ok_or(GpioError::NotConfigured(pin))?;
        let Some(pwm) = self.claims[idx].pwm.as_mut() else {
            return Err(GpioError::PwmNotRunning(pin));
        };
        check_duty(duty_percent)?;

        self.port.set_duty_cycle(pin, duty_percent)?;
        pwm.duty_percent = duty_percent;
        debug!("GPIO{} PWM duty {:.1}%", pin, duty_percent);
        Ok(())
    }

    /// Stop PWM on `pin`. A pin without PWM is left untouched.
    pub fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError> {
        let idx = self.index_of(pin).ok_or(GpioError::NotConfigured(pin))?;
        if self.claims[idx].pwm.is_some() {
            self.port.stop_pwm(pin)?;
            self.claims[idx].pwm = None;
            debug!("GPIO{} PWM stop", pin);
        }
        Ok(())
    }

    /// Stop all PWM and release every claimed pin.
    ///
    /// Every pin is attempted even if an earlier one fails; the first error
    /// is returned. The claim table is empty afterwards either way.
    pub fn cleanup(&mut self) -> Result<(), GpioError> {
        let mut first_err = None;
        let released = self.claims.len();

        for claim in &self.claims {
            if claim.pwm.is_some() {
                if let Err(e) = self.port.stop_pwm(claim.pin) {
                    warn!("cleanup: GPIO{} PWM stop failed: {}", claim.pin, e);
                    first_err.get_or_insert(e);
                }
            }
            if let Err(e) = self.port.release(claim.pin) {
                warn!("cleanup: GPIO{} release failed: {}", claim.pin, e);
                first_err.get_or_insert(e);
            }
        }
        self.claims.clear();

        if released > 0 {
            info!("cleanup: released {} pin(s)", released);
        }
        first_err.map_or(Ok(()), Err)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn is_claimed(&self, pin: u8) -> bool {
        self.index_of(pin).is_some()
    }

    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.claim(pin).map(|c| c.level)
    }

    pub fn duty_cycle(&self, pin: u8) -> Option<f64> {
        self.claim(pin).and_then(|c| c.pwm).map(|p| p.duty_percent)
    }

    pub fn frequency(&self, pin: u8) -> Option<f64> {
        self.claim(pin).and_then(|c| c.pwm).map(|p| p.frequency_hz)
    }

    pub fn claimed_pins(&self) -> impl Iterator<Item = u8> + '_ {
        self.claims.iter().map(|c| c.pin)
    }

    pub fn claim(&self, pin: u8) -> Option<&PinClaim> {
        self.claims.iter().find(|c| c.pin == pin)
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn index_of(&self, pin: u8) -> Option<usize> {
        self.claims.iter().position(|c| c.pin == pin)
    }
}

impl<P: GpioPort> Drop for GpioContext<P> {
    fn drop(&mut self) {
        if self.claims.is_empty() {
            return;
        }
        warn!(
            "GPIO context dropped with {} pin(s) claimed, releasing",
            self.claims.len()
        );
        if let Err(e) = self.cleanup() {
            warn!("release on drop failed: {}", e);
        }
    }
}
