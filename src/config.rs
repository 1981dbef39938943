//! Program configuration parameters
//!
//! Built into the binaries: there is no file, NVS-style store or
//! environment override. `Default` reproduces the wiring and timing of the
//! robot board exactly; [`DemoConfig::validate`] rejects anything a program
//! could not drive safely.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Configuration for all four programs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub led: LedConfig,
    pub motor: MotorConfig,
    pub servo: ServoConfig,
    pub diagnostic: DiagnosticConfig,
}

// --- LED ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedConfig {
    pub red_pin: u8,
    pub green_pin: u8,
    pub blue_pin: u8,
    /// How long all three stay lit (milliseconds)
    pub hold_ms: u32,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            red_pin: pins::LED_R,
            green_pin: pins::LED_G,
            blue_pin: pins::LED_B,
            hold_ms: 1000,
        }
    }
}

// --- Motor ---

/// Pins of one H-bridge channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPins {
    pub forward: u8,
    pub reverse: u8,
    pub enable: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorConfig {
    pub left: ChannelPins,
    pub right: ChannelPins,
    /// Enable-pin PWM frequency (Hz)
    pub pwm_frequency_hz: f64,
    /// Enable-pin PWM duty cycle (0-100%)
    pub duty_percent: f64,
    /// Forward interval (milliseconds)
    pub forward_ms: u32,
    /// Reverse interval (milliseconds)
    pub reverse_ms: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            left: ChannelPins {
                forward: pins::IN1,
                reverse: pins::IN2,
                enable: pins::ENA,
            },
            right: ChannelPins {
                forward: pins::IN3,
                reverse: pins::IN4,
                enable: pins::ENB,
            },
            pwm_frequency_hz: pins::MOTOR_PWM_FREQ_HZ,
            duty_percent: 25.0,
            forward_ms: 1000,
            reverse_ms: 1000,
        }
    }
}

// --- Servo ---

/// Duty-cycle sweep. Walks `start..=end` in `step` increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub start_percent: f64,
    pub end_percent: f64,
    pub step_percent: f64,
    /// Dwell at each step (milliseconds)
    pub step_ms: u32,
    /// Number of full passes
    pub passes: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_percent: 50.0,
            end_percent: 100.0,
            step_percent: 5.0,
            step_ms: 500,
            passes: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServoConfig {
    pub pin: u8,
    pub pwm_frequency_hz: f64,
    /// Neutral position duty cycle (0-100%)
    pub neutral_duty_percent: f64,
    /// Hold at neutral (milliseconds)
    pub hold_ms: u32,
    /// Disabled unless set.
    pub sweep: Option<SweepConfig>,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            pin: pins::SERVO,
            pwm_frequency_hz: pins::SERVO_PWM_FREQ_HZ,
            neutral_duty_percent: 7.5,
            hold_ms: 1000,
            sweep: None,
        }
    }
}

// --- Diagnostic ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticConfig {
    /// Pin constant set up as an output, resolved through [`pins::lookup`].
    pub pin_name: String,
    /// Pin driven High once setup succeeds. The board's script writes
    /// `LED_R` whatever `pin_name` is.
    pub output_pin: u8,
    pub hold_ms: u32,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            pin_name: "TESZT".into(),
            output_pin: pins::LED_R,
            hold_ms: 1000,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn valid_duty(duty: f64) -> bool {
    (0.0..=100.0).contains(&duty)
}

fn valid_frequency(hz: f64) -> bool {
    hz.is_finite() && hz > 0.0
}

fn distinct_valid_pins(list: &[u8]) -> bool {
    list.iter().all(|&p| pins::is_valid(p))
        && list
            .iter()
            .enumerate()
            .all(|(i, p)| !list[i + 1..].contains(p))
}

impl LedConfig {
    pub fn validate(&self) -> Result<()> {
        if !distinct_valid_pins(&[self.red_pin, self.green_pin, self.blue_pin]) {
            return Err(Error::Config("LED pins must be distinct BCM pins"));
        }
        Ok(())
    }
}

impl MotorConfig {
    pub fn validate(&self) -> Result<()> {
        let all = [
            self.left.forward,
            self.left.reverse,
            self.left.enable,
            self.right.forward,
            self.right.reverse,
            self.right.enable,
        ];
        if !distinct_valid_pins(&all) {
            return Err(Error::Config("motor pins must be distinct BCM pins"));
        }
        if !valid_frequency(self.pwm_frequency_hz) {
            return Err(Error::Config("motor PWM frequency must be above 0 Hz"));
        }
        if !valid_duty(self.duty_percent) {
            return Err(Error::Config("motor duty must be within 0-100 %"));
        }
        Ok(())
    }
}

/// Upper bound on duty values in one sweep pass (0-100 % in 0.01 % steps).
pub const MAX_SWEEP_STEPS: usize = 10_001;

impl SweepConfig {
    /// Number of step intervals between `start` and `end`. Only meaningful
    /// once the bounds and step have been checked.
    fn intervals(&self) -> f64 {
        // Epsilon keeps an exact multiple from rounding down to one short.
        ((self.end_percent - self.start_percent) / self.step_percent + 1e-9).floor()
    }

    /// Duty values of one pass, `start` and `end` inclusive, never past `end`.
    pub fn steps(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let n = self.intervals() as usize;
        Ok((0..=n)
            .map(|i| (self.start_percent + i as f64 * self.step_percent).min(self.end_percent))
            .collect())
    }

    pub fn validate(&self) -> Result<()> {
        if !valid_duty(self.start_percent) || !valid_duty(self.end_percent) {
            return Err(Error::Config("sweep bounds must be within 0-100 %"));
        }
        if self.start_percent > self.end_percent {
            return Err(Error::Config("sweep start must not exceed sweep end"));
        }
        if !(self.step_percent.is_finite() && self.step_percent > 0.0) {
            return Err(Error::Config("sweep step must be positive"));
        }
        if self.intervals() >= MAX_SWEEP_STEPS as f64 {
            return Err(Error::Config("sweep step too small"));
        }
        Ok(())
    }
}

impl ServoConfig {
    pub fn validate(&self) -> Result<()> {
        if !pins::is_valid(self.pin) {
            return Err(Error::Config("servo pin must be a BCM pin"));
        }
        if !valid_frequency(self.pwm_frequency_hz) {
            return Err(Error::Config("servo PWM frequency must be above 0 Hz"));
        }
        if !valid_duty(self.neutral_duty_percent) {
            return Err(Error::Config("servo duty must be within 0-100 %"));
        }
        if let Some(sweep) = &self.sweep {
            sweep.validate()?;
        }
        Ok(())
    }
}

impl DiagnosticConfig {
    pub fn validate(&self) -> Result<()> {
        if !pins::is_valid(self.output_pin) {
            return Err(Error::Config("diagnostic output pin must be a BCM pin"));
        }
        Ok(())
    }
}

impl DemoConfig {
    /// Validate every program's section.
    ///
    /// The diagnostic pin name is resolved by that program's run, not here.
    pub fn validate(&self) -> Result<()> {
        self.led.validate()?;
        self.motor.validate()?;
        self.servo.validate()?;
        self.diagnostic.validate()
    }
}
