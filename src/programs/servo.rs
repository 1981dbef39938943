//! Servo program: hold neutral for `hold_ms`, then an optional sweep.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::GpioPort;
use crate::config::{ServoConfig, SweepConfig};
use crate::context::GpioContext;
use crate::drivers::servo::Servo;
use crate::error::Result;

pub fn run<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    cfg: &ServoConfig,
) -> Result<()> {
    let mut servo = Servo::attach(ctx, cfg.pin, cfg.pwm_frequency_hz, cfg.neutral_duty_percent)?;
    info!(
        "SERVO | GPIO{} at {:.0} Hz, neutral {:.1}%",
        cfg.pin, cfg.pwm_frequency_hz, cfg.neutral_duty_percent
    );

    if let Some(sweep) = &cfg.sweep {
        run_sweep(ctx, delay, &mut servo, sweep)?;
    }

    delay.delay_ms(cfg.hold_ms);
    Ok(())
}

/// Step the duty from `start` to `end` for each pass, dwelling at every step.
///
/// An invalid sweep is rejected before the servo moves.
pub fn run_sweep<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    servo: &mut Servo,
    sweep: &SweepConfig,
) -> Result<()> {
    let steps = sweep.steps()?;
    for pass in 0..sweep.passes {
        info!("SERVO | sweep pass {}/{}", pass + 1, sweep.passes);
        for &duty in &steps {
            servo.set_duty(ctx, duty)?;
            delay.delay_ms(sweep.step_ms);
        }
    }
    Ok(())
}
