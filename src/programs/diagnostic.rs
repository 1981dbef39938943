//! Diagnostic blink: set up the pin named by `pin_name`, drive
//! `output_pin` (LED_R) High and hold for `hold_ms`.
//!
//! The board's default name is `TESZT`, which is not in the pin table, so
//! the default run fails with [`Error::UnknownPin`] before any pin is set
//! up. That failure is the program's observed behaviour and is kept. With
//! any name other than `LED_R` the write hits a pin that was never set up
//! and fails with `NotConfigured`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use log::info;

use crate::app::ports::GpioPort;
use crate::config::DiagnosticConfig;
use crate::context::GpioContext;
use crate::error::{Error, Result};
use crate::pins;

pub fn run<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    cfg: &DiagnosticConfig,
) -> Result<()> {
    let pin = pins::lookup(&cfg.pin_name).ok_or_else(|| Error::UnknownPin(cfg.pin_name.clone()))?;

    ctx.setup_output(pin, PinState::Low)?;
    ctx.output(cfg.output_pin, PinState::High)?;
    info!(
        "TESZT | {} (GPIO{}) set up, GPIO{} on for {} ms",
        cfg.pin_name, pin, cfg.output_pin, cfg.hold_ms
    );
    delay.delay_ms(cfg.hold_ms);
    Ok(())
}
