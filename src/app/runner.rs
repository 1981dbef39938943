//! Shared `main` for the four binaries.
//!
//! ```text
//!   logging ─▶ config (validate) ─▶ open backend ─▶ GpioContext
//!        ─▶ program::run ─▶ cleanup ─▶ exit 0
//! ```
//!
//! Any error is returned to `main`, which exits with status 1. The context
//! is still dropped on that path, releasing whatever the program claimed.

use anyhow::{Context, Result};
use embedded_hal::delay::DelayNs;
use log::{debug, error, info};

use crate::adapters::{self, time::StdDelay};
use crate::app::ports::GpioPort;
use crate::config::DemoConfig;
use crate::context::GpioContext;
use crate::logging;
use crate::programs::{self, Program};

/// Entry point used by every binary.
pub fn execute(program: Program) -> Result<()> {
    logging::init();
    info!("{} v{} starting", program.name(), env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::default();
    config.validate().context("invalid built-in configuration")?;
    debug!("config: {}", serde_json::to_string(&config)?);

    let gpio = adapters::open_gpio().context("opening GPIO")?;
    let mut ctx = GpioContext::new(gpio);
    let mut delay = StdDelay::new();

    let result = run_program(program, &mut ctx, &mut delay, &config);
    if let Err(e) = &result {
        error!("{} failed: {}", program.name(), e);
    }
    result.with_context(|| format!("{} failed", program.name()))?;

    ctx.cleanup().context("releasing pins")?;
    info!("{} done", program.name());
    Ok(())
}

/// Dispatch to the selected program.
pub fn run_program<P: GpioPort, D: DelayNs>(
    program: Program,
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    config: &DemoConfig,
) -> crate::error::Result<()> {
    match program {
        Program::Led => programs::led::run(ctx, delay, &config.led),
        Program::Motor => programs::motor::run(ctx, delay, &config.motor),
        Program::Servo => programs::servo::run(ctx, delay, &config.servo),
        Program::Diagnostic => programs::diagnostic::run(ctx, delay, &config.diagnostic),
    }
}
