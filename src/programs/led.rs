//! RGB LED program: all three colours on for `hold_ms`.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::GpioPort;
use crate::config::LedConfig;
use crate::context::GpioContext;
use crate::drivers::rgb_led::RgbLed;
use crate::error::Result;

pub fn run<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    cfg: &LedConfig,
) -> Result<()> {
    let led = RgbLed::setup(ctx, cfg)?;
    led.all_on(ctx)?;
    info!("LED | R/G/B on for {} ms", cfg.hold_ms);
    delay.delay_ms(cfg.hold_ms);
    Ok(())
}
