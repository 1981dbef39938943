//! Discrete RGB LED on three digital outputs.
//!
//! Each colour is simply on or off; there is no PWM dimming on this board.

use embedded_hal::digital::PinState;

use crate::app::ports::GpioPort;
use crate::config::LedConfig;
use crate::context::GpioContext;
use crate::error::GpioError;

pub struct RgbLed {
    pins: [u8; 3],
}

impl RgbLed {
    /// Claim the three colour pins, all off.
    pub fn setup<P: GpioPort>(
        ctx: &mut GpioContext<P>,
        cfg: &LedConfig,
    ) -> Result<Self, GpioError> {
        let pins = [cfg.red_pin, cfg.green_pin, cfg.blue_pin];
        for pin in pins {
            ctx.setup_output(pin, PinState::Low)?;
        }
        Ok(Self { pins })
    }

    pub fn set_all<P: GpioPort>(
        &self,
        ctx: &mut GpioContext<P>,
        level: PinState,
    ) -> Result<(), GpioError> {
        for pin in self.pins {
            ctx.output(pin, level)?;
        }
        Ok(())
    }

    pub fn all_on<P: GpioPort>(&self, ctx: &mut GpioContext<P>) -> Result<(), GpioError> {
        self.set_all(ctx, PinState::High)
    }

    pub fn all_off<P: GpioPort>(&self, ctx: &mut GpioContext<P>) -> Result<(), GpioError> {
        self.set_all(ctx, PinState::Low)
    }

    /// Red, green, blue.
    pub fn pins(&self) -> [u8; 3] {
        self.pins
    }
}
