//! Dual H-bridge motor driver (L298N-style).
//!
//! Each channel has a forward pin, a reverse pin and a PWM enable pin that
//! sets speed. Direction changes always drive the outgoing pins low before
//! the incoming pins go high, so a channel never has forward and reverse
//! high at the same time (shoot-through).

use embedded_hal::digital::PinState;

use crate::app::ports::GpioPort;
use crate::config::{ChannelPins, MotorConfig};
use crate::context::GpioContext;
use crate::error::GpioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// All direction pins low.
    Coasting,
    Driving(Direction),
}

pub struct HBridge {
    left: ChannelPins,
    right: ChannelPins,
    state: BridgeState,
}

impl HBridge {
    /// Claim both channels and start PWM on the enable pins.
    ///
    /// Enable pins come up High and direction pins Low, matching the
    /// board's power-on wiring; PWM then takes over the enables.
    pub fn setup<P: GpioPort>(
        ctx: &mut GpioContext<P>,
        cfg: &MotorConfig,
    ) -> Result<Self, GpioError> {
        for ch in [cfg.left, cfg.right] {
            ctx.setup_output(ch.enable, PinState::High)?;
            ctx.setup_output(ch.forward, PinState::Low)?;
            ctx.setup_output(ch.reverse, PinState::Low)?;
        }
        for ch in [cfg.left, cfg.right] {
            ctx.start_pwm(ch.enable, cfg.pwm_frequency_hz, cfg.duty_percent)?;
        }
        Ok(Self {
            left: cfg.left,
            right: cfg.right,
            state: BridgeState::Coasting,
        })
    }

    /// Move both channels to `target`.
    ///
    /// Only pins whose level actually changes are written; lows first.
    pub fn apply<P: GpioPort>(
        &mut self,
        ctx: &mut GpioContext<P>,
        target: BridgeState,
    ) -> Result<(), GpioError> {
        let (fwd, rev) = match target {
            BridgeState::Coasting => (PinState::Low, PinState::Low),
            BridgeState::Driving(Direction::Forward) => (PinState::High, PinState::Low),
            BridgeState::Driving(Direction::Reverse) => (PinState::Low, PinState::High),
        };
        let wanted = [
            (self.left.forward, fwd),
            (self.right.forward, fwd),
            (self.left.reverse, rev),
            (self.right.reverse, rev),
        ];

        for want in [PinState::Low, PinState::High] {
            for &(pin, level) in &wanted {
                if level == want && ctx.level(pin) != Some(level) {
                    ctx.output(pin, level)?;
                }
            }
        }

        self.state = target;
        Ok(())
    }

    pub fn coast<P: GpioPort>(&mut self, ctx: &mut GpioContext<P>) -> Result<(), GpioError> {
        self.apply(ctx, BridgeState::Coasting)
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn forward_pins(&self) -> [u8; 2] {
        [self.left.forward, self.right.forward]
    }

    pub fn reverse_pins(&self) -> [u8; 2] {
        [self.left.reverse, self.right.reverse]
    }

    pub fn enable_pins(&self) -> [u8; 2] {
        [self.left.enable, self.right.enable]
    }
}
