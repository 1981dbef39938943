//! Motor program: both channels forward, then reverse, then stop.
//!
//! The sequence is driven by the [`fsm`](crate::fsm) sequencer. After each
//! tick the bridge is moved to the commanded state and held for the
//! commanded dwell; the run ends once the machine is back in `Idle`.
//! If a pin write fails mid-sequence the machine is forced to `Idle` and
//! the bridge coasts before the error is returned.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::app::ports::GpioPort;
use crate::config::MotorConfig;
use crate::context::GpioContext;
use crate::drivers::h_bridge::HBridge;
use crate::error::{GpioError, Result};
use crate::fsm::context::SequenceContext;
use crate::fsm::{Fsm, StateId, states};

pub fn run<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    cfg: &MotorConfig,
) -> Result<()> {
    let mut bridge = HBridge::setup(ctx, cfg)?;
    info!(
        "MOTOR | enables at {:.0} Hz, {:.0}% duty",
        cfg.pwm_frequency_hz, cfg.duty_percent
    );

    let mut seq = SequenceContext::new(cfg);
    let mut fsm = Fsm::new(states::build_state_table(), StateId::Idle);
    fsm.start(&mut seq);

    if let Err(e) = sequence(ctx, delay, &mut bridge, &mut fsm, &mut seq) {
        warn!("MOTOR | {} during {:?}, stopping", e, fsm.current_state());
        fsm.force_transition(StateId::Idle, &mut seq);
        if let Err(coast_err) = bridge.coast(ctx) {
            warn!("MOTOR | coast failed: {}", coast_err);
        }
        return Err(e.into());
    }

    info!("MOTOR | sequence done after {} tick(s)", seq.total_ticks);
    Ok(())
}

fn sequence<P: GpioPort, D: DelayNs>(
    ctx: &mut GpioContext<P>,
    delay: &mut D,
    bridge: &mut HBridge,
    fsm: &mut Fsm,
    seq: &mut SequenceContext,
) -> core::result::Result<(), GpioError> {
    bridge.apply(ctx, seq.command)?;
    while !fsm.is_finished(seq) {
        fsm.tick(seq);
        bridge.apply(ctx, seq.command)?;
        if seq.dwell_ms > 0 {
            delay.delay_ms(seq.dwell_ms);
        }
    }
    Ok(())
}
