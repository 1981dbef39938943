//! Recording GPIO backend and delay for integration tests.
//!
//! Both halves push into one shared journal, so a test sees pin operations
//! and sleeps interleaved in the order the program issued them, without
//! touching real GPIO registers or actually sleeping.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use robotika_gpio::app::ports::GpioPort;
use robotika_gpio::error::GpioError;

// ── Call record ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Setup { pin: u8, initial: PinState },
    Write { pin: u8, level: PinState },
    StartPwm { pin: u8, frequency_hz: f64, duty_percent: f64 },
    SetDuty { pin: u8, duty_percent: f64 },
    StopPwm { pin: u8 },
    Release { pin: u8 },
    Sleep { ns: u64 },
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

// ── MockGpio ─────────────────────────────────────────────────

pub struct MockGpio {
    journal: Journal,
    /// Reject `setup_output` for this pin with a backend error.
    pub fail_setup_on: Option<u8>,
    /// Reject `write` of this level on this pin.
    pub fail_write_on: Option<(u8, PinState)>,
}

impl GpioPort for MockGpio {
    fn setup_output(&mut self, pin: u8, initial: PinState) -> Result<(), GpioError> {
        if self.fail_setup_on == Some(pin) {
            return Err(GpioError::Backend {
                pin,
                reason: "pin busy".into(),
            });
        }
        self.journal.borrow_mut().push(Call::Setup { pin, initial });
        Ok(())
    }

    fn write(&mut self, pin: u8, level: PinState) -> Result<(), GpioError> {
        if self.fail_write_on == Some((pin, level)) {
            return Err(GpioError::Backend {
                pin,
                reason: "write failed".into(),
            });
        }
        self.journal.borrow_mut().push(Call::Write { pin, level });
        Ok(())
    }

    fn start_pwm(
        &mut self,
        pin: u8,
        frequency_hz: f64,
        duty_percent: f64,
    ) -> Result<(), GpioError> {
        self.journal.borrow_mut().push(Call::StartPwm {
            pin,
            frequency_hz,
            duty_percent,
        });
        Ok(())
    }

    fn set_duty_cycle(&mut self, pin: u8, duty_percent: f64) -> Result<(), GpioError> {
        self.journal
            .borrow_mut()
            .push(Call::SetDuty { pin, duty_percent });
        Ok(())
    }

    fn stop_pwm(&mut self, pin: u8) -> Result<(), GpioError> {
        self.journal.borrow_mut().push(Call::StopPwm { pin });
        Ok(())
    }

    fn release(&mut self, pin: u8) -> Result<(), GpioError> {
        self.journal.borrow_mut().push(Call::Release { pin });
        Ok(())
    }
}

// ── MockDelay ────────────────────────────────────────────────

pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    fn record(&mut self, ns: u64) {
        self.journal.borrow_mut().push(Call::Sleep { ns });
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

/// A GPIO backend and a delay sharing one journal.
pub fn mock_pair() -> (MockGpio, MockDelay, Journal) {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    (
        MockGpio {
            journal: Rc::clone(&journal),
            fail_setup_on: None,
            fail_write_on: None,
        },
        MockDelay {
            journal: Rc::clone(&journal),
        },
        journal,
    )
}

// ── Journal replay ───────────────────────────────────────────

/// Pin state as seen by the hardware during one sleep.
#[derive(Debug, Clone)]
pub struct Interval {
    pub ms: u64,
    pub levels: BTreeMap<u8, PinState>,
    pub duties: BTreeMap<u8, f64>,
}

impl Interval {
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.levels.get(&pin).copied()
    }
}

/// Replays pin operations in order; `on_step` sees the state after each call.
pub fn replay_with(
    calls: &[Call],
    mut on_step: impl FnMut(&Call, &BTreeMap<u8, PinState>, &BTreeMap<u8, f64>),
) {
    let mut levels = BTreeMap::new();
    let mut duties = BTreeMap::new();
    for call in calls {
        match *call {
            Call::Setup { pin, initial } => {
                levels.insert(pin, initial);
            }
            Call::Write { pin, level } => {
                levels.insert(pin, level);
            }
            Call::StartPwm {
                pin, duty_percent, ..
            }
            | Call::SetDuty { pin, duty_percent } => {
                duties.insert(pin, duty_percent);
            }
            Call::StopPwm { pin } => {
                duties.remove(&pin);
            }
            Call::Release { pin } => {
                levels.remove(&pin);
                duties.remove(&pin);
            }
            Call::Sleep { .. } => {}
        }
        on_step(call, &levels, &duties);
    }
}

/// Snapshot of pin state for every sleep in the journal.
pub fn intervals(calls: &[Call]) -> Vec<Interval> {
    let mut out = Vec::new();
    replay_with(calls, |call, levels, duties| {
        if let Call::Sleep { ns } = call {
            out.push(Interval {
                ms: ns / 1_000_000,
                levels: levels.clone(),
                duties: duties.clone(),
            });
        }
    });
    out
}

/// Pins set up and not released by the end of the journal.
pub fn still_claimed(calls: &[Call]) -> BTreeSet<u8> {
    let mut claimed = BTreeSet::new();
    for call in calls {
        match *call {
            Call::Setup { pin, .. } => {
                claimed.insert(pin);
            }
            Call::Release { pin } => {
                claimed.remove(&pin);
            }
            _ => {}
        }
    }
    claimed
}

pub fn total_sleep_ms(calls: &[Call]) -> u64 {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Sleep { ns } => Some(ns / 1_000_000),
            _ => None,
        })
        .sum()
}
