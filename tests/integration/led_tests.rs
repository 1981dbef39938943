//! LED program against the recording backend.

use embedded_hal::digital::PinState;
use robotika_gpio::config::LedConfig;
use robotika_gpio::context::GpioContext;
use robotika_gpio::error::{Error, GpioError};
use robotika_gpio::programs::led;

use crate::mock_gpio::{Call, intervals, mock_pair, still_claimed, total_sleep_ms};

#[test]
fn sets_up_all_three_pins_low_first() {
    let (gpio, mut delay, journal) = mock_pair();
    let mut ctx = GpioContext::new(gpio);
    led::run(&mut ctx, &mut delay, &LedConfig::default()).unwrap();

    let calls = journal.borrow();
    assert_eq!(
        &calls[..3],
        &[
            Call::Setup { pin: 22, initial: PinState::Low },
            Call::Setup { pin: 27, initial: PinState::Low },
            Call::Setup { pin: 24, initial: PinState::Low },
        ]
    );
}

#[test]
fn all_three_high_for_one_second() {
    let (gpio, mut delay, journal) = mock_pair();
    let mut ctx = GpioContext::new(gpio);
    led::run(&mut ctx, &mut delay, &LedConfig::default()).unwrap();

    let calls = journal.borrow();
    let held = intervals(&calls);
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].ms, 1000);
    for pin in [22, 27, 24] {
        assert_eq!(held[0].level(pin), Some(PinState::High), "GPIO{pin}");
    }
}

#[test]
fn every_pin_released_after_cleanup() {
    let (gpio, mut delay, journal) = mock_pair();
    let mut ctx = GpioContext::new(gpio);
    led::run(&mut ctx, &mut delay, &LedConfig::default()).unwrap();
    ctx.cleanup().unwrap();

    let calls = journal.borrow();
    assert!(still_claimed(&calls).is_empty());
    assert_eq!(ctx.claimed_pins().count(), 0);
    // Release comes after the hold, never before.
    let sleep_at = calls.iter().position(|c| matches!(c, Call::Sleep { .. })).unwrap();
    let first_release = calls.iter().position(|c| matches!(c, Call::Release { .. })).unwrap();
    assert!(first_release > sleep_at);
}

#[test]
fn failed_setup_releases_already_claimed_pins_on_drop() {
    let (mut gpio, mut delay, journal) = mock_pair();
    gpio.fail_setup_on = Some(24);
    {
        let mut ctx = GpioContext::new(gpio);
        let err = led::run(&mut ctx, &mut delay, &LedConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Gpio(GpioError::Backend { pin: 24, .. })));
    }

    let calls = journal.borrow();
    assert!(still_claimed(&calls).is_empty());
    assert_eq!(total_sleep_ms(&calls), 0);
}
