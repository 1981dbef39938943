//! Servo program against the recording backend.

use robotika_gpio::config::{ServoConfig, SweepConfig};
use robotika_gpio::context::GpioContext;
use robotika_gpio::drivers::servo::Servo;
use robotika_gpio::error::Error;
use robotika_gpio::programs::servo;

use crate::mock_gpio::{Call, intervals, mock_pair, still_claimed, total_sleep_ms};

#[test]
fn neutral_duty_set_once_and_never_changed() {
    let (gpio, mut delay, journal) = mock_pair();
    let mut ctx = GpioContext::new(gpio);
    servo::run(&mut ctx, &mut delay, &ServoConfig::default()).unwrap();

    let calls = journal.borrow();
    let starts: Vec<&Call> = calls
        .iter()
        .filter(|c| matches!(c, Call::StartPwm { .. }))
        .collect();
    assert_eq!(
        starts,
        vec![&Call::StartPwm {
            pin: 23,
            frequency_hz: 50.0,
            duty_percent: 7.5
        }]
    );
    assert!(
        !calls.iter().any(|c| matches!(c, Call::SetDuty { .. })),
        "sweep is disabled by default"
    );

    let held = intervals(&calls);
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].ms, 1000);
    assert_eq!(held[0].duties.get(&23).copied(), Some(7.5));
}

#[test]
fn servo_released_after_cleanup() {
    let (gpio, mut delay, journal) = mock_pair();
    let mut ctx = GpioContext::new(gpio);
    servo::run(&mut ctx, &mut delay, &ServoConfig::default()).unwrap();
    ctx.cleanup().unwrap();

    let calls = journal.borrow();
    assert!(still_claimed(&calls).is_empty());
    assert!(calls.contains(&Call::StopPwm { pin: 23 }));
}

#[test]
fn enabled_sweep_visits_50_through_100() {
    let (gpio, mut delay, journal) = mock_pair();
    let cfg = ServoConfig {
        sweep: Some(SweepConfig::default()),
        ..ServoConfig::default()
    };
    let mut ctx = GpioContext::new(gpio);
    servo::run(&mut ctx, &mut delay, &cfg).unwrap();

    let calls = journal.borrow();
    let duties: Vec<f64> = calls
        .iter()
        .filter_map(|c| match c {
            Call::SetDuty { pin: 23, duty_percent } => Some(*duty_percent),
            _ => None,
        })
        .collect();
    let expected: Vec<f64> = (0..=10).map(|i| 50.0 + 5.0 * f64::from(i)).collect();
    assert_eq!(duties.len(), expected.len());
    for (got, want) in duties.iter().zip(&expected) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }

    let held: Vec<u64> = intervals(&calls).iter().map(|i| i.ms).collect();
    assert_eq!(held.len(), 12);
    assert!(held[..11].iter().all(|&ms| ms == 500));
    assert_eq!(held[11], 1000);
}

#[test]
fn multiple_passes_repeat_the_sweep() {
    let (gpio, mut delay, journal) = mock_pair();
    let cfg = ServoConfig {
        sweep: Some(SweepConfig {
            start_percent: 5.0,
            end_percent: 10.0,
            step_percent: 2.5,
            step_ms: 100,
            passes: 2,
        }),
        ..ServoConfig::default()
    };
    let mut ctx = GpioContext::new(gpio);
    servo::run(&mut ctx, &mut delay, &cfg).unwrap();

    let calls = journal.borrow();
    let sets = calls
        .iter()
        .filter(|c| matches!(c, Call::SetDuty { .. }))
        .count();
    assert_eq!(sets, 6);
}

#[test]
fn fine_sweep_to_full_duty_completes() {
    let (gpio, mut delay, journal) = mock_pair();
    let cfg = ServoConfig {
        sweep: Some(SweepConfig {
            start_percent: 0.0,
            end_percent: 100.0,
            step_percent: 0.01,
            step_ms: 1,
            passes: 1,
        }),
        ..ServoConfig::default()
    };
    cfg.validate().unwrap();
    let mut ctx = GpioContext::new(gpio);
    servo::run(&mut ctx, &mut delay, &cfg).unwrap();

    let calls = journal.borrow();
    let duties: Vec<f64> = calls
        .iter()
        .filter_map(|c| match c {
            Call::SetDuty { duty_percent, .. } => Some(*duty_percent),
            _ => None,
        })
        .collect();
    assert_eq!(duties.len(), 10_001);
    assert!(duties.iter().all(|&d| (0.0..=100.0).contains(&d)));
    assert_eq!(duties.last().copied(), Some(100.0));
}

#[test]
fn invalid_sweep_rejected_before_moving() {
    for step_percent in [0.0, 1e-9] {
        let (gpio, mut delay, journal) = mock_pair();
        let sweep = SweepConfig {
            start_percent: 0.0,
            end_percent: 100.0,
            step_percent,
            ..SweepConfig::default()
        };
        let mut ctx = GpioContext::new(gpio);
        let mut arm = Servo::attach(&mut ctx, 23, 50.0, 7.5).unwrap();

        let err = servo::run_sweep(&mut ctx, &mut delay, &mut arm, &sweep).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{step_percent}: {err}");

        let calls = journal.borrow();
        assert!(!calls.iter().any(|c| matches!(c, Call::SetDuty { .. })));
        assert_eq!(total_sleep_ms(&calls), 0);
    }
}
