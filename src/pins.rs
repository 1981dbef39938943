//! GPIO pin assignments for the robot board (BCM numbering).
//!
//! Single source of truth: every program references this module rather
//! than hard-coding pin numbers. Names in [`PIN_TABLE`] are what
//! [`lookup`] resolves, so a constant that is not listed here does not exist.

// ---------------------------------------------------------------------------
// RGB status LED
// ---------------------------------------------------------------------------

pub const LED_R: u8 = 22;
pub const LED_G: u8 = 27;
pub const LED_B: u8 = 24;

// ---------------------------------------------------------------------------
// Motor driver (dual H-bridge, L298N-style)
// ---------------------------------------------------------------------------

/// Left channel, forward.
pub const IN1: u8 = 20;
/// Left channel, reverse.
pub const IN2: u8 = 21;
/// Right channel, forward.
pub const IN3: u8 = 19;
/// Right channel, reverse.
pub const IN4: u8 = 26;
/// Left channel speed (PWM enable).
pub const ENA: u8 = 16;
/// Right channel speed (PWM enable).
pub const ENB: u8 = 13;

// ---------------------------------------------------------------------------
// Servo
// ---------------------------------------------------------------------------

pub const SERVO: u8 = 23;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// Software PWM frequency on the motor enable pins.
pub const MOTOR_PWM_FREQ_HZ: f64 = 2000.0;
/// Standard hobby-servo frame rate (20 ms period).
pub const SERVO_PWM_FREQ_HZ: f64 = 50.0;

/// Highest BCM GPIO brought out on the 40-pin header.
pub const MAX_BCM_PIN: u8 = 27;

// ---------------------------------------------------------------------------
// Name table
// ---------------------------------------------------------------------------

pub const PIN_TABLE: &[(&str, u8)] = &[
    ("LED_R", LED_R),
    ("LED_G", LED_G),
    ("LED_B", LED_B),
    ("IN1", IN1),
    ("IN2", IN2),
    ("IN3", IN3),
    ("IN4", IN4),
    ("ENA", ENA),
    ("ENB", ENB),
    ("SERVO", SERVO),
];

/// Resolve a pin by its constant name.
pub fn lookup(name: &str) -> Option<u8> {
    PIN_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, pin)| pin)
}

/// True if `pin` is a BCM number on the header.
pub const fn is_valid(pin: u8) -> bool {
    pin <= MAX_BCM_PIN
}
