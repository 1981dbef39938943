//! Actuator drivers built on the hardware context.

pub mod h_bridge;
pub mod rgb_led;
pub mod servo;
