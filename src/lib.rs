//! Raspberry Pi GPIO demo library.
//!
//! Backs the `led`, `motor`, `servo` and `teszt` binaries. Hardware access
//! goes through the [`app::ports::GpioPort`] trait; the real `rppal` backend
//! is behind the `rpi` feature and a simulated backend is used otherwise,
//! so everything except [`adapters::rppal_gpio`] builds and tests on any host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod context;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod logging;
pub mod pins;
pub mod programs;
