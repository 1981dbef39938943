//! Application layer: port traits and the binary entry point.
//!
//! All interaction with hardware happens through the **port traits**
//! defined in [`ports`], so the programs stay testable without a Pi.

pub mod ports;
pub mod runner;
