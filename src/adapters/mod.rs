//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter      | Implements | Connects to                         |
//! |--------------|------------|-------------------------------------|
//! | `rppal_gpio` | GpioPort   | Raspberry Pi GPIO (feature `rpi`)   |
//! | `sim_gpio`   | GpioPort   | In-memory simulation                |
//! | `time`       | DelayNs    | `std::thread::sleep`                |

#[cfg(feature = "rpi")]
pub mod rppal_gpio;
pub mod sim_gpio;
pub mod time;

use crate::error::GpioError;

/// Backend selected by the enabled features.
#[cfg(feature = "rpi")]
pub type DefaultGpio = rppal_gpio::RppalGpio;
#[cfg(not(feature = "rpi"))]
pub type DefaultGpio = sim_gpio::SimGpio;

/// Open the GPIO backend for this build.
#[cfg(feature = "rpi")]
pub fn open_gpio() -> Result<DefaultGpio, GpioError> {
    rppal_gpio::RppalGpio::new()
}

/// Open the GPIO backend for this build.
#[cfg(not(feature = "rpi"))]
pub fn open_gpio() -> Result<DefaultGpio, GpioError> {
    log::info!("sim: built without `rpi`, pins are simulated");
    Ok(sim_gpio::SimGpio::new())
}
