//! Logger initialisation.
//!
//! `env_logger` behind the `log` facade. Defaults to `info`; `RUST_LOG`
//! overrides it (e.g. `RUST_LOG=debug` to see every pin write).

use env_logger::Env;

/// Install the global logger. Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
