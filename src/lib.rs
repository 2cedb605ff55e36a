//! Reads a MAX31855 thermocouple converter from a host machine.
//!
//! The driver itself lives in the `max31855` crate; this crate holds what the
//! binaries share: runtime configuration, parsing of captured frames and
//! formatting of readings for the log.

pub mod config;
pub mod frames;
pub mod report;

pub use config::Config;

/// Installs the `env_logger` backend, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
