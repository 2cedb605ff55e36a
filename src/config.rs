//! Runtime configuration for the polling binary.
//!
//! Every setting has a default matching the reference wiring (SPI0 at 1 MHz,
//! chip-select on BCM GPIO 24) and can be overridden with a `THERMO_*`
//! environment variable.

use std::time::Duration;

use anyhow::{bail, Context};

/// Polling loop settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SPI bus index, `0` for `/dev/spidev0.*`.
    pub spi_bus: u8,
    /// SPI clock in Hz. The MAX31855 tops out at 5 MHz.
    pub clock_hz: u32,
    /// BCM number of the GPIO driving chip-select.
    pub cs_pin: u8,
    /// Delay between reads.
    pub interval: Duration,
    /// Also report the cold-junction temperature.
    pub internal: bool,
    /// Report raw counts instead of degrees Celsius.
    pub raw: bool,
}

/// Fastest SPI clock the chip supports.
pub const MAX_CLOCK_HZ: u32 = 5_000_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_bus: 0,
            clock_hz: 1_000_000,
            cs_pin: 24,
            interval: Duration::from_millis(500),
            internal: true,
            raw: false,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("THERMO_SPI_BUS") {
            config.spi_bus = parse_number("THERMO_SPI_BUS", &value)?;
        }

        if let Some(value) = lookup("THERMO_CLOCK_HZ") {
            config.clock_hz = parse_number("THERMO_CLOCK_HZ", &value)?;
        }

        if let Some(value) = lookup("THERMO_CS_PIN") {
            config.cs_pin = parse_number("THERMO_CS_PIN", &value)?;
        }

        if let Some(value) = lookup("THERMO_INTERVAL_MS") {
            config.interval = Duration::from_millis(parse_number("THERMO_INTERVAL_MS", &value)?);
        }

        if let Some(value) = lookup("THERMO_INTERNAL") {
            config.internal = parse_flag("THERMO_INTERNAL", &value)?;
        }

        if let Some(value) = lookup("THERMO_RAW") {
            config.raw = parse_flag("THERMO_RAW", &value)?;
        }

        if config.clock_hz == 0 || config.clock_hz > MAX_CLOCK_HZ {
            bail!(
                "THERMO_CLOCK_HZ must be between 1 and {MAX_CLOCK_HZ}, got {}",
                config.clock_hz
            );
        }

        Ok(config)
    }
}

fn parse_number<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} is not a valid number: {value:?}"))
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{key} must be a boolean, got {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("THERMO_SPI_BUS", "1"),
            ("THERMO_CLOCK_HZ", "4000000"),
            ("THERMO_CS_PIN", " 8 "),
            ("THERMO_INTERVAL_MS", "250"),
            ("THERMO_INTERNAL", "off"),
            ("THERMO_RAW", "Yes"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                spi_bus: 1,
                clock_hz: 4_000_000,
                cs_pin: 8,
                interval: Duration::from_millis(250),
                internal: false,
                raw: true,
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("THERMO_CS_PIN", "twenty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("THERMO_RAW", "maybe")])).is_err());
        assert!(Config::from_lookup(lookup(&[("THERMO_CLOCK_HZ", "10000000")])).is_err());
        assert!(Config::from_lookup(lookup(&[("THERMO_CLOCK_HZ", "0")])).is_err());
    }
}
