//! Wiring of the MAX31855 to a Raspberry Pi through `rppal`.

use anyhow::{bail, Context};
use max31855::ThermocoupleReader;
use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use thermo::Config;

pub type Reader = ThermocoupleReader<Spi, OutputPin>;

/// Opens the SPI bus and chip-select pin named by `config`.
///
/// Chip-select is driven from a plain GPIO so the converter can share the bus
/// with devices on the hardware slave-select lines.
pub fn open(config: &Config) -> anyhow::Result<Reader> {
    let bus = match config.spi_bus {
        0 => Bus::Spi0,
        1 => Bus::Spi1,
        2 => Bus::Spi2,
        3 => Bus::Spi3,
        4 => Bus::Spi4,
        5 => Bus::Spi5,
        6 => Bus::Spi6,
        other => bail!("there is no SPI bus {other}"),
    };

    let spi = Spi::new(bus, SlaveSelect::Ss0, config.clock_hz, Mode::Mode0)
        .with_context(|| format!("opening SPI bus {}", config.spi_bus))?;

    let cs = Gpio::new()
        .context("opening GPIO")?
        .get(config.cs_pin)
        .with_context(|| format!("claiming GPIO {} for chip-select", config.cs_pin))?
        .into_output_high();

    Ok(ThermocoupleReader::new(spi, cs))
}
