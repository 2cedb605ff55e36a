use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::{Error, RawFrame, Reading, FRAME_LEN};

/// MAX31855 driver
///
/// Owns the SPI bus and the chip-select pin of one converter. The chip is
/// read-only, so MOSI may be left unconnected.
pub struct ThermocoupleReader<SPI, CS> {
    spi: SPI,
    cs: CS,
    buffer: [u8; FRAME_LEN],
}

impl<SPI: SpiBus, CS: OutputPin> ThermocoupleReader<SPI, CS> {
    /// Creates a new driver from an SPI bus and a chip-select pin.
    /// Please ensure the SPI bus is in SPI mode 0, aka (0, 0), clocked at 5 MHz or less,
    /// and that the chip-select pin idles high.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            buffer: [0; FRAME_LEN],
        }
    }

    /// Gives back the bus and the chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Clocks one frame out of the chip without looking at its fault bits.
    ///
    /// Chip-select is driven high again before returning, whatever the outcome
    /// of the transfer.
    pub fn read_frame(&mut self) -> Result<RawFrame, Error<SPI::Error, CS::Error>> {
        self.buffer = [0; FRAME_LEN];

        if let Err(e) = self.cs.set_low() {
            let _ = self.cs.set_high();
            return Err(Error::ChipSelect(e));
        }

        let transfer = self
            .spi
            .transfer_in_place(&mut self.buffer)
            .and_then(|()| self.spi.flush());

        let release = self.cs.set_high();

        transfer.map_err(Error::Transport)?;
        release.map_err(Error::ChipSelect)?;

        Ok(RawFrame::from_bytes(self.buffer))
    }

    /// Read the measured temperature.
    ///
    /// If `return_internal` is `true`, the reading also carries the internal
    /// (cold-junction) reference temperature. If `raw` is `true`, the values
    /// are the signed 14- and 12-bit counts, otherwise degrees Celsius.
    pub fn read(
        &mut self,
        return_internal: bool,
        raw: bool,
    ) -> Result<Reading, Error<SPI::Error, CS::Error>> {
        let frame = self.read_frame()?;

        Ok(frame.decode(return_internal, raw)?)
    }

    /// Read the thermocouple temperature in degrees Celsius.
    pub fn read_celsius(&mut self) -> Result<f64, Error<SPI::Error, CS::Error>> {
        self.read(false, false).map(|reading| reading.thermocouple())
    }

    /// Read the thermocouple and internal temperatures in degrees Celsius.
    pub fn read_all(&mut self) -> Result<(f64, f64), Error<SPI::Error, CS::Error>> {
        let reading = self.read(true, false)?;
        let thermocouple = reading.thermocouple();
        let internal = reading.internal().unwrap_or_default();

        Ok((thermocouple, internal))
    }
}
