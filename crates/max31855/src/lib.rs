//! Provides a driver for a Maxim MAX31855 thermocouple-to-digital converter via the `embedded-hal` ecosystem.
//!
//! ```no_run
//! # fn demo<SPI, CS>(spi: SPI, cs: CS)
//! # where SPI: embedded_hal::spi::SpiBus, CS: embedded_hal::digital::OutputPin {
//! use max31855::{Reading, ThermocoupleReader};
//!
//! let mut reader = ThermocoupleReader::new(spi, cs);
//!
//! if let Ok(Reading::Pair(thermocouple, internal)) = reader.read(true, false) {
//!     // degrees Celsius
//! }
//! # }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

mod error;
mod frame;
mod reader;

pub use error::Error;
pub use frame::{Fault, RawFrame, FRAME_LEN, INTERNAL_LSB_CELSIUS, THERMOCOUPLE_LSB_CELSIUS};
pub use reader::ThermocoupleReader;

use frame::{internal_celsius, thermocouple_celsius};

/// A decoded temperature reading.
///
/// The variant is picked by the `return_internal` and `raw` flags of
/// [`ThermocoupleReader::read`]. Raw values are the signed 14-bit thermocouple
/// count (quarter degrees) and the signed 12-bit cold-junction count
/// (sixteenth degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Thermocouple temperature in degrees Celsius.
    Single(f64),
    /// Thermocouple temperature as a raw count.
    SingleRaw(i32),
    /// Thermocouple and cold-junction temperatures in degrees Celsius.
    Pair(f64, f64),
    /// Thermocouple and cold-junction temperatures as raw counts.
    PairRaw(i32, i32),
}

impl Reading {
    /// Thermocouple temperature in degrees Celsius, whatever the variant.
    pub fn thermocouple(&self) -> f64 {
        match *self {
            Reading::Single(t) | Reading::Pair(t, _) => t,
            Reading::SingleRaw(t) | Reading::PairRaw(t, _) => thermocouple_celsius(t),
        }
    }

    /// Cold-junction temperature in degrees Celsius, if the reading carries one.
    pub fn internal(&self) -> Option<f64> {
        match *self {
            Reading::Pair(_, i) => Some(i),
            Reading::PairRaw(_, i) => Some(internal_celsius(i)),
            Reading::Single(_) | Reading::SingleRaw(_) => None,
        }
    }

    /// Whether the values are unscaled counts.
    pub fn is_raw(&self) -> bool {
        matches!(self, Reading::SingleRaw(_) | Reading::PairRaw(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_scale_raw_variants() {
        assert_eq!(Reading::SingleRaw(768).thermocouple(), 192.0);
        assert_eq!(Reading::SingleRaw(768).internal(), None);
        assert_eq!(Reading::PairRaw(-1, 128).thermocouple(), -0.25);
        assert_eq!(Reading::PairRaw(-1, 128).internal(), Some(8.0));
        assert_eq!(Reading::Pair(192.0, 8.0).internal(), Some(8.0));
        assert_eq!(Reading::Single(192.0).thermocouple(), 192.0);
    }

    #[test]
    fn raw_flag() {
        assert!(Reading::SingleRaw(0).is_raw());
        assert!(Reading::PairRaw(0, 0).is_raw());
        assert!(!Reading::Single(0.0).is_raw());
        assert!(!Reading::Pair(0.0, 0.0).is_raw());
    }
}
