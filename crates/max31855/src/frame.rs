//! Decoding of the 32-bit MAX31855 output frame.
//!
//! The chip clocks out one big-endian word per conversion:
//!
//! ```text
//!  31      18 17 16 15      4  3  2  1  0
//! [thermocouple][r][F][internal][r][SV][SG][OC]
//! ```
//!
//! `thermocouple` and `internal` are two's complement, and each sits at the
//! top of its own 16-bit half, so each half is read as an `i16` and shifted
//! down arithmetically.

use core::fmt;

use crate::Reading;

/// Size of one conversion result on the wire.
pub const FRAME_LEN: usize = 4;

/// Degrees Celsius per thermocouple LSB.
pub const THERMOCOUPLE_LSB_CELSIUS: f64 = 0.25;

/// Degrees Celsius per internal (cold-junction) LSB.
pub const INTERNAL_LSB_CELSIUS: f64 = 0.0625;

const OPEN_CIRCUIT: u8 = 0b0000_0001;
const SHORT_TO_GROUND: u8 = 0b0000_0010;
const SHORT_TO_POWER: u8 = 0b0000_0100;
const FAULTY_READING: u8 = 0b0000_0001;

/// A fault reported by the chip itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Thermocouple not connected.
    OpenCircuit,
    /// Thermocouple shorted to ground.
    ShortToGround,
    /// Thermocouple shorted to the supply.
    ShortToPower,
    /// The chip flagged the conversion as faulty.
    FaultyReading,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fault::OpenCircuit => "thermocouple not connected",
            Fault::ShortToGround => "short circuit to ground",
            Fault::ShortToPower => "short circuit to power",
            Fault::FaultyReading => "faulty reading",
        })
    }
}

/// One raw conversion result, exactly as clocked out of the chip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame([u8; FRAME_LEN]);

impl RawFrame {
    /// Wraps four bytes in wire order.
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// The frame in wire order.
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// The frame as a single big-endian word.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Returns the first fault flag set in the frame, if any.
    ///
    /// The open-circuit, short-to-ground and short-to-power bits are checked
    /// before the aggregate fault bit, so when several are set the specific
    /// one wins.
    pub const fn fault(&self) -> Option<Fault> {
        let status = self.0[3];

        if status & OPEN_CIRCUIT != 0 {
            Some(Fault::OpenCircuit)
        } else if status & SHORT_TO_GROUND != 0 {
            Some(Fault::ShortToGround)
        } else if status & SHORT_TO_POWER != 0 {
            Some(Fault::ShortToPower)
        } else if self.0[1] & FAULTY_READING != 0 {
            Some(Fault::FaultyReading)
        } else {
            None
        }
    }

    /// Thermocouple temperature as a signed 14-bit count of quarter degrees.
    ///
    /// Meaningless when [`RawFrame::fault`] is `Some`.
    pub const fn thermocouple_raw(&self) -> i16 {
        i16::from_be_bytes([self.0[0], self.0[1]]) >> 2
    }

    /// Cold-junction temperature as a signed 12-bit count of sixteenth degrees.
    ///
    /// Meaningless when [`RawFrame::fault`] is `Some`.
    pub const fn internal_raw(&self) -> i16 {
        i16::from_be_bytes([self.0[2], self.0[3]]) >> 4
    }

    /// Validates the fault bits and decodes the frame into the requested shape.
    ///
    /// `return_internal` adds the cold-junction temperature, `raw` skips
    /// scaling to degrees Celsius.
    pub fn decode(&self, return_internal: bool, raw: bool) -> Result<Reading, Fault> {
        if let Some(fault) = self.fault() {
            return Err(fault);
        }

        let thermocouple = self.thermocouple_raw();
        let internal = self.internal_raw();

        Ok(match (return_internal, raw) {
            (false, true) => Reading::SingleRaw(thermocouple.into()),
            (true, true) => Reading::PairRaw(thermocouple.into(), internal.into()),
            (false, false) => Reading::Single(thermocouple_celsius(thermocouple.into())),
            (true, false) => Reading::Pair(
                thermocouple_celsius(thermocouple.into()),
                internal_celsius(internal.into()),
            ),
        })
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<u32> for RawFrame {
    fn from(word: u32) -> Self {
        Self(word.to_be_bytes())
    }
}

impl fmt::Display for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.to_u32())
    }
}

pub(crate) fn thermocouple_celsius(raw: i32) -> f64 {
    f64::from(raw) * THERMOCOUPLE_LSB_CELSIUS
}

pub(crate) fn internal_celsius(raw: i32) -> f64 {
    f64::from(raw) * INTERNAL_LSB_CELSIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn open_circuit_wins_over_everything() {
        for other in [0x00, 0x02, 0x04, 0x06, 0xF6] {
            let frame = RawFrame::from_bytes([0x7F, 0xFF, 0x12, 0x01 | other]);
            assert_eq!(frame.fault(), Some(Fault::OpenCircuit));
            assert_eq!(frame.decode(true, true), Err(Fault::OpenCircuit));
        }
    }

    #[test]
    fn fault_order() {
        assert_eq!(
            RawFrame::from_bytes([0, 0x01, 0, 0x06]).fault(),
            Some(Fault::ShortToGround)
        );
        assert_eq!(
            RawFrame::from_bytes([0, 0x01, 0, 0x04]).fault(),
            Some(Fault::ShortToPower)
        );
        assert_eq!(
            RawFrame::from_bytes([0, 0x01, 0, 0x00]).fault(),
            Some(Fault::FaultyReading)
        );
        assert_eq!(RawFrame::from_bytes([0, 0x02, 0, 0x08]).fault(), None);
    }

    #[test]
    fn faulty_reading_alone() {
        let frame = RawFrame::from_bytes([0x0C, 0x01, 0x08, 0x00]);
        assert_eq!(frame.decode(false, false), Err(Fault::FaultyReading));
    }

    #[test]
    fn scaling() {
        let frame = RawFrame::from_bytes([0x0C, 0x00, 0x08, 0x00]);

        assert_eq!(frame.thermocouple_raw(), 768);
        assert_eq!(frame.internal_raw(), 128);
        assert_eq!(frame.decode(true, false), Ok(Reading::Pair(192.0, 8.0)));
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let frame = RawFrame::from_bytes([0xFF, 0xFC, 0xFF, 0xF0]);

        assert_eq!(frame.thermocouple_raw(), -1);
        assert_eq!(frame.internal_raw(), -1);
        assert_eq!(frame.decode(true, false), Ok(Reading::Pair(-0.25, -0.0625)));

        // -200.00 °C thermocouple, -20.0 °C cold junction
        let frame = RawFrame::from(0xF380_EC00);
        assert_eq!(frame.decode(true, true), Ok(Reading::PairRaw(-800, -320)));
        assert_eq!(frame.decode(true, false), Ok(Reading::Pair(-200.0, -20.0)));
    }

    #[test]
    fn datasheet_extremes() {
        assert_eq!(RawFrame::from(0x6400_0000).decode(false, false), Ok(Reading::Single(1600.0)));
        assert_eq!(RawFrame::from(0x0000_7F00).decode(true, false), Ok(Reading::Pair(0.0, 127.0)));
        assert_eq!(RawFrame::from(0xFFFC_0000).decode(false, true), Ok(Reading::SingleRaw(-1)));
    }

    #[test]
    fn display() {
        assert_eq!(RawFrame::from_bytes([0x0C, 0x00, 0x08, 0x00]).to_string(), "0C000800");
        assert_eq!(Fault::ShortToPower.to_string(), "short circuit to power");
    }

    proptest! {
        #[test]
        fn fault_free_frames_decode_both_halves(upper in any::<u16>(), lower in any::<u16>()) {
            let upper = upper & !0x0001;
            let lower = lower & !0x0007;
            let word = (u32::from(upper) << 16) | u32::from(lower);

            let reading = RawFrame::from(word).decode(true, true);

            prop_assert_eq!(
                reading,
                Ok(Reading::PairRaw(
                    i32::from((upper as i16) >> 2),
                    i32::from((lower as i16) >> 4),
                ))
            );
        }
    }
}
