use core::fmt;

use crate::Fault;

/// Errors returned by [`ThermocoupleReader`](crate::ThermocoupleReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    /// Thermocouple not connected.
    OpenCircuit,
    /// Thermocouple shorted to ground.
    ShortToGround,
    /// Thermocouple shorted to the supply.
    ShortToPower,
    /// The chip flagged the conversion as faulty.
    FaultyReading,
    /// The SPI transfer failed.
    Transport(SpiE),
    /// The chip-select pin could not be driven.
    ChipSelect(PinE),
}

impl<SpiE, PinE> Error<SpiE, PinE> {
    /// The chip-reported fault behind this error, if it is one.
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Error::OpenCircuit => Some(Fault::OpenCircuit),
            Error::ShortToGround => Some(Fault::ShortToGround),
            Error::ShortToPower => Some(Fault::ShortToPower),
            Error::FaultyReading => Some(Fault::FaultyReading),
            Error::Transport(_) | Error::ChipSelect(_) => None,
        }
    }
}

impl<SpiE, PinE> From<Fault> for Error<SpiE, PinE> {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::OpenCircuit => Error::OpenCircuit,
            Fault::ShortToGround => Error::ShortToGround,
            Fault::ShortToPower => Error::ShortToPower,
            Fault::FaultyReading => Error::FaultyReading,
        }
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OpenCircuit => fmt::Display::fmt(&Fault::OpenCircuit, f),
            Error::ShortToGround => fmt::Display::fmt(&Fault::ShortToGround, f),
            Error::ShortToPower => fmt::Display::fmt(&Fault::ShortToPower, f),
            Error::FaultyReading => fmt::Display::fmt(&Fault::FaultyReading, f),
            Error::Transport(e) => write!(f, "SPI transfer failed: {e:?}"),
            Error::ChipSelect(e) => write!(f, "chip select failed: {e:?}"),
        }
    }
}
