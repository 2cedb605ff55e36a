//! Human readable rendering of readings.

use max31855::Reading;

/// Formats a reading the way the binaries print and log it.
pub fn describe(reading: &Reading) -> String {
    match *reading {
        Reading::Single(t) => format!("{t:.2} °C"),
        Reading::SingleRaw(t) => format!("{t} (raw)"),
        Reading::Pair(t, i) => format!("{t:.2} °C, cold junction {i:.4} °C"),
        Reading::PairRaw(t, i) => format!("{t} (raw), cold junction {i} (raw)"),
    }
}
