//! Decodes captured MAX31855 frames without any hardware attached.

use std::io::Read;

use anyhow::{bail, Context};
use log::{debug, warn};
use thermo::{frames, report};

const USAGE: &str = "\
usage: main [--internal] [--raw] [FRAME...]

Frames are 8 hex digits (e.g. 0C000800). With no frames given,
one frame per line is read from stdin.";

fn main() -> Result<(), anyhow::Error> {
    thermo::init_logging();

    let mut internal = false;
    let mut raw = false;
    let mut inputs = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-i" | "--internal" => internal = true,
            "-r" | "--raw" => raw = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => inputs.push(arg),
        }
    }

    let frames = if inputs.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading frames from stdin")?;

        frames::parse_lines(&input)?
    } else {
        inputs
            .iter()
            .map(|input| frames::parse_frame(input))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut faults = 0;

    for frame in frames {
        debug!("frame {frame} = {:?}", frame.as_bytes());

        match frame.decode(internal, raw) {
            Ok(reading) => println!("{frame}: {}", report::describe(&reading)),
            Err(fault) => {
                warn!("{frame}: {fault}");
                println!("{frame}: fault: {fault}");
                faults += 1;
            }
        }
    }

    if faults > 0 {
        bail!("{faults} frame(s) carried a fault");
    }

    Ok(())
}
