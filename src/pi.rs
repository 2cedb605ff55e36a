use anyhow::anyhow;
use log::{error, info, warn};
use thermo::{report, Config};

mod raspberry_pi;

fn main() -> Result<(), anyhow::Error> {
    thermo::init_logging();

    let config = Config::from_env()?;

    info!("Polling MAX31855 with {config:?}");

    let mut reader = raspberry_pi::open(&config)?;

    loop {
        match reader.read(config.internal, config.raw) {
            Ok(reading) => info!("{}", report::describe(&reading)),
            // Probe faults come and go with the wiring, keep polling.
            Err(e) if e.fault().is_some() => warn!("{e}"),
            Err(e) => {
                error!("{e}");
                return Err(anyhow!("reading the MAX31855 failed: {e}"));
            }
        }

        std::thread::sleep(config.interval);
    }
}
