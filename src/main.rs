/// fuel_align — empirical check of the median / mean-adjusted alignment claims.
use clap::Parser; // trait import enables FuelAlignCli::parse()

use fuel_align::cli::FuelAlignCli;
use fuel_align::commands::verify::{self, VerifyOptions};
use fuel_align::config::load_or_default;
use fuel_align::core::debug;
use fuel_align::debug_log;

fn main() -> anyhow::Result<()> {
    let args = FuelAlignCli::parse();
    if args.debug {
        debug::enable();
    }

    let mut config = load_or_default(&args.config)?;
    if let Some(n) = args.iterations {
        config.iterations = n;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    debug_log!("seed source: {}", if args.seed.is_some() { "--seed" } else { "entropy" });

    // Failed checks are reported, never turned into a non-zero exit.
    verify::run(&VerifyOptions { seed, config, json: args.json })?;
    Ok(())
}
