use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fuel_align",
    about = "Check that median and mean-adjusted targets minimize alignment fuel",
    version
)]
pub struct FuelAlignCli {
    /// Seed for the sample generator; drawn from system entropy when omitted
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Number of generated tests (overrides config)
    #[arg(short = 'n', long = "iterations", value_name = "N")]
    pub iterations: Option<usize>,

    /// Path to config (TOML); default: ~/.fuel_align/verify.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print one JSON record per test instead of the text report
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Log scan details to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}
