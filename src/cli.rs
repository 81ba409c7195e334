use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Age calculator.
#[derive(Parser)]
#[command(
    name = "agecalc",
    version,
    about = "Calculate elapsed years, months and days since a date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override where the last calculation is stored.
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate the age for a date and remember it.
    Calc(CalcArgs),
    /// Show how a (possibly partial) date would be validated.
    Check(CheckArgs),
    /// Recalculate from the last saved date.
    Last(TodayArg),
    /// Forget the last saved date.
    Reset,
}

#[derive(clap::Args)]
pub struct TodayArg {
    /// Reference date (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `calc` subcommand.
#[derive(clap::Args)]
pub struct CalcArgs {
    /// Day of month.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: u32,

    /// Month, 1 = January.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Four-digit year.
    #[arg(short, long)]
    pub year: i32,

    /// Do not save this calculation.
    #[arg(long)]
    pub no_save: bool,

    #[command(flatten)]
    pub today: TodayArg,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    /// Month, 1 = January.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    #[arg(short, long)]
    pub year: Option<i32>,

    #[command(flatten)]
    pub today: TodayArg,
}
