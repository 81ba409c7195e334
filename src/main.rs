mod cli;
mod logging;

use agecalc::display::{format_difference, format_selection, max_selectable_day};
use agecalc::{Config, RecordStore, Selection, ValidationOutcome};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use cli::{CalcArgs, CheckArgs, Cli, Command, TodayArg};
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }
    let store = RecordStore::new(config.state_file.clone());

    match cli.command {
        Command::Calc(args) => calc(&config, &store, args),
        Command::Check(args) => check(args),
        Command::Last(args) => last(&store, &args),
        Command::Reset => {
            if store.clear()? {
                println!("Cleared saved calculation.");
            } else {
                println!("No saved calculation.");
            }
            Ok(())
        }
    }
}

/// Reference date, normalized to a plain date.
fn today(arg: &TodayArg) -> NaiveDate {
    arg.today.unwrap_or_else(|| Local::now().date_naive())
}

fn calc(config: &Config, store: &RecordStore, args: CalcArgs) -> Result<()> {
    if !config.years.contains(args.year) {
        bail!(
            "year {} is outside the supported range {}-{}",
            args.year,
            config.years.earliest,
            config.years.latest
        );
    }

    let today = today(&args.today);
    let selection = Selection::new(Some(args.day), Some(args.month - 1), Some(args.year));
    info!(selection = %format_selection(&selection), %today, "calculating");

    let diff = selection.calculate(today)?;
    println!("{}", format_difference(&diff));

    if !args.no_save && let Some(date) = selection.to_date() {
        store
            .save(date, Utc::now())
            .context("saving last calculation")?;
    }
    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    let today = today(&args.today);
    let selection = Selection::new(args.day, args.month.map(|m| m - 1), args.year);

    println!("Date: {}", format_selection(&selection));
    println!(
        "Max day: {}",
        max_selectable_day(selection.month, selection.year)
    );
    match selection.validate(today) {
        ValidationOutcome::Valid => println!("Status: valid"),
        ValidationOutcome::Invalid(reason) if !reason.is_user_facing() => {
            println!("Status: incomplete")
        }
        ValidationOutcome::Invalid(reason) => println!("Status: {reason}"),
    }
    let ready = selection.can_calculate(today);
    println!("Can calculate: {}", if ready { "yes" } else { "no" });
    Ok(())
}

fn last(store: &RecordStore, args: &TodayArg) -> Result<()> {
    let record = match store.load() {
        Ok(record) => record,
        Err(e) => {
            warn!("error loading last calculation: {e}");
            None
        }
    };
    let Some(record) = record else {
        println!("No saved calculation.");
        return Ok(());
    };

    let selection = record.selection();
    println!("Date: {}", format_selection(&selection));
    let diff = selection.calculate(today(args))?;
    println!("{}", format_difference(&diff));
    Ok(())
}
