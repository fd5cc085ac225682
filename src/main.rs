use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};

use holidaycal::configuration::Configuration;
use holidaycal::export::calendarevent::{CalendarEvent, MissingNamePolicy};
use holidaycal::export::icalendar::Calendar;
use holidaycal::export::listing::write_listing;
use holidaycal::holiday::languagetag::LanguageTag;
use holidaycal::time::utility::{MAX_YEAR, MIN_YEAR};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Plain listing on standard output.
    Stdout,
    /// iCalendar file.
    Ics
}

/// Public holidays and observances as a plain listing or an iCalendar file.
#[derive(Parser, Debug)]
#[command(name = "holidaycal", version, about)]
struct Cli {
    /// Year to start from (defaults to the current year).
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64))]
    from: Option<i32>,

    /// Last year to include (defaults to the current year).
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64))]
    till: Option<i32>,

    /// Language of holiday names, e.g. `de` or `en`.
    #[arg(long)]
    lang: Option<LanguageTag>,

    /// Language to use when a holiday has no name in `--lang`; without it such holidays are skipped.
    #[arg(long)]
    fallback_lang: Option<LanguageTag>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Stdout)]
    format: OutputFormat,

    /// Output file for `--format ics` (defaults to `<calendar name>.ics`).
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Configuration::new()
    };
    if let Some(lang) = cli.lang.clone() {
        config.set_language(lang);
    }

    let current_year = Local::now().year();
    let from_year = cli.from.unwrap_or(current_year);
    let till_year = cli.till.unwrap_or(current_year);
    if from_year > till_year {
        bail!("--from {from_year} is after --till {till_year}");
    }

    let policy = match cli.fallback_lang.clone() {
        Some(fallback) => MissingNamePolicy::Fallback(fallback),
        None => MissingNamePolicy::Skip
    };
    let language = config.language().clone();
    tracing::debug!(from_year, till_year, %language, format = ?cli.format, "generating holidays");

    match cli.format {
        OutputFormat::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            for year in from_year..=till_year {
                let holidays = config.catalogue().holidays_for_year(year);
                write_listing(&mut writer, &holidays, &language, &policy)?;
            }
            writer.flush()?;
        },
        OutputFormat::Ics => {
            let calendar_name = config.calendar_name_in(&language).to_owned();
            let mut calendar = Calendar::new(config.product_id());
            calendar.set_name(calendar_name.clone());

            for year in from_year..=till_year {
                for holiday in config.catalogue().holidays_for_year(year) {
                    if let Some(event) = CalendarEvent::from_holiday_with_policy(&holiday, &language, &policy) {
                        calendar.add_event(event);
                    }
                }
            }

            let outfile_path = cli.outfile
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{calendar_name}.ics")));
            let outfile = File::create(&outfile_path)
                .with_context(|| format!("failed to create {}", outfile_path.display()))?;
            let mut writer = BufWriter::new(outfile);
            calendar.serialize(&mut writer)?;
            writer.flush()?;

            tracing::info!(events = calendar.events().len(), path = %outfile_path.display(), "saved calendar");
            println!("Saved calendar to {}", outfile_path.display());
        }
    }

    Ok(())
}
