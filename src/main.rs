use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

use chronokit::config::Config;
use chronokit::format::{
    current_date_string, current_date_time_string, format_date_time_default, parse_date, parse_date_time,
};
use chronokit::period::period_between;
use chronokit::{expand_compact, logger, DateTimePattern, Layout, PeriodUnit};

#[derive(Parser)]
#[command(name = "chronokit", version, about = "Format, parse and compare dates and times")]
struct Cli {
    /// Configuration file (defaults to ./chronokit.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Punctuate a compact timestamp such as 20190101000000666
    Expand { compact: String },

    /// Print the current local date-time
    Now {
        #[arg(long)]
        pattern: Option<DateTimePattern>,
    },

    /// Print the current local date
    Today {
        #[arg(long)]
        pattern: Option<DateTimePattern>,
    },

    /// Parse a date-time and print it as yyyy-MM-dd HH:mm:ss.SSS
    Parse {
        text: String,

        #[arg(long)]
        pattern: Option<DateTimePattern>,
    },

    /// Print the signed interval between two date-times
    Between {
        start: String,
        end: String,

        /// days, weeks, months and years compare calendar dates only, so
        /// 23:00 to 01:00 the next day is 1 day
        #[arg(long, default_value = "days")]
        unit: PeriodUnit,

        #[arg(long)]
        pattern: Option<DateTimePattern>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Target path (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let table = config.patterns.table()?;
    let date_time_layout = |pattern: Option<DateTimePattern>| -> Result<Layout> {
        Ok(table.layout(pattern.unwrap_or(config.patterns.default_date_time))?)
    };

    match cli.command {
        Command::Expand { compact } => println!("{}", expand_compact(&compact)),
        Command::Now { pattern } => println!("{}", current_date_time_string(&date_time_layout(pattern)?)),
        Command::Today { pattern } => {
            let layout = table.layout(pattern.unwrap_or(config.patterns.default_date))?;
            println!("{}", current_date_string(&layout)?);
        }
        Command::Parse { text, pattern } => {
            let layout = date_time_layout(pattern)?;
            println!("{}", format_date_time_default(read_value(&text, &layout)?));
        }
        Command::Between {
            start,
            end,
            unit,
            pattern,
        } => {
            let layout = date_time_layout(pattern)?;
            let start = read_value(&start, &layout)?;
            let end = read_value(&end, &layout)?;
            println!("{} {}", period_between(start, end, unit), unit);
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            Config::generate_default_config(&path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Date-only layouts read as midnight.
fn read_value(text: &str, layout: &Layout) -> Result<NaiveDateTime> {
    if layout.has_time() {
        parse_date_time(text, layout).with_context(|| format!("Cannot read '{}'", text))
    } else {
        let date = parse_date(text, layout).with_context(|| format!("Cannot read '{}'", text))?;
        Ok(date.and_time(NaiveTime::default()))
    }
}
