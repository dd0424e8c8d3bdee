use anyhow::Result;
use cartel_core::{Clock, FixedClock, Month, SystemClock};
use cartel_io::Config;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cartel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Festival source file (default: ~/.local/share/cartel/festivales.csv)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Evaluate as of this date (dd-mm-yyyy) instead of today
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print the full agenda
    ///
    /// Months are listed in calendar order with their festival count, and
    /// every festival in name order with its styles, venue, dates and either
    /// the days left or "(concluido)".
    Show {
        /// Emit the agenda as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Count the festivals scheduled in a month
    Count {
        /// Month name (Spanish or English) or number 1-12
        month: Month,
    },
    /// List festivals grouped by musical style
    Styles,
    /// Cancel festivals held at the given venues in a month
    ///
    /// Festivals that have already concluded are never cancelled. Venues are
    /// compared case-insensitively against the festival venue.
    Cancel {
        /// Month name (Spanish or English) or number 1-12
        month: Month,

        /// Venues to cancel
        #[arg(required = true)]
        venues: Vec<String>,
    },
    /// Validate the festival source and summarize it per month
    Check,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Create the config file with defaults
    Init,
    /// Print an example config file
    Example,
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), cartel_io::parse::DATE_FORMAT)
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.file {
        Some(path) => Config::load_with_festivals_path(path)?,
        None => Config::load()?,
    };

    init_logging(&config.log_level);
    log::debug!("Festival source: {}", config.festivals_path.display());

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    match cli.command {
        Commands::Show { json } => {
            commands::show_agenda(&config.festivals_path, clock.as_ref(), json)?;
        }
        Commands::Count { month } => {
            commands::count_month(&config.festivals_path, month)?;
        }
        Commands::Styles => {
            commands::show_styles(&config.festivals_path)?;
        }
        Commands::Cancel { month, venues } => {
            commands::cancel(&config.festivals_path, clock.as_ref(), month, &venues)?;
        }
        Commands::Check => {
            commands::check_source(&config.festivals_path)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Example => commands::config::show_example()?,
        },
    }

    Ok(())
}
