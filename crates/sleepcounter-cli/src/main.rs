use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use sleepcounter_core::{Calendar, Clock, FixedClock, SystemClock};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod widget;

use config::Config;

#[derive(Parser)]
#[command(name = "sleepcounter-cli", version, about = "Sleepcounter CLI")]
struct Cli {
    /// Pretend it is this local time ("YYYY-MM-DD HH:MM[:SS]")
    #[arg(long, global = true, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full countdown snapshot as JSON
    Status,
    /// Show the next event to happen
    Next {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events currently being counted down
    Events {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's special day, if any
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print whether it is nighttime
    Night,
    /// Start the console widget, update it once, and stop
    Run,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("expected \"YYYY-MM-DD HH:MM[:SS]\", got \"{s}\""))
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("SLEEPCOUNTER_LOG")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_calendar(
    config: &Config,
    at: Option<NaiveDateTime>,
) -> Result<Calendar<Box<dyn Clock>>, Box<dyn std::error::Error>> {
    let clock: Box<dyn Clock> = match at {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock),
    };
    Ok(config.calendar(clock)?)
}

/// Load the config file, start logging at its level, and build the calendar.
fn load_calendar(
    at: Option<NaiveDateTime>,
) -> Result<Calendar<Box<dyn Clock>>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.log_level);
    build_calendar(&config, at)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let at = cli.at;
    match cli.command {
        // Loads the file itself, only where needed, so a broken one can be reset.
        Commands::Config { action } => {
            init_tracing(&Config::default().log_level);
            commands::config::run(action)
        }
        Commands::Status => commands::countdown::status(&load_calendar(at)?),
        Commands::Next { json } => commands::countdown::next(&load_calendar(at)?, json),
        Commands::Events { json } => commands::countdown::events(&load_calendar(at)?, json),
        Commands::Today { json } => commands::countdown::today(&load_calendar(at)?, json),
        Commands::Night => commands::countdown::night(&load_calendar(at)?),
        Commands::Run => commands::run::run(load_calendar(at)?),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_instant_accepts_common_forms() {
        assert_eq!(
            parse_instant("2018-12-23 11:23").unwrap().to_string(),
            "2018-12-23 11:23:00"
        );
        assert_eq!(
            parse_instant("2018-12-23T06:30:15").unwrap().to_string(),
            "2018-12-23 06:30:15"
        );
        assert!(parse_instant("23/12/2018").is_err());
    }

    #[test]
    fn cli_parses_global_at_flag() {
        let cli = Cli::try_parse_from(["sleepcounter-cli", "next", "--at", "2018-10-14 23:01"])
            .unwrap();
        assert_eq!(cli.at, Some(parse_instant("2018-10-14 23:01").unwrap()));
        assert!(matches!(cli.command, Commands::Next { json: false }));
    }

    #[test]
    fn build_calendar_uses_fixed_clock_when_given() {
        let at = parse_instant("2018-10-31 08:00").unwrap();
        let calendar = build_calendar(&Config::default(), Some(at)).unwrap();
        assert_eq!(calendar.now(), at);
        assert!(calendar.special_day_today());
    }
}
