// Command line surface: global options plus one subcommand per search mode.

use crate::api::{AirportSource, DEFAULT_ENDPOINT};
use crate::geo::Mode;
use crate::input::{self, InputClosed, Prompter, RadiusArgs, UsageError};
use crate::output::NO_RESULTS;
use crate::pipeline::{self, Report};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find airports near a point or inside an area")]
pub struct Cli {
    /// Search endpoint queried for airports.
    #[arg(long, env = "AIRPORT_FINDER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Diagnostics written to stderr.
    #[arg(long, env = "AIRPORT_FINDER_LOG", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Search mode; `area` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Area)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Airports inside a box, closest to its center first. Always interactive.
    Area,

    /// Airports within a radius of a position, closest first.
    #[command(disable_help_flag = true)]
    Around {
        /// `-lon <v> -lat <v> -d <v>` in this order, or nothing to be asked.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },
}

/// How a command ended. Every variant is a successful exit.
#[derive(Debug)]
pub enum Outcome {
    /// Arguments were rejected and the usage text was printed.
    Usage(UsageError),
    /// Piped input ended mid-prompt; nothing was searched.
    InputClosed(InputClosed),
    Searched(Report),
}

impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::Area => Mode::Area,
            Command::Around { .. } => Mode::Around,
        }
    }

    /// Run the command. Prompts go through `prompter`, results and the
    /// usage text go to `out`.
    pub fn execute<W: Write>(
        &self,
        prompter: &mut dyn Prompter,
        source: &dyn AirportSource,
        out: &mut W,
    ) -> Result<Outcome> {
        let mode = match self {
            Command::Area => Mode::Area,
            Command::Around { args } => match input::parse_radius_args(args.as_slice()) {
                Ok(RadiusArgs::Interactive) => Mode::Around,
                Ok(RadiusArgs::Given(area)) => {
                    return Ok(Outcome::Searched(pipeline::run(area, source, out)?));
                }
                Err(e) => {
                    log::debug!("rejected arguments: {}", e);
                    writeln!(out, "\n{}", input::USAGE)?;
                    return Ok(Outcome::Usage(e));
                }
            },
        };
        let area = match pipeline::collect(mode, prompter) {
            Ok(area) => area,
            Err(e) => match e.downcast::<InputClosed>() {
                Ok(closed) => {
                    log::warn!("{}", closed);
                    writeln!(out, "{}", NO_RESULTS)?;
                    return Ok(Outcome::InputClosed(closed));
                }
                Err(e) => return Err(e),
            },
        };
        Ok(Outcome::Searched(pipeline::run(area, source, out)?))
    }
}
