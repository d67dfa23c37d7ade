//! unit-converter CLI
//!
//! Interactive converter by default; `convert` for one-shot use.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use unit_converter::error::Result;
use unit_converter::logging::{LogConfig, init_logging};
use unit_converter::report::{format_report, run_conversion};
use unit_converter::tui;
use unit_converter::types::{Direction, Domain, OutputFormat};

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(about = "Convert weight, distance and temperature")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tab shown when the interactive converter starts
    #[arg(long, value_enum, default_value = "weight")]
    tab: DomainArg,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log file (default: platform data directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert once and print the result (no interface)
    Convert {
        /// Unit domain
        #[arg(value_enum)]
        domain: DomainArg,

        /// Use the backward direction (e.g. pounds to kilograms)
        #[arg(long)]
        backward: bool,

        /// Single value to convert
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,

        /// Comma-separated values to convert
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DomainArg {
    Weight,
    Distance,
    Temperature,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Weight => Domain::Weight,
            DomainArg::Distance => Domain::Distance,
            DomainArg::Temperature => Domain::Temperature,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is best-effort: the converter works without it.
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.log_file);
    match init_logging(&log_config) {
        Ok(path) => debug!(path = %path.display(), "logging initialized"),
        Err(e) => eprintln!("Note: logging disabled: {}", e),
    }

    let result = match cli.command {
        None => tui::run(cli.tab.into()),
        Some(Commands::Convert {
            domain,
            backward,
            value,
            values,
            format,
        }) => cmd_convert(
            domain.into(),
            backward,
            value.as_deref(),
            values.as_deref(),
            format.into(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_convert(
    domain: Domain,
    backward: bool,
    value: Option<&str>,
    values: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let direction = if backward {
        Direction::Backward
    } else {
        Direction::Forward
    };
    info!(%domain, ?direction, "one-shot conversion");

    let report = run_conversion(domain, direction, value, values);
    let output = format_report(&report, format)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
