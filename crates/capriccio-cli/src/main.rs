//! Parse a feature document and print its structure.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};

use capriccio_cli::config::{CliConfig, LogLevel, OutputFormat};
use capriccio_cli::error::CliError;
use capriccio_cli::input::{Source, load_feature};
use capriccio_cli::logging::init_logging;
use capriccio_cli::output::write_feature;

/// Parse a Gherkin feature document and print its structure.
#[derive(Parser, Debug)]
#[command(name = "capriccio", version, about)]
struct Args {
    /// Feature file to parse, or `-` for stdin.
    path: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Output format (summary, json).
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let feature = load_feature(&Source::from_arg(&args.path))?;
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    write_feature(&mut writer, &feature, config.format)?;
    writer.flush().wrap_err("failed to flush stdout")
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.format))
}
