//! Payoff Engine Binary
//!
//! Analyses the expiration payoff of a position file and prints a JSON report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin payoff-engine -- position.csv
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PAYOFF_CONFIG`: Path to a YAML config file (default: built-in defaults)
//! - `PAYOFF_POSITION_FILE`: Position CSV used when no path argument is given
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use payoff_engine::config::{Config, load_config};
use payoff_engine::telemetry::init_telemetry;
use payoff_engine::{
    AnalyzePositionUseCase, CsvPositionLoader, EngineError, ErrorCode, JsonReportWriter,
    render_failure,
};

const USAGE: &str = "Usage: payoff-engine [POSITION_CSV]

Reads legs from POSITION_CSV (or $PAYOFF_POSITION_FILE) with columns
Type, Strike, Premium, Volume, Position and prints the payoff report as JSON.";

fn main() -> ExitCode {
    load_dotenv();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let exit_code = err
                .downcast_ref::<EngineError>()
                .map_or(ErrorCode::InternalError.exit_code(), EngineError::exit_code);
            tracing::error!(error = %format!("{err:#}"), exit_code, "Payoff analysis failed");
            eprintln!("{}", render_failure(&err));
            ExitCode::from(exit_code)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let Some(position_file) = position_file() else {
        eprintln!("{USAGE}");
        return Err(EngineError::new(
            ErrorCode::PositionSourceUnavailable,
            "No position file given; pass a CSV path or set PAYOFF_POSITION_FILE",
        )
        .into());
    };
    if position_file.as_os_str() == "-h" || position_file.as_os_str() == "--help" {
        println!("{USAGE}");
        return Ok(());
    }

    let config = parse_config().map_err(EngineError::from)?;
    init_telemetry(&config.observability.logging)
        .map_err(|e| EngineError::internal(format!("Failed to initialize tracing: {e}")))?;

    tracing::info!("Starting payoff engine");
    log_config(&config);

    let use_case = AnalyzePositionUseCase::new(
        CsvPositionLoader::new(&position_file),
        config.analysis.settings(),
    );
    let mut writer = JsonReportWriter::stdout();
    use_case
        .execute_into(&mut writer)
        .map_err(EngineError::from)
        .with_context(|| format!("Failed to analyze {}", position_file.display()))?;

    tracing::info!("Payoff report written");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Load .env file from any ancestor directory.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Position file from the first argument, falling back to `PAYOFF_POSITION_FILE`.
fn position_file() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("PAYOFF_POSITION_FILE"))
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Load `PAYOFF_CONFIG` when set, built-in defaults otherwise.
fn parse_config() -> Result<Config, payoff_engine::config::ConfigError> {
    match std::env::var("PAYOFF_CONFIG") {
        Ok(path) if !path.is_empty() => load_config(path),
        _ => Ok(Config::default()),
    }
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        contract_multiplier = config.analysis.contract_multiplier,
        plot_padding = %config.analysis.plot_padding,
        sentinel_scale = config.analysis.sentinel_scale,
        lower_tail = ?config.analysis.lower_tail,
        "Configuration loaded"
    );
}
