use anyhow::{Context, Result};
use clap::Parser;
use logger_core::{
    setup_diagnostics, Logger, LoggerConfig, LoggerError, LoggerRegistry, Payload, Severity,
    SeverityInput,
};
use serde_json::Value;
use std::sync::Arc;

/// Writes a single record through a named logger.
#[derive(Parser)]
struct Args {
    /// Minimum severity (number or name); falls back to LOG_THRESHOLD
    #[arg(short, long)]
    threshold: Option<String>,
    /// Logger name; falls back to LOGGER_NAME
    #[arg(short, long)]
    name: Option<String>,
    /// Severity of the record
    #[arg(short, long, default_value = "info")]
    level: String,
    #[arg(short, long)]
    file: String,
    #[arg(short, long, default_value = "")]
    method: String,
    #[arg(short = 'M', long, default_value = "")]
    message: String,
    /// Payload line; parsed as JSON when valid, printed verbatim otherwise
    #[arg(short, long)]
    output: Option<String>,
    /// Emit the crate's own tracing diagnostics on stderr
    #[arg(long)]
    diagnostics: bool,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = LoggerConfig::from_env().context("Invalid logger environment")?;
    if let Some(threshold) = &args.threshold {
        config.threshold = SeverityInput::parse(threshold).context("Invalid --threshold")?;
    }
    if let Some(name) = args.name {
        config = config.with_name(name);
    }

    if args.diagnostics {
        setup_diagnostics(Severity::Debug)?;
    }

    let registry = LoggerRegistry::new();
    let (logger, level) =
        resolve_logger(&registry, config, &args.level).context("Cannot prepare logger")?;

    let payload = args.output.map(|raw| match serde_json::from_str::<Value>(&raw) {
        Ok(value) => Payload::Json(value),
        Err(_) => Payload::Text(raw),
    });

    logger.write(level, &args.file, &args.method, &args.message, payload);
    Ok(())
}

/// Registers the configured logger and parses the record level.
fn resolve_logger(
    registry: &LoggerRegistry,
    config: LoggerConfig,
    level: &str,
) -> Result<(Arc<Logger>, Severity), LoggerError> {
    let level = SeverityInput::parse(level)?.resolve();
    let name = config.registry_name().to_string();
    registry.get_or_create(config);
    let logger = registry.lookup(&name)?;
    Ok((logger, level))
}
