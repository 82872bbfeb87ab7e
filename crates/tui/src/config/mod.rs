use clap::Parser;
use engine::Currency;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/budget.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency: Currency,
    pub tick_rate_ms: u64,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            tick_rate_ms: 200,
            log_file: "budget_tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budget_tui", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override display currency (USD or EUR).
    #[arg(long, value_parser = parse_currency)]
    currency: Option<Currency>,
    /// Override the event poll interval in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_currency(value: &str) -> std::result::Result<Currency, String> {
    Currency::try_from(value).map_err(|err| err.to_string())
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

/// Layers defaults, the TOML file, `BUDGET_TUI_*` variables and CLI flags.
pub fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BUDGET_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(tick_rate_ms) = args.tick_rate_ms {
        settings.tick_rate_ms = tick_rate_ms;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::parse_from([
            "budget_tui",
            "--config",
            "does/not/exist.toml",
            "--currency",
            "eur",
            "--tick-rate-ms",
            "50",
            "--log-level",
            "debug",
        ]);
        let settings = load_from(args).unwrap();

        assert_eq!(settings.currency, Currency::Eur);
        assert_eq!(settings.tick_rate_ms, 50);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn unknown_currency_is_rejected_by_the_parser() {
        let parsed = Args::try_parse_from(["budget_tui", "--currency", "gbp"]);
        let err = parsed.unwrap_err().to_string();
        assert!(err.contains("Unsupported currency: GBP"), "{err}");
    }
}
