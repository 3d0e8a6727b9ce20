//! Command line flags and environment configuration

use clap::Parser;
use std::{env, fmt, str::FromStr};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "discount-cart")]
#[command(about = "Interactive shopping cart with category and promotion discounts")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print menus or prompts, only results
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit log records as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Output format of log records on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "CART_LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub show_prompts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            show_prompts: true,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the `CART_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let log_format = match lookup("CART_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };
        let quiet = lookup("CART_QUIET")
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = Config {
            log_level: lookup("CART_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format,
            show_prompts: !quiet,
        };
        config.validate()?;
        Ok(config)
    }

    /// Command line flags win over the environment.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if args.verbose {
            self.log_level = "debug".to_string();
        }
        if args.quiet {
            self.show_prompts = false;
        }
        if args.log_json {
            self.log_format = LogFormat::Json;
        }
        self
    }

    /// Each directive is either a bare level (`info`) or `target=level`.
    /// A bare word that is not a level would otherwise be taken as a target.
    fn validate(&self) -> anyhow::Result<()> {
        for directive in self.log_level.split(',').map(str::trim) {
            if directive.is_empty() {
                return Err(anyhow::anyhow!("CART_LOG_LEVEL has an empty directive"));
            }
            if !directive.contains('=') && directive.parse::<LevelFilter>().is_err() {
                return Err(anyhow::anyhow!(
                    "CART_LOG_LEVEL has an unknown level '{}'",
                    directive
                ));
            }
        }

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            anyhow::anyhow!("CART_LOG_LEVEL '{}' is not a valid filter: {}", self.log_level, e)
        })?;
        Ok(())
    }
}
