use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
///
/// Every section is optional; a missing file yields the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    ///
    /// Comma-separated directives, each a bare level (`warn`) or
    /// `target=level` (`kinchart=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bar chart geometry, in SVG user units
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub title_size: u32,
    pub label_size: u32,
    pub bar_width: u32,
    /// Horizontal distance between the left edges of neighbouring bars
    pub bar_pitch: u32,
    /// Space left of the first bar
    pub bar_margin: u32,
    /// Height of the tallest bar
    pub max_bar_height: u32,
    /// y coordinate the bars stand on
    pub baseline: u32,
    /// y coordinate of the entity labels under the bars
    pub label_baseline: u32,
    pub plot_height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 400,
            title_size: 24,
            label_size: 14,
            bar_width: 50,
            bar_pitch: 75,
            bar_margin: 25,
            max_bar_height: 200,
            baseline: 250,
            label_baseline: 270,
            plot_height: 300,
        }
    }
}

const CONFIG_ENV: &str = "KINCHART_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "kinchart.toml";

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in KINCHART_CONFIG environment variable (must exist)
    /// 2. ./kinchart.toml in current directory (optional)
    ///
    /// Falls back to defaults when neither is present.
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        let config_path = match std::env::var(CONFIG_ENV) {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !is_log_filter(&self.logging.level) {
            anyhow::bail!("logging.level is not a valid log filter: {}", self.logging.level);
        }

        let chart = &self.chart;
        for (name, value) in [
            ("canvas_width", chart.canvas_width),
            ("canvas_height", chart.canvas_height),
            ("title_size", chart.title_size),
            ("label_size", chart.label_size),
            ("bar_width", chart.bar_width),
            ("bar_pitch", chart.bar_pitch),
            ("max_bar_height", chart.max_bar_height),
            ("plot_height", chart.plot_height),
        ] {
            if value == 0 {
                anyhow::bail!("chart.{} must be greater than 0", name);
            }
        }

        if chart.bar_width > chart.bar_pitch {
            anyhow::bail!("chart.bar_width must not exceed chart.bar_pitch");
        }

        if chart.max_bar_height > chart.baseline {
            anyhow::bail!("chart.max_bar_height must not exceed chart.baseline");
        }

        Ok(())
    }
}

/// Accept `env_logger` filter directives whose levels are all known.
fn is_log_filter(filter: &str) -> bool {
    let directives = filter.split('/').next().unwrap_or_default();
    let mut seen = false;
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let level = match directive.split_once('=') {
            Some((target, level)) if !target.trim().is_empty() => level.trim(),
            Some(_) => return false,
            None => directive,
        };
        if level.parse::<log::LevelFilter>().is_err() {
            return false;
        }
        seen = true;
    }
    seen
}
