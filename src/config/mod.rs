pub mod toml_config;

use crate::domain::ports::FormDefaults;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

/// Upper bound for `--split`. The one-shot session walks the split count to
/// the target one increment event at a time, so the flag has to stay within
/// a sane party size.
pub const MAX_SPLIT: u32 = 10_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tipsplit")]
#[command(about = "Split a bill and tip across a party")]
pub struct CliConfig {
    /// Bill amount, as entered (one-shot mode)
    #[arg(long)]
    pub bill: Option<String>,

    /// Tip slider position, 0-100 (snapped down to a whole percent)
    #[arg(long)]
    pub tip: Option<f32>,

    /// Number of people splitting the bill (1-10000)
    #[arg(long)]
    pub split: Option<u32>,

    /// Read form events line-by-line from stdin
    #[arg(long)]
    pub interactive: bool,

    /// Print the form snapshot as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML defaults file
    #[arg(long)]
    pub defaults: Option<String>,

    /// Currency symbol used when rendering amounts
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tip) = self.tip {
            validate_range("tip", tip, 0.0, 100.0)?;
        }
        if let Some(split) = self.split {
            validate_range("split", split, 1, MAX_SPLIT)?;
        }
        if let Some(currency) = &self.currency {
            validate_non_empty_string("currency", currency)?;
        }
        if let Some(defaults) = &self.defaults {
            validate_non_empty_string("defaults", defaults)?;
        }
        Ok(())
    }
}

/// Resolved seed values for a new form: CLI flag > TOML defaults file >
/// built-in defaults (tip 0%, split 1, "$").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub tip_percent: u8,
    pub split_count: u32,
    pub currency: String,
}

impl Settings {
    pub fn from_defaults_file(file: Option<&TomlConfig>) -> Self {
        Self {
            tip_percent: file.map(|f| f.tip_percent()).unwrap_or(0),
            split_count: file.map(|f| f.split_count()).unwrap_or(1),
            currency: file
                .map(|f| f.currency().to_string())
                .unwrap_or_else(|| "$".to_string()),
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = Self::from_defaults_file(file);
        if let Some(currency) = &cli.currency {
            settings.currency = currency.clone();
        }
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_defaults_file(None)
    }
}

impl FormDefaults for Settings {
    fn tip_percent(&self) -> u8 {
        self.tip_percent
    }

    fn split_count(&self) -> u32 {
        self.split_count
    }

    fn currency_symbol(&self) -> &str {
        &self.currency
    }
}
