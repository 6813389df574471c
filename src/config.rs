//! Settings of the explain formatter.
//!
//! [`ExplainConfig::default`] is what an interactive terminal wants.
//! [`ExplainConfig::from_env`] layers the `KIEXPLAIN_*` environment variables
//! (and `NO_COLOR`) on top of that.

use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::formatter::common::{color::ColorSetting, render::DEFAULT_RULE_WIDTH};

pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(20);

pub const COLOR_VAR: &str = "KIEXPLAIN_COLOR";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const THROTTLE_VAR: &str = "KIEXPLAIN_THROTTLE_MS";
pub const RULE_WIDTH_VAR: &str = "KIEXPLAIN_RULE_WIDTH";
pub const BROWSE_VAR: &str = "KIEXPLAIN_BROWSE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color setting {0:?}, expected one of auto, always, never")]
    InvalidColor(String),
    #[error("invalid browse mode {0:?}, expected one of interactive, all, off")]
    InvalidBrowseMode(String),
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// What happens with the failures once a run stopped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    /// Prompt for failures to look at until the user quits.
    #[default]
    Interactive,
    /// Print the details of every failure without asking.
    All,
    /// Leave the failures alone.
    Off,
}

impl FromStr for BrowseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(BrowseMode::Interactive),
            "all" => Ok(BrowseMode::All),
            "off" | "none" => Ok(BrowseMode::Off),
            _ => Err(ConfigError::InvalidBrowseMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainConfig {
    pub color: ColorSetting,
    /// Pause after every passed or failed example.
    pub throttle: Duration,
    pub rule_width: usize,
    pub browse: BrowseMode,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            color: ColorSetting::default(),
            throttle: DEFAULT_THROTTLE,
            rule_width: DEFAULT_RULE_WIDTH,
            browse: BrowseMode::default(),
        }
    }
}

impl ExplainConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| env::var(var).ok())
    }

    /// Build a config from a variable lookup, unset variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // NO_COLOR only counts when set to something, see https://no-color.org
        if lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty()) {
            config.color = ColorSetting::Never;
        }
        if let Some(value) = lookup(COLOR_VAR) {
            config.color = value.parse()?;
        }
        if let Some(value) = lookup(THROTTLE_VAR) {
            config.throttle = Duration::from_millis(parse_number(THROTTLE_VAR, &value)?);
        }
        if let Some(value) = lookup(RULE_WIDTH_VAR) {
            config.rule_width = parse_number(RULE_WIDTH_VAR, &value)?;
        }
        if let Some(value) = lookup(BROWSE_VAR) {
            config.browse = value.parse()?;
        }

        tracing::debug!(?config, "loaded explain config");
        Ok(config)
    }
}

fn parse_number<N: FromStr>(var: &'static str, value: &str) -> Result<N, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
