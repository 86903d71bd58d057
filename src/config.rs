//! Editor preferences parsed from environment variables.

use std::env::VarError;
use std::str::FromStr;

use crate::consts::{DEFAULT_H_SPACING, DEFAULT_HISTORY_CAPACITY, DEFAULT_PROMPT_ATTEMPTS, DEFAULT_V_SPACING};
use crate::error::ConfigError;

pub const ENV_H_SPACING: &str = "LAYOUT_H_SPACING";
pub const ENV_V_SPACING: &str = "LAYOUT_V_SPACING";
pub const ENV_HISTORY_CAPACITY: &str = "LAYOUT_HISTORY_CAPACITY";
pub const ENV_PROMPT_ATTEMPTS: &str = "LAYOUT_PROMPT_ATTEMPTS";

/// Read-only preference source consulted when a command is prepared.
pub trait Preferences {
    /// Pre-filled answer for the horizontal spacing prompt.
    fn default_h_spacing(&self) -> i32;

    /// Pre-filled answer for the vertical spacing prompt.
    fn default_v_spacing(&self) -> i32;

    /// How many times to re-prompt after non-numeric input.
    fn prompt_attempts(&self) -> u32 {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub h_spacing: i32,
    pub v_spacing: i32,
    pub history_capacity: usize,
    pub prompt_attempts: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            h_spacing: DEFAULT_H_SPACING,
            v_spacing: DEFAULT_V_SPACING,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LAYOUT_H_SPACING`: default 10
    /// - `LAYOUT_V_SPACING`: default 10
    /// - `LAYOUT_HISTORY_CAPACITY`: default 100, must be > 0
    /// - `LAYOUT_PROMPT_ATTEMPTS`: default 3, must be > 0
    ///
    /// # Errors
    ///
    /// `ConfigError` when a variable is set but malformed or not valid UTF-8.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(env_var)
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// `ConfigError` when a looked-up value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_source(|var| Ok(lookup(var)))
    }

    fn from_source<F>(read: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let config = Self {
            h_spacing: parse_i32(ENV_H_SPACING, read(ENV_H_SPACING)?.as_deref(), DEFAULT_H_SPACING)?,
            v_spacing: parse_i32(ENV_V_SPACING, read(ENV_V_SPACING)?.as_deref(), DEFAULT_V_SPACING)?,
            history_capacity: parse_positive(
                ENV_HISTORY_CAPACITY,
                read(ENV_HISTORY_CAPACITY)?.as_deref(),
                DEFAULT_HISTORY_CAPACITY,
            )?,
            prompt_attempts: parse_positive(
                ENV_PROMPT_ATTEMPTS,
                read(ENV_PROMPT_ATTEMPTS)?.as_deref(),
                DEFAULT_PROMPT_ATTEMPTS,
            )?,
        };
        tracing::debug!(?config, "editor config loaded");
        Ok(config)
    }
}

/// Read one process variable. Unset is `None`; a non-UTF-8 value is an error
/// rather than a silent fallback to the default.
fn env_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Parse { var, value: raw.to_string_lossy().into_owned() }),
    }
}

impl Preferences for EditorConfig {
    fn default_h_spacing(&self) -> i32 {
        self.h_spacing
    }

    fn default_v_spacing(&self) -> i32 {
        self.v_spacing
    }

    fn prompt_attempts(&self) -> u32 {
        self.prompt_attempts
    }
}

fn parse_i32(var: &'static str, raw: Option<&str>, default: i32) -> Result<i32, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::Parse { var, value: value.to_string() }),
    }
}

/// Parse a count that must be non-zero. Unset means `default`.
fn parse_positive<T>(var: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    let parsed = match raw {
        None => default,
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Parse { var, value: value.to_string() })?,
    };
    if parsed == T::default() {
        return Err(ConfigError::Zero { var });
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
