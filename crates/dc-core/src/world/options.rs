//! Game options and configuration
//!
//! Options are read from an rc-style text file: one or more `OPTIONS=` lines,
//! each a comma separated list of `name`, `!name` or `name:value` entries.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BASELINE_DELAY, DEFAULT_MSG_HISTORY, MAX_PIETY};

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Explicit generator seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Time units per normal turn
    pub baseline_delay: i32,

    /// Piety ceiling used to scale divine protection rolls
    pub max_piety: i32,

    /// Ask before transformations that drop a holy weapon or zero a stat
    pub form_warnings: bool,

    /// Messages kept in the history
    pub msghistory: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            baseline_delay: BASELINE_DELAY,
            max_piety: MAX_PIETY,
            form_warnings: true,
            msghistory: DEFAULT_MSG_HISTORY,
        }
    }
}

impl GameOptions {
    /// Load options from a config file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| OptionsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse_config(&contents)
    }

    /// Parse options from rc-file text
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            } else {
                return Err(OptionsError::Parse(line.to_string()));
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }

        match opt.strip_prefix('!') {
            Some(name) => self.set_bool_option(name, false),
            None => self.set_bool_option(opt, true),
        }
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "form_warnings" => self.form_warnings = value,
            "seed" | "baseline_delay" | "max_piety" | "msghistory" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "seed" => {
                self.seed = match value {
                    "random" | "" => None,
                    _ => Some(value.parse().map_err(|_| invalid())?),
                };
            }
            "baseline_delay" => {
                let delay: i32 = value.parse().map_err(|_| invalid())?;
                if delay <= 0 {
                    return Err(invalid());
                }
                self.baseline_delay = delay;
            }
            "max_piety" => {
                let piety: i32 = value.parse().map_err(|_| invalid())?;
                if piety <= 0 {
                    return Err(invalid());
                }
                self.max_piety = piety;
            }
            "msghistory" => self.msghistory = value.parse().map_err(|_| invalid())?,
            "form_warnings" => {
                self.form_warnings = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string()).map_err(|e| OptionsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Render the options back into rc-file text
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# dungeon crawl transformation options".to_string()];

        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{seed}"));
        }
        lines.push(format!(
            "OPTIONS=baseline_delay:{},max_piety:{}",
            self.baseline_delay, self.max_piety
        ));
        lines.push(format!(
            "OPTIONS={}",
            if self.form_warnings {
                "form_warnings"
            } else {
                "!form_warnings"
            }
        ));
        lines.push(format!("OPTIONS=msghistory:{}", self.msghistory));

        lines.join("\n") + "\n"
    }
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Could not read '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
