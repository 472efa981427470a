use std::env;
use std::time::Duration;

use log::debug;

use crate::engine::{Layout, RuleSet};
use crate::errors::ConfigError;

pub const RULES_VAR: &str = "CHESS_RULES";
pub const KNIGHTS_VAR: &str = "CHESS_KNIGHTS";
pub const TYPING_TICK_VAR: &str = "TYPING_COUNTDOWN_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rules: RuleSet,
    pub layout: Layout,
    /// Pause between the `3`, `2`, `1` of the typing countdown.
    pub typing_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules: RuleSet::Permissive,
            layout: Layout::default(),
            typing_tick: Duration::from_secs(1),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Builds a config from `(name, value)` pairs; unknown names are ignored
    /// and missing ones keep their defaults.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        for (name, value) in vars {
            let value = value.as_ref().trim();
            match name.as_ref() {
                RULES_VAR => {
                    config.rules = match value.to_ascii_lowercase().as_str() {
                        "permissive" => RuleSet::Permissive,
                        "standard" => RuleSet::Standard,
                        _ => return Err(ConfigError::UnknownRules(value.to_string())),
                    }
                }
                KNIGHTS_VAR => {
                    config.layout.with_knights = parse_bool(KNIGHTS_VAR, value)?;
                }
                TYPING_TICK_VAR => {
                    let millis = value.parse().map_err(|_| ConfigError::NotADuration {
                        name: TYPING_TICK_VAR,
                        value: value.to_string(),
                    })?;
                    config.typing_tick = Duration::from_millis(millis);
                }
                _ => {}
            }
        }
        debug!("Loaded {config:?}");
        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::NotABool {
            name,
            value: value.to_string(),
        }),
    }
}
