//! Runtime configuration
//!
//! Loaded from environment variables; invalid values fall back to defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

/// Which missing-ingredient computation a report uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    /// Selected meals considered in isolation
    Simple,
    /// Meals take from the stash in menu order
    #[default]
    Timeline,
}

impl PlanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::Simple => "simple",
            PlanMode::Timeline => "timeline",
        }
    }
}

impl FromStr for PlanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(PlanMode::Simple),
            "timeline" => Ok(PlanMode::Timeline),
            other => Err(format!("unknown plan mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Plan JSON to read; stdin when unset
    pub input_path: Option<PathBuf>,
    pub mode: PlanMode,
}

impl Config {
    pub fn load() -> Self {
        Self {
            input_path: env::var("MENU_UNITS_INPUT_PATH").ok().map(PathBuf::from),
            mode: try_load("MENU_UNITS_MODE"),
        }
    }
}

fn try_load<T>(key: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default");
            T::default()
        }),
        Err(_) => {
            info!("{key} not set, using default");
            T::default()
        }
    }
}
