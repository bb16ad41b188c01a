use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_DATE_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: LevelFilter,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_target")]
    pub target: LogTarget,

    /// Extra `env_logger` directives, e.g. `spider_fs=debug`
    #[serde(default)]
    pub filters: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            date_format: default_date_format(),
            target: default_target(),
            filters: None,
        }
    }
}

fn default_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_date_format() -> String {
    String::from(DEFAULT_DATE_FORMAT)
}

fn default_target() -> LogTarget {
    LogTarget::Stderr
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    Stderr,
    Stdout,
}

impl From<LogTarget> for env_logger::Target {
    fn from(source: LogTarget) -> Self {
        match source {
            LogTarget::Stderr => Self::Stderr,
            LogTarget::Stdout => Self::Stdout,
        }
    }
}
