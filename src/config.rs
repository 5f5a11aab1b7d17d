//! Application configuration: where the counter lives and draft defaults.

use std::ffi::OsString;
use std::path::PathBuf;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "INVOICER_DATA_DIR";

/// Default counter file name inside the data directory.
pub const COUNTER_FILE: &str = "invoice_counter.txt";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application-private data directory holding the counter file.
    pub data_dir: PathBuf,
    /// Counter file name, relative to `data_dir`.
    pub counter_file: String,
    /// Currency code for new drafts.
    pub default_currency: String,
    /// Tax rate percentage for new line items.
    pub default_tax_rate: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            counter_file: COUNTER_FILE.into(),
            default_currency: "USD".into(),
            default_tax_rate: dec!(18),
        }
    }
}

impl AppConfig {
    /// Defaults, with the data directory taken from `INVOICER_DATA_DIR` if set.
    pub fn from_env() -> Self {
        Self::default().with_data_dir_override(std::env::var_os(DATA_DIR_ENV))
    }

    /// Replace the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Full path of the counter file.
    pub fn counter_path(&self) -> PathBuf {
        self.data_dir.join(&self.counter_file)
    }

    fn with_data_dir_override(self, value: Option<OsString>) -> Self {
        match value {
            Some(dir) if !dir.is_empty() => self.with_data_dir(dir),
            _ => self,
        }
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "Invoicer", "Invoicer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
