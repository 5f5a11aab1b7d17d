//! Durable backing stores for the invoice counter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::InvoiceError;
use crate::config::AppConfig;

/// Storage for the single invoice counter value.
///
/// Implementations must make `save` all-or-nothing: after a failed save the
/// previous value is still what `load` returns.
pub trait CounterStore {
    /// Raw stored text, or `None` if the store has never been written.
    fn load(&self) -> Result<Option<String>, InvoiceError>;

    /// Persist `value` as decimal ASCII, replacing any previous content.
    fn save(&mut self, value: u64) -> Result<(), InvoiceError>;
}

/// Counter stored as a text file, e.g. `<data dir>/invoice_counter.txt`.
#[derive(Debug, Clone)]
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the counter path of `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.counter_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CounterStore for FileCounterStore {
    fn load(&self) -> Result<Option<String>, InvoiceError> {
        self.ensure_parent_dir()?;
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                tracing::debug!(path = %self.path.display(), "read invoice counter");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, value: u64) -> Result<(), InvoiceError> {
        self.ensure_parent_dir()?;
        // Write-then-rename keeps the old value intact if the write fails midway.
        let tmp = self.temp_path();
        fs::write(&tmp, value.to_string())?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!(path = %self.path.display(), value, "wrote invoice counter");
        Ok(())
    }
}

/// In-memory counter store with injectable failures, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    content: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryCounterStore {
    /// Empty store, as on first launch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the given raw text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Make every `load` fail with an I/O error.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `save` fail with an I/O error.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current raw content.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl CounterStore for MemoryCounterStore {
    fn load(&self) -> Result<Option<String>, InvoiceError> {
        if self.fail_reads {
            return Err(io::Error::other("simulated read failure").into());
        }
        Ok(self.content.clone())
    }

    fn save(&mut self, value: u64) -> Result<(), InvoiceError> {
        if self.fail_writes {
            return Err(io::Error::other("simulated write failure").into());
        }
        self.content = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}
