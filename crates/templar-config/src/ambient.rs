//! Host-injected candidate sources consulted on first read.

use std::{
    env::{self, VarError},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::{
    Error,
    defaults::AMBIENT_ENV_VAR,
    loader::{Format, load_candidate_from_path, load_candidate_from_str},
};

/// A source of a raw candidate configuration supplied by the embedding application.
///
/// `Ok(None)` means the source holds nothing; errors are treated as a failed
/// discovery by the reader and never reach its caller.
#[async_trait]
pub trait Ambient: Send + Sync {
    /// Inspect the source without suspending.
    fn candidate(&self) -> Result<Option<Value>, Error>;

    /// Inspect the source, possibly waiting on I/O.
    async fn load(&self) -> Result<Option<Value>, Error> {
        self.candidate()
    }
}

/// A candidate value handed over directly by the host.
#[derive(Debug, Clone)]
pub struct StaticAmbient(pub Value);

#[async_trait]
impl Ambient for StaticAmbient {
    fn candidate(&self) -> Result<Option<Value>, Error> {
        Ok(Some(self.0.clone()))
    }
}

/// A candidate read from a configuration file. A missing file holds nothing.
#[derive(Debug, Clone)]
pub struct FileAmbient {
    /// File to read.
    path: PathBuf,
}

impl FileAmbient {
    /// Read candidates from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Ambient for FileAmbient {
    fn candidate(&self) -> Result<Option<Value>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_candidate_from_path(&self.path).map(Some)
    }

    async fn load(&self) -> Result<Option<Value>, Error> {
        let format = Format::from_path(&self.path)?;
        let source = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::Read {
                    path: Some(self.path.clone()),
                    message: e.to_string(),
                });
            }
        };
        load_candidate_from_str(&source, format, Some(&self.path)).map(Some)
    }
}

/// A JSON candidate held in an environment variable (`TEMPLAR_CONFIG` by default).
#[derive(Debug, Clone)]
pub struct EnvAmbient {
    /// Variable name to read.
    var: String,
}

impl EnvAmbient {
    /// Read candidates from the variable `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvAmbient {
    fn default() -> Self {
        Self::new(AMBIENT_ENV_VAR)
    }
}

#[async_trait]
impl Ambient for EnvAmbient {
    fn candidate(&self) -> Result<Option<Value>, Error> {
        env_candidate(&self.var, env::var(&self.var))
    }
}

/// Interpret the result of reading variable `var`. Unset or blank holds nothing.
fn env_candidate(var: &str, read: Result<String, VarError>) -> Result<Option<Value>, Error> {
    match read {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => load_candidate_from_str(&raw, Format::Json, None).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::Read {
            path: None,
            message: format!("{}: {}", var, e),
        }),
    }
}
