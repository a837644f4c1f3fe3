//! Read configuration candidates from disk.

use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use crate::{Config, Error, defaults::CONFIG_FILE_NAME, error::excerpt_at, merge_config};

/// Source syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON, used by `.mourn` and `.json` files.
    Json,
    /// RON, used by `.ron` files.
    Ron,
}

impl Format {
    /// Pick the format from a file's name.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if path.file_name() == Some(OsStr::new(CONFIG_FILE_NAME)) {
            return Ok(Self::Json);
        }
        match path.extension().and_then(OsStr::to_str) {
            Some("mourn" | "json") => Ok(Self::Json),
            Some("ron") => Ok(Self::Ron),
            _ => Err(Error::Read {
                path: Some(path.to_path_buf()),
                message: "Unsupported config format (expected .mourn, .json or .ron)".to_string(),
            }),
        }
    }
}

/// Parse `source` into a raw candidate value without merging.
pub fn load_candidate_from_str(
    source: &str,
    format: Format,
    path: Option<&Path>,
) -> Result<Value, Error> {
    match format {
        Format::Json => serde_json::from_str(source).map_err(|e| {
            let (line, col) = (e.line().max(1), e.column().max(1));
            parse_error(source, path, line, col, e.to_string())
        }),
        Format::Ron => ron::from_str(source).map_err(|e| {
            let at = e.span.start;
            parse_error(source, path, at.line.max(1), at.col.max(1), e.code.to_string())
        }),
    }
}

/// Build a located parse error with an excerpt of `source`.
fn parse_error(
    source: &str,
    path: Option<&Path>,
    line: usize,
    col: usize,
    message: String,
) -> Error {
    Error::Parse {
        path: path.map(Path::to_path_buf),
        line,
        col,
        message,
        excerpt: excerpt_at(source, line, col),
    }
}

/// Read and parse the file at `path` into a raw candidate value.
pub fn load_candidate_from_path(path: &Path) -> Result<Value, Error> {
    let format = Format::from_path(path)?;
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), ?format, "read config candidate");
    load_candidate_from_str(&source, format, Some(path))
}

/// Parse `source` and merge it over the defaults.
pub fn load_from_str(source: &str, format: Format) -> Result<Config, Error> {
    Ok(merge_config(&load_candidate_from_str(source, format, None)?))
}

/// Load a fully resolved `Config` from the file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    Ok(merge_config(&load_candidate_from_path(path)?))
}

/// Determine the per-user config path (`~/.templar/config.mourn`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".templar");
    p.push("config.mourn");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `./.mourn` when it exists.
/// 3) Else use `~/.templar/config.mourn` when it exists.
/// 4) Else return a "no config found" error.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(cwd) = env::current_dir() {
        let local = cwd.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(local);
        }
    }

    let preferred = default_config_path();
    if preferred.exists() {
        return Ok(preferred);
    }

    Err(Error::Read {
        path: Some(preferred),
        message: format!(
            "No config found. Create ./{} or ~/.templar/config.mourn",
            CONFIG_FILE_NAME
        ),
    })
}
