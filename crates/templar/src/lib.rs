//! Command implementations for the `templar` binary.
//!
//! Each command renders its output to a `String` so the binary only decides
//! where it goes.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use templar_config::{
    Config, ConfigContext, EnvAmbient, Error, FileAmbient, ProviderName, ThemeName,
    load_candidate_from_path, resolve_config_path, validate_config, validation_error,
};
use tracing::debug;

/// Outcome of `templar check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// File that was checked.
    pub path: PathBuf,
    /// Validation messages; empty when the file is valid.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// True when validation found nothing.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The checked path, or every problem folded into one validation error.
    pub fn into_result(self) -> Result<PathBuf, Error> {
        validation_error(Some(&self.path), &self.errors)?;
        Ok(self.path)
    }
}

/// Validate the candidate at `path` (or the resolved default location).
///
/// Read and parse failures are errors; validation problems are reported in the result.
pub fn check(path: Option<&Path>) -> Result<CheckReport, Error> {
    let path = resolve_config_path(path)?;
    let candidate = load_candidate_from_path(&path)?;
    let errors = validate_config(&candidate);
    debug!(path = %path.display(), problems = errors.len(), "checked config");
    Ok(CheckReport { path, errors })
}

/// Build the context the read-only commands resolve through.
///
/// A config file found by the usual resolution policy is the ambient source;
/// otherwise the `TEMPLAR_CONFIG` environment variable is.
pub fn context_for(path: Option<&Path>) -> ConfigContext {
    match resolve_config_path(path) {
        Ok(found) => {
            debug!(path = %found.display(), "using config file");
            ConfigContext::with_ambient(FileAmbient::new(found))
        }
        Err(e) => {
            debug!(reason = %e, "no config file; falling back to environment");
            ConfigContext::with_ambient(EnvAmbient::default())
        }
    }
}

/// Render the resolved configuration as a tree or as pretty JSON.
pub fn dump(cfg: &Config, json: bool) -> String {
    if json {
        let mut out = serde_json::to_string_pretty(&cfg.to_value()).unwrap_or_default();
        out.push('\n');
        out
    } else {
        cfg.dump()
    }
}

/// Render one provider's enabled flag and settings.
pub fn provider(cfg: &Config, name: &str) -> Result<String, Error> {
    let Some(settings) = cfg.provider_settings_by_name(name) else {
        let known = ProviderName::ALL.map(ProviderName::as_str).join(", ");
        return Err(Error::Validation {
            path: None,
            message: format!("Unknown provider: {} (expected one of: {})", name, known),
        });
    };
    let body = serde_json::to_string_pretty(&settings.to_value()).unwrap_or_default();
    Ok(format!(
        "{}: {}\n{}\n",
        settings.name(),
        if settings.enabled() { "enabled" } else { "disabled" },
        body
    ))
}

/// List the built-in themes, marking the configured default.
pub fn themes(cfg: &Config) -> String {
    let current = cfg.providers.theme.default_theme();
    let mut out = String::new();
    for t in ThemeName::ALL {
        let marker = if Some(t) == current { "*" } else { " " };
        let _ignored = writeln!(out, "{} {}", marker, t);
    }
    out
}
