//! Advisory validation of raw candidates.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{Error, ProviderName, ThemeName, is_valid_config_shape};

/// Message reported when a candidate fails the shape check.
pub(crate) const SHAPE_ERROR: &str =
    "Invalid configuration: expected an object with string `version` and `name` fields";

/// Inspect a raw candidate and describe every problem found.
///
/// An empty list means the candidate is valid. A shape failure is reported
/// alone; past that gate every check runs regardless of earlier failures.
pub fn validate_config(candidate: &Value) -> Vec<String> {
    if !is_valid_config_shape(candidate) {
        return vec![SHAPE_ERROR.to_string()];
    }
    let Some(fields) = candidate.as_object() else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if let Some(version) = fields.get("version")
        && !version.is_string()
    {
        errors.push(format!("version must be a string, got {}", describe(version)));
    }

    if let Some(Value::Object(providers)) = fields.get("providers") {
        for name in providers.keys() {
            if name.parse::<ProviderName>().is_err() {
                errors.push(format!("Unknown provider: {}", name));
            }
        }
        check_theme(providers, &mut errors);
        check_toast(providers, &mut errors);
        check_modal(providers, &mut errors);
    }
    errors
}

/// Fold a list of validation messages into a single error, or `Ok` when empty.
pub fn validation_error(path: Option<&Path>, errors: &[String]) -> Result<(), Error> {
    if errors.is_empty() {
        return Ok(());
    }
    Err(Error::Validation {
        path: path.map(Path::to_path_buf),
        message: errors.join("\n"),
    })
}

/// Look up `providers.<provider>.<field>` when the provider record is an object.
fn provider_field<'a>(providers: &'a Map<String, Value>, provider: &str, field: &str) -> Option<&'a Value> {
    providers.get(provider)?.as_object()?.get(field)
}

/// `theme.defaultTheme` must name a built-in theme.
fn check_theme(providers: &Map<String, Value>, errors: &mut Vec<String>) {
    if let Some(theme) = provider_field(providers, "theme", "defaultTheme") {
        let known = theme
            .as_str()
            .is_some_and(|t| t.parse::<ThemeName>().is_ok());
        if !known {
            errors.push(format!("Invalid theme: {}", describe(theme)));
        }
    }
}

/// `toast.maxToasts` must be at least 1 and `toast.defaultDuration` non-negative.
fn check_toast(providers: &Map<String, Value>, errors: &mut Vec<String>) {
    if let Some(max) = provider_field(providers, "toast", "maxToasts")
        && !at_least(max, 1.0)
    {
        errors.push(format!(
            "maxToasts must be a number greater than or equal to 1, got {}",
            describe(max)
        ));
    }
    if let Some(duration) = provider_field(providers, "toast", "defaultDuration")
        && !at_least(duration, 0.0)
    {
        errors.push(format!(
            "defaultDuration must be a non-negative number, got {}",
            describe(duration)
        ));
    }
}

/// `modal.maxModals` must be at least 1.
fn check_modal(providers: &Map<String, Value>, errors: &mut Vec<String>) {
    if let Some(max) = provider_field(providers, "modal", "maxModals")
        && !at_least(max, 1.0)
    {
        errors.push(format!(
            "maxModals must be a number greater than or equal to 1, got {}",
            describe(max)
        ));
    }
}

/// True when `value` is a number no smaller than `min`.
fn at_least(value: &Value, min: f64) -> bool {
    value.as_f64().is_some_and(|n| n >= min)
}

/// Strings render bare; everything else renders as JSON.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
