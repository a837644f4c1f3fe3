//! Permissive merge of candidate values over the built-in defaults.

use serde_json::Value;

use crate::{Config, raw::RawConfig};

/// Produce a fully populated configuration by overlaying `candidate` onto the defaults.
///
/// Total: any input yields a usable configuration. Absent fields inherit the
/// default; mistyped fields are logged and skipped; values of the right type
/// are kept even when validation would flag them.
pub fn merge_config(candidate: &Value) -> Config {
    RawConfig::from_value(candidate).into_config()
}

/// Shallow guard deciding whether a discovered value may be treated as a candidate.
///
/// Accepts any object or array whose `version` and `name`, when present, are
/// strings. Provider sub-fields are not inspected.
pub fn is_valid_config_shape(value: &Value) -> bool {
    match value {
        Value::Object(fields) => ["version", "name"]
            .iter()
            .all(|k| fields.get(*k).is_none_or(Value::is_string)),
        Value::Array(_) => true,
        _ => false,
    }
}
