//! The resolved configuration and the lookups consumers depend on.

use std::{collections::BTreeMap, fmt::Write as _};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::{ProviderName, ProviderSettings, Providers, defaults, raw::RawConfig};

/// Flags controlling which optional component variants are bundled.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Include animated component variants.
    pub include_animations: bool,
    /// Include glassmorphic component variants.
    pub include_glassmorphic: bool,
    /// Restrict the bundle to these components when set.
    pub include: Option<Vec<String>>,
    /// Drop these components from the bundle when set.
    pub exclude: Option<Vec<String>>,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            include_animations: true,
            include_glassmorphic: true,
            include: None,
            exclude: None,
        }
    }
}

/// Packaging flags consumed by external build tooling.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Enable tree-shaking of unused components.
    pub tree_shaking: bool,
    /// Emit CSS custom properties.
    pub css_variables: bool,
    /// Emit source maps.
    pub source_maps: bool,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            tree_shaking: true,
            css_variables: true,
            source_maps: false,
        }
    }
}

/// A fully resolved configuration. Every provider record is always present.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Informational version string.
    pub version: String,
    /// Informational configuration name.
    pub name: String,
    /// Per-provider settings.
    pub providers: Providers,
    /// Component inclusion flags.
    pub components: Components,
    /// Build flags.
    pub build: Build,
    /// CSS variable overrides, keyed by variable name.
    pub custom_variables: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION.to_string(),
            name: defaults::NAME.to_string(),
            providers: Providers::default(),
            components: Components::default(),
            build: Build::default(),
            custom_variables: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Overlay a raw candidate onto this configuration, using current values as defaults.
    pub fn overlay(&self, candidate: &Value) -> Self {
        RawConfig::from_value(candidate).apply_over(self)
    }

    /// Whether the provider called `name` is enabled. Unknown names report `true`.
    pub fn is_provider_enabled(&self, name: &str) -> bool {
        name.parse::<ProviderName>()
            .map(|p| self.is_enabled(p))
            .unwrap_or(true)
    }

    /// Whether `provider` is enabled.
    pub fn is_enabled(&self, provider: ProviderName) -> bool {
        self.providers.get(provider).enabled()
    }

    /// Borrow the settings record for `provider`.
    pub fn provider_settings(&self, provider: ProviderName) -> ProviderSettings<'_> {
        self.providers.get(provider)
    }

    /// Borrow the settings record for the provider called `name`, if it is a known provider.
    pub fn provider_settings_by_name(&self, name: &str) -> Option<ProviderSettings<'_>> {
        name.parse().ok().map(|p| self.providers.get(p))
    }

    /// Providers whose `enabled` flag is set, in canonical order.
    pub fn enabled_providers(&self) -> Vec<ProviderName> {
        ProviderName::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    /// Serialize into the candidate form accepted by [`crate::merge_config`].
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Render the configuration as an indented tree for diagnostics.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ignored = writeln!(out, "{} {}", self.name, self.version);
        if let Value::Object(fields) = self.to_value() {
            for (key, value) in fields
                .iter()
                .filter(|(k, _)| *k != "name" && *k != "version")
            {
                dump_value(&mut out, key, value, 1);
            }
        }
        out
    }
}

/// Append one `key: value` line, or a header plus nested lines for containers.
fn dump_value(out: &mut String, key: &str, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(fields) if fields.is_empty() => {
            let _ignored = writeln!(out, "{indent}{key}: {{}}");
        }
        Value::Object(fields) => {
            let _ignored = writeln!(out, "{indent}{key}");
            for (k, v) in fields {
                dump_value(out, k, v, depth + 1);
            }
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(", ");
            let _ignored = writeln!(out, "{indent}{key}: [{joined}]");
        }
        other => {
            let _ignored = writeln!(out, "{indent}{key}: {}", scalar_text(other));
        }
    }
}

/// Render a scalar without JSON quoting for strings.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Log the resolved configuration structure at `info` level.
pub fn debug_config(config: &Config) {
    info!(
        name = %config.name,
        version = %config.version,
        enabled = ?config.enabled_providers(),
        "resolved configuration\n{}",
        config.dump()
    );
}
