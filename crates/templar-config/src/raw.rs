use std::collections::BTreeMap;

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Map, Value};
use tracing::warn;

use super::{
    AppearanceSettings, AuthProvider, Build, Components, Config, DefaultSettings,
    LanguageSettings, LoadingProvider, ModalProvider, NotificationSettings, Providers,
    SettingsProvider, ThemeProvider, ToastProvider,
};

// ===== FIELD WRAPPER FOR LENIENT VALUES =====

/// Lenient wrapper used when deserializing candidate values.
///
/// Purpose
/// - An omitted field (or explicit `null`) is not provided.
/// - A value of the expected type is provided.
/// - A value of any other type is kept aside so the overlay can report and skip it.
///
/// This lets a single malformed field fall back to its default without
/// rejecting the rest of the candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Maybe<T> {
    #[serde(skip)]
    Absent,
    Value(T),
    Invalid(Value),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    /// Resolve to the provided value, or `default` when absent or mistyped.
    pub fn or_default(self, field: &str, default: T) -> T {
        match self.into_option(field) {
            Some(v) => v,
            None => default,
        }
    }

    /// The provided value, logging and discarding one of the wrong type.
    pub fn into_option(self, field: &str) -> Option<T> {
        match self {
            Maybe::Absent | Maybe::Invalid(Value::Null) => None,
            Maybe::Value(v) => Some(v),
            Maybe::Invalid(other) => {
                warn!(field, value = %other, "ignoring config value with unexpected type");
                None
            }
        }
    }
}

/// A nested record, read only from a JSON object.
///
/// Serde's derived struct visitor also accepts sequences and fills fields by
/// position. Any non-object therefore fails here and lands in [`Maybe::Invalid`].
#[derive(Debug, Clone)]
pub struct Record<T>(pub T);

impl<'de, T: DeserializeOwned> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            fields @ Value::Object(_) => {
                T::deserialize(fields).map(Record).map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!("expected an object, got {}", other))),
        }
    }
}

impl<T> Maybe<Record<T>> {
    /// The provided record, logging and discarding anything that is not an object.
    pub fn into_record(self, field: &str) -> Option<T> {
        self.into_option(field).map(|Record(r)| r)
    }
}

// ===== RAW PROVIDERS =====

/// Raw auth provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuth {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub storage_key: Maybe<String>,
    #[serde(default)]
    pub session_timeout: Maybe<f64>,
    #[serde(default)]
    pub persist_session: Maybe<bool>,
}

impl RawAuth {
    fn apply_over(self, base: &AuthProvider) -> AuthProvider {
        let d = base.clone();
        AuthProvider {
            enabled: self.enabled.or_default("auth.enabled", d.enabled),
            storage_key: self.storage_key.or_default("auth.storageKey", d.storage_key),
            session_timeout: self
                .session_timeout
                .or_default("auth.sessionTimeout", d.session_timeout),
            persist_session: self
                .persist_session
                .or_default("auth.persistSession", d.persist_session),
        }
    }
}

/// Raw theme provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTheme {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub default_theme: Maybe<String>,
    #[serde(default)]
    pub attribute: Maybe<String>,
    #[serde(default)]
    pub storage_key: Maybe<String>,
    #[serde(default)]
    pub available_themes: Maybe<Vec<String>>,
    #[serde(default)]
    pub include_custom_themes: Maybe<bool>,
}

impl RawTheme {
    fn apply_over(self, base: &ThemeProvider) -> ThemeProvider {
        let d = base.clone();
        ThemeProvider {
            enabled: self.enabled.or_default("theme.enabled", d.enabled),
            default_theme: self
                .default_theme
                .or_default("theme.defaultTheme", d.default_theme),
            attribute: self.attribute.or_default("theme.attribute", d.attribute),
            storage_key: self
                .storage_key
                .or_default("theme.storageKey", d.storage_key),
            available_themes: self
                .available_themes
                .or_default("theme.availableThemes", d.available_themes),
            include_custom_themes: self
                .include_custom_themes
                .or_default("theme.includeCustomThemes", d.include_custom_themes),
        }
    }
}

/// Raw toast provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToast {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub max_toasts: Maybe<f64>,
    #[serde(default)]
    pub default_duration: Maybe<f64>,
    #[serde(default)]
    pub default_position: Maybe<String>,
}

impl RawToast {
    fn apply_over(self, base: &ToastProvider) -> ToastProvider {
        let d = base.clone();
        ToastProvider {
            enabled: self.enabled.or_default("toast.enabled", d.enabled),
            max_toasts: self.max_toasts.or_default("toast.maxToasts", d.max_toasts),
            default_duration: self
                .default_duration
                .or_default("toast.defaultDuration", d.default_duration),
            default_position: self
                .default_position
                .or_default("toast.defaultPosition", d.default_position),
        }
    }
}

/// Raw loading provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoading {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub default_text: Maybe<String>,
    #[serde(default)]
    pub show_progress: Maybe<bool>,
    #[serde(default)]
    pub spinner_variant: Maybe<String>,
}

impl RawLoading {
    fn apply_over(self, base: &LoadingProvider) -> LoadingProvider {
        let d = base.clone();
        LoadingProvider {
            enabled: self.enabled.or_default("loading.enabled", d.enabled),
            default_text: self
                .default_text
                .or_default("loading.defaultText", d.default_text),
            show_progress: self
                .show_progress
                .or_default("loading.showProgress", d.show_progress),
            spinner_variant: self
                .spinner_variant
                .or_default("loading.spinnerVariant", d.spinner_variant),
        }
    }
}

/// Raw modal provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModal {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub max_modals: Maybe<f64>,
    #[serde(default)]
    pub close_on_overlay_click: Maybe<bool>,
    #[serde(default)]
    pub close_on_escape: Maybe<bool>,
}

impl RawModal {
    fn apply_over(self, base: &ModalProvider) -> ModalProvider {
        let d = base.clone();
        ModalProvider {
            enabled: self.enabled.or_default("modal.enabled", d.enabled),
            max_modals: self.max_modals.or_default("modal.maxModals", d.max_modals),
            close_on_overlay_click: self
                .close_on_overlay_click
                .or_default("modal.closeOnOverlayClick", d.close_on_overlay_click),
            close_on_escape: self
                .close_on_escape
                .or_default("modal.closeOnEscape", d.close_on_escape),
        }
    }
}

// ===== RAW USER SETTINGS =====

/// Raw language preferences overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLanguage {
    #[serde(default)]
    pub code: Maybe<String>,
    #[serde(default)]
    pub direction: Maybe<String>,
}

/// Raw notification preferences overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotifications {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub sound: Maybe<bool>,
    #[serde(default)]
    pub desktop: Maybe<bool>,
}

/// Raw appearance preferences overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppearance {
    #[serde(default)]
    pub theme: Maybe<String>,
    #[serde(default)]
    pub font_size: Maybe<String>,
    #[serde(default)]
    pub reduced_motion: Maybe<bool>,
}

/// Raw `defaultSettings` overlay; each sub-record merges field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDefaultSettings {
    #[serde(default)]
    pub language: Maybe<Record<RawLanguage>>,
    #[serde(default)]
    pub notifications: Maybe<Record<RawNotifications>>,
    #[serde(default)]
    pub appearance: Maybe<Record<RawAppearance>>,
}

impl RawDefaultSettings {
    fn apply_over(self, base: &DefaultSettings) -> DefaultSettings {
        let d = base.clone();
        let language = match self.language.into_record("settings.defaultSettings.language") {
            Some(l) => LanguageSettings {
                code: l.code.or_default("language.code", d.language.code),
                direction: l
                    .direction
                    .or_default("language.direction", d.language.direction),
            },
            None => d.language,
        };
        let notifications = match self
            .notifications
            .into_record("settings.defaultSettings.notifications")
        {
            Some(n) => NotificationSettings {
                enabled: n
                    .enabled
                    .or_default("notifications.enabled", d.notifications.enabled),
                sound: n.sound.or_default("notifications.sound", d.notifications.sound),
                desktop: n
                    .desktop
                    .or_default("notifications.desktop", d.notifications.desktop),
            },
            None => d.notifications,
        };
        let appearance = match self
            .appearance
            .into_record("settings.defaultSettings.appearance")
        {
            Some(a) => AppearanceSettings {
                theme: a.theme.or_default("appearance.theme", d.appearance.theme),
                font_size: a
                    .font_size
                    .or_default("appearance.fontSize", d.appearance.font_size),
                reduced_motion: a
                    .reduced_motion
                    .or_default("appearance.reducedMotion", d.appearance.reduced_motion),
            },
            None => d.appearance,
        };
        DefaultSettings {
            language,
            notifications,
            appearance,
        }
    }
}

/// Raw settings provider overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default)]
    pub enabled: Maybe<bool>,
    #[serde(default)]
    pub storage_key: Maybe<String>,
    #[serde(default)]
    pub default_settings: Maybe<Record<RawDefaultSettings>>,
}

impl RawSettings {
    fn apply_over(self, base: &SettingsProvider) -> SettingsProvider {
        let d = base.clone();
        SettingsProvider {
            enabled: self.enabled.or_default("settings.enabled", d.enabled),
            storage_key: self
                .storage_key
                .or_default("settings.storageKey", d.storage_key),
            default_settings: self
                .default_settings
                .into_record("settings.defaultSettings")
                .map(|s| s.apply_over(&d.default_settings))
                .unwrap_or(d.default_settings),
        }
    }
}

/// Raw providers overlay. Unknown provider keys are ignored here and reported by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProviders {
    #[serde(default)]
    pub auth: Maybe<Record<RawAuth>>,
    #[serde(default)]
    pub theme: Maybe<Record<RawTheme>>,
    #[serde(default)]
    pub toast: Maybe<Record<RawToast>>,
    #[serde(default)]
    pub loading: Maybe<Record<RawLoading>>,
    #[serde(default)]
    pub modal: Maybe<Record<RawModal>>,
    #[serde(default)]
    pub settings: Maybe<Record<RawSettings>>,
}

impl RawProviders {
    fn apply_over(self, base: &Providers) -> Providers {
        macro_rules! provider {
            ($field:ident) => {
                self.$field
                    .into_record(concat!("providers.", stringify!($field)))
                    .map(|p| p.apply_over(&base.$field))
                    .unwrap_or_else(|| base.$field.clone())
            };
        }
        Providers {
            auth: provider!(auth),
            theme: provider!(theme),
            toast: provider!(toast),
            loading: provider!(loading),
            modal: provider!(modal),
            settings: provider!(settings),
        }
    }
}

// ===== RAW COMPONENTS AND BUILD =====

/// Raw components overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponents {
    #[serde(default)]
    pub include_animations: Maybe<bool>,
    #[serde(default)]
    pub include_glassmorphic: Maybe<bool>,
    #[serde(default)]
    pub include: Maybe<Vec<String>>,
    #[serde(default)]
    pub exclude: Maybe<Vec<String>>,
}

impl RawComponents {
    fn apply_over(self, base: &Components) -> Components {
        let d = base.clone();
        Components {
            include_animations: self
                .include_animations
                .or_default("components.includeAnimations", d.include_animations),
            include_glassmorphic: self
                .include_glassmorphic
                .or_default("components.includeGlassmorphic", d.include_glassmorphic),
            include: self.include.into_option("components.include").or(d.include),
            exclude: self.exclude.into_option("components.exclude").or(d.exclude),
        }
    }
}

/// Raw build overlay
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuild {
    #[serde(default)]
    pub tree_shaking: Maybe<bool>,
    #[serde(default)]
    pub css_variables: Maybe<bool>,
    #[serde(default)]
    pub source_maps: Maybe<bool>,
}

impl RawBuild {
    fn apply_over(self, base: &Build) -> Build {
        Build {
            tree_shaking: self
                .tree_shaking
                .or_default("build.treeShaking", base.tree_shaking),
            css_variables: self
                .css_variables
                .or_default("build.cssVariables", base.css_variables),
            source_maps: self
                .source_maps
                .or_default("build.sourceMaps", base.source_maps),
        }
    }
}

// ===== RAW CONFIG =====

/// Raw configuration with every field optional, read permissively from a candidate value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub version: Maybe<String>,
    #[serde(default)]
    pub name: Maybe<String>,
    #[serde(default)]
    pub providers: Maybe<Record<RawProviders>>,
    #[serde(default)]
    pub components: Maybe<Record<RawComponents>>,
    #[serde(default)]
    pub build: Maybe<Record<RawBuild>>,
    #[serde(default)]
    pub custom_variables: Maybe<Map<String, Value>>,
}

impl RawConfig {
    /// Read a candidate. Anything that is not an object contributes nothing.
    pub fn from_value(candidate: &Value) -> Self {
        if !candidate.is_object() {
            return Self::default();
        }
        match Self::deserialize(candidate) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config candidate");
                Self::default()
            }
        }
    }

    /// Apply overrides over a base configuration
    pub fn apply_over(self, base: &Config) -> Config {
        let mut custom_variables = base.custom_variables.clone();
        if let Some(vars) = self.custom_variables.into_option("customVariables") {
            merge_variables(&mut custom_variables, vars);
        }
        Config {
            version: self.version.or_default("version", base.version.clone()),
            name: self.name.or_default("name", base.name.clone()),
            providers: self
                .providers
                .into_record("providers")
                .map(|p| p.apply_over(&base.providers))
                .unwrap_or_else(|| base.providers.clone()),
            components: self
                .components
                .into_record("components")
                .map(|c| c.apply_over(&base.components))
                .unwrap_or_else(|| base.components.clone()),
            build: self
                .build
                .into_record("build")
                .map(|b| b.apply_over(&base.build))
                .unwrap_or_else(|| base.build.clone()),
            custom_variables,
        }
    }

    /// Convert to final Config with defaults applied
    pub fn into_config(self) -> Config {
        self.apply_over(&Config::default())
    }
}

/// Copy string-valued variables over `into`, key by key.
fn merge_variables(into: &mut BTreeMap<String, String>, vars: Map<String, Value>) {
    for (key, value) in vars {
        match value {
            Value::String(s) => {
                into.insert(key, s);
            }
            other => {
                warn!(variable = %key, value = %other, "ignoring non-string custom variable");
            }
        }
    }
}
