//! Provider settings records and the typed per-provider view.

use serde::Serialize;
use serde_json::Value;

use crate::{ProviderName, ThemeName, defaults};

/// Authentication provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Storage key for the persisted session.
    pub storage_key: String,
    /// Session lifetime in milliseconds.
    pub session_timeout: f64,
    /// Persist the session across reloads.
    pub persist_session: bool,
}

impl Default for AuthProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_key: defaults::AUTH_STORAGE_KEY.to_string(),
            session_timeout: defaults::AUTH_SESSION_TIMEOUT_MS,
            persist_session: true,
        }
    }
}

/// Theme provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Theme applied on first load. Kept verbatim even when it names no built-in theme.
    pub default_theme: String,
    /// DOM attribute the active theme is written to.
    pub attribute: String,
    /// Storage key for the persisted theme choice.
    pub storage_key: String,
    /// Themes offered to the user.
    pub available_themes: Vec<String>,
    /// Whether user-defined themes are included in the picker.
    pub include_custom_themes: bool,
}

impl ThemeProvider {
    /// The built-in theme named by `default_theme`, if any.
    pub fn default_theme(&self) -> Option<ThemeName> {
        self.default_theme.parse().ok()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            default_theme: defaults::THEME_DEFAULT.to_string(),
            attribute: defaults::THEME_ATTRIBUTE.to_string(),
            storage_key: defaults::THEME_STORAGE_KEY.to_string(),
            available_themes: ThemeName::all_names(),
            include_custom_themes: false,
        }
    }
}

/// Toast provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToastProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Maximum number of toasts visible at once.
    pub max_toasts: f64,
    /// Auto-dismiss delay in milliseconds.
    pub default_duration: f64,
    /// Screen corner the toast stack is anchored to.
    pub default_position: String,
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            max_toasts: defaults::TOAST_MAX,
            default_duration: defaults::TOAST_DURATION_MS,
            default_position: defaults::TOAST_POSITION.to_string(),
        }
    }
}

/// Loading provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadingProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Text shown under the spinner.
    pub default_text: String,
    /// Show a progress bar when progress is reported.
    pub show_progress: bool,
    /// Spinner variant name.
    pub spinner_variant: String,
}

impl Default for LoadingProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            default_text: defaults::LOADING_TEXT.to_string(),
            show_progress: false,
            spinner_variant: defaults::LOADING_SPINNER.to_string(),
        }
    }
}

/// Modal provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModalProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Maximum depth of the modal stack.
    pub max_modals: f64,
    /// Close the top modal when its overlay is clicked.
    pub close_on_overlay_click: bool,
    /// Close the top modal on Escape.
    pub close_on_escape: bool,
}

impl Default for ModalProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            max_modals: defaults::MODAL_MAX,
            close_on_overlay_click: true,
            close_on_escape: true,
        }
    }
}

/// Language preferences inside `defaultSettings`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSettings {
    /// BCP 47 language code.
    pub code: String,
    /// Text direction (`ltr` or `rtl`).
    pub direction: String,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            code: defaults::LANGUAGE_CODE.to_string(),
            direction: defaults::LANGUAGE_DIRECTION.to_string(),
        }
    }
}

/// Notification preferences inside `defaultSettings`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Notifications are shown at all.
    pub enabled: bool,
    /// Play a sound with each notification.
    pub sound: bool,
    /// Mirror notifications to the desktop.
    pub desktop: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: false,
            desktop: false,
        }
    }
}

/// Appearance preferences inside `defaultSettings`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    /// Preferred theme name.
    pub theme: String,
    /// Font size keyword.
    pub font_size: String,
    /// Disable non-essential motion.
    pub reduced_motion: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: defaults::APPEARANCE_THEME.to_string(),
            font_size: defaults::APPEARANCE_FONT_SIZE.to_string(),
            reduced_motion: false,
        }
    }
}

/// Initial user settings seeded by the settings provider.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSettings {
    /// Language preferences.
    pub language: LanguageSettings,
    /// Notification preferences.
    pub notifications: NotificationSettings,
    /// Appearance preferences.
    pub appearance: AppearanceSettings,
}

/// Settings provider settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsProvider {
    /// Whether the provider is mounted.
    pub enabled: bool,
    /// Storage key for persisted user settings.
    pub storage_key: String,
    /// Settings used before the user changes anything.
    pub default_settings: DefaultSettings,
}

impl Default for SettingsProvider {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_key: defaults::SETTINGS_STORAGE_KEY.to_string(),
            default_settings: DefaultSettings::default(),
        }
    }
}

/// One settings record for each provider. Always fully populated.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Providers {
    /// Authentication provider.
    pub auth: AuthProvider,
    /// Theme provider.
    pub theme: ThemeProvider,
    /// Toast provider.
    pub toast: ToastProvider,
    /// Loading provider.
    pub loading: LoadingProvider,
    /// Modal provider.
    pub modal: ModalProvider,
    /// Settings provider.
    pub settings: SettingsProvider,
}

impl Providers {
    /// Borrow the settings record for `name`.
    pub fn get(&self, name: ProviderName) -> ProviderSettings<'_> {
        match name {
            ProviderName::Auth => ProviderSettings::Auth(&self.auth),
            ProviderName::Theme => ProviderSettings::Theme(&self.theme),
            ProviderName::Toast => ProviderSettings::Toast(&self.toast),
            ProviderName::Loading => ProviderSettings::Loading(&self.loading),
            ProviderName::Modal => ProviderSettings::Modal(&self.modal),
            ProviderName::Settings => ProviderSettings::Settings(&self.settings),
        }
    }
}

/// Borrowed view of a single provider's settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProviderSettings<'a> {
    /// Authentication provider settings.
    Auth(&'a AuthProvider),
    /// Theme provider settings.
    Theme(&'a ThemeProvider),
    /// Toast provider settings.
    Toast(&'a ToastProvider),
    /// Loading provider settings.
    Loading(&'a LoadingProvider),
    /// Modal provider settings.
    Modal(&'a ModalProvider),
    /// Settings provider settings.
    Settings(&'a SettingsProvider),
}

impl ProviderSettings<'_> {
    /// Which provider this record belongs to.
    pub fn name(&self) -> ProviderName {
        match self {
            Self::Auth(_) => ProviderName::Auth,
            Self::Theme(_) => ProviderName::Theme,
            Self::Toast(_) => ProviderName::Toast,
            Self::Loading(_) => ProviderName::Loading,
            Self::Modal(_) => ProviderName::Modal,
            Self::Settings(_) => ProviderName::Settings,
        }
    }

    /// The record's `enabled` flag.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Auth(p) => p.enabled,
            Self::Theme(p) => p.enabled,
            Self::Toast(p) => p.enabled,
            Self::Loading(p) => p.enabled,
            Self::Modal(p) => p.enabled,
            Self::Settings(p) => p.enabled,
        }
    }

    /// JSON snapshot of the record, using configuration-file field names.
    pub fn to_value(&self) -> Value {
        let v = match self {
            Self::Auth(p) => serde_json::to_value(p),
            Self::Theme(p) => serde_json::to_value(p),
            Self::Toast(p) => serde_json::to_value(p),
            Self::Loading(p) => serde_json::to_value(p),
            Self::Modal(p) => serde_json::to_value(p),
            Self::Settings(p) => serde_json::to_value(p),
        };
        v.unwrap_or_default()
    }
}
