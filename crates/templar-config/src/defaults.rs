// Built-in defaults for the resolved configuration

pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const NAME: &str = "templar";

// Auth provider
pub(crate) const AUTH_STORAGE_KEY: &str = "templar-auth";
pub(crate) const AUTH_SESSION_TIMEOUT_MS: f64 = 3_600_000.0;

// Theme provider
pub(crate) const THEME_DEFAULT: &str = "dark";
pub(crate) const THEME_ATTRIBUTE: &str = "data-theme";
pub(crate) const THEME_STORAGE_KEY: &str = "templar-theme";

// Toast provider
pub(crate) const TOAST_MAX: f64 = 5.0;
pub(crate) const TOAST_DURATION_MS: f64 = 5000.0;
pub(crate) const TOAST_POSITION: &str = "top-right";

// Loading provider
pub(crate) const LOADING_TEXT: &str = "Loading...";
pub(crate) const LOADING_SPINNER: &str = "default";

// Modal provider
pub(crate) const MODAL_MAX: f64 = 3.0;

// Settings provider
pub(crate) const SETTINGS_STORAGE_KEY: &str = "templar-settings";
pub(crate) const LANGUAGE_CODE: &str = "en";
pub(crate) const LANGUAGE_DIRECTION: &str = "ltr";
pub(crate) const APPEARANCE_THEME: &str = "dark";
pub(crate) const APPEARANCE_FONT_SIZE: &str = "medium";

/// Environment variable a host may use to inject a JSON candidate configuration.
pub const AMBIENT_ENV_VAR: &str = "TEMPLAR_CONFIG";

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mourn";
