//! Configuration resolver for Templar: built-in defaults, permissive merge of
//! user candidates, advisory validation, and cached discovery.
//!
//! The flow is:
//! - [`merge_config`] overlays a raw JSON candidate onto [`Config::default`].
//! - [`validate_config`] reports problems in a candidate without touching it.
//! - [`ConfigContext`] caches the resolved value and discovers it from an
//!   injected [`Ambient`] source on first read.
#![warn(unsafe_op_in_unsafe_fn)]

mod ambient;
mod config;
pub mod context;
mod defaults;
mod error;
mod loader;
mod merge;
mod providers;
mod raw;
mod types;
mod validate;

#[cfg(test)]
mod test_context;
#[cfg(test)]
mod test_merge;
#[cfg(test)]
mod test_validate;

pub use ambient::{Ambient, EnvAmbient, FileAmbient, StaticAmbient};
pub use config::{Build, Components, Config, debug_config};
pub use context::{
    ConfigContext, clear_global_config, get_global_config, read_config, read_config_sync,
    set_global_config,
};
pub use defaults::{AMBIENT_ENV_VAR, CONFIG_FILE_NAME};
pub use error::Error;
pub use loader::{
    Format, default_config_path, load_candidate_from_path, load_candidate_from_str,
    load_from_path, load_from_str, resolve_config_path,
};
pub use merge::{is_valid_config_shape, merge_config};
pub use providers::{
    AppearanceSettings, AuthProvider, DefaultSettings, LanguageSettings, LoadingProvider,
    ModalProvider, NotificationSettings, ProviderSettings, Providers, SettingsProvider,
    ThemeProvider, ToastProvider,
};
pub use types::{ProviderName, ThemeName, UnknownName};
pub use validate::{validate_config, validation_error};
