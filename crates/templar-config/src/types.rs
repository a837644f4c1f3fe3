//! Enumerated names used throughout the configuration model.

use std::{error::Error as StdError, fmt, str::FromStr};

/// Name of a provider that a consuming application may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderName {
    /// Authentication/session provider.
    Auth,
    /// Theme switching provider.
    Theme,
    /// Toast notification provider.
    Toast,
    /// Loading overlay provider.
    Loading,
    /// Modal stack provider.
    Modal,
    /// User settings provider.
    Settings,
}

impl ProviderName {
    /// Every provider, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Auth,
        Self::Theme,
        Self::Toast,
        Self::Loading,
        Self::Modal,
        Self::Settings,
    ];

    /// The key used for this provider in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Theme => "theme",
            Self::Toast => "toast",
            Self::Loading => "loading",
            Self::Modal => "modal",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised enumerated name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name: {}", self.0)
    }
}

impl StdError for UnknownName {}

impl FromStr for ProviderName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Built-in theme identifiers accepted for `providers.theme.defaultTheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeName {
    /// Light background theme.
    Light,
    /// Dark background theme.
    Dark,
    /// Follow the host's colour scheme preference.
    System,
    /// Deep blue-black theme.
    Midnight,
    /// Teal and blue theme.
    Ocean,
    /// Green theme.
    Forest,
    /// Warm orange theme.
    Sunset,
    /// Pink theme.
    Rose,
    /// Greyscale theme.
    Mono,
    /// Accessibility theme with maximal contrast.
    HighContrast,
}

impl ThemeName {
    /// Every built-in theme, in canonical order.
    pub const ALL: [Self; 10] = [
        Self::Light,
        Self::Dark,
        Self::System,
        Self::Midnight,
        Self::Ocean,
        Self::Forest,
        Self::Sunset,
        Self::Rose,
        Self::Mono,
        Self::HighContrast,
    ];

    /// The identifier used for this theme in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
            Self::Midnight => "midnight",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Rose => "rose",
            Self::Mono => "mono",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Names of all built-in themes as owned strings.
    pub fn all_names() -> Vec<String> {
        Self::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
