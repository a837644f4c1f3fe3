//! Cached configuration state and the discovery order used to populate it.
//!
//! A [`ConfigContext`] owns one cached [`Config`]. Reads consult, in order:
//! the cache, the injected [`Ambient`] source (when its candidate passes
//! [`is_valid_config_shape`]), and finally the built-in defaults. Whatever is
//! found is cached. A failing ambient source yields the defaults without
//! caching, so the next read tries again.
//!
//! The cache is only ever replaced wholesale, so readers always observe a
//! complete configuration. Locks are never held across an await point.
//!
//! Hosts that want a single process-wide context use the free functions at
//! the bottom of this module, which operate on [`global`].

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{Ambient, Config, Error, is_valid_config_shape, merge_config};

/// Owner of the cached configuration and the optional ambient source.
#[derive(Default)]
pub struct ConfigContext {
    /// Resolved configuration, once set or discovered.
    cached: RwLock<Option<Arc<Config>>>,
    /// Source consulted when the cache is empty.
    ambient: RwLock<Option<Arc<dyn Ambient>>>,
}

impl ConfigContext {
    /// An empty context with no ambient source.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty context that consults `ambient` on first read.
    pub fn with_ambient(ambient: impl Ambient + 'static) -> Self {
        let ctx = Self::new();
        ctx.set_ambient(ambient);
        ctx
    }

    /// Install or replace the ambient source. The cache is left untouched.
    pub fn set_ambient(&self, ambient: impl Ambient + 'static) {
        *self.ambient.write() = Some(Arc::new(ambient));
    }

    /// Remove the ambient source.
    pub fn clear_ambient(&self) {
        *self.ambient.write() = None;
    }

    /// Merge `raw` over the defaults and store it, replacing any cached value.
    pub fn set(&self, raw: &Value) -> Arc<Config> {
        let cfg = Arc::new(merge_config(raw));
        *self.cached.write() = Some(cfg.clone());
        cfg
    }

    /// The cached configuration, without discovery.
    pub fn get(&self) -> Option<Arc<Config>> {
        self.cached.read().clone()
    }

    /// Drop the cached configuration.
    pub fn clear(&self) {
        *self.cached.write() = None;
    }

    /// Resolve the configuration without suspending.
    pub fn read_sync(&self) -> Arc<Config> {
        if let Some(cfg) = self.get() {
            return cfg;
        }
        let ambient = self.ambient.read().clone();
        let found = match ambient {
            Some(source) => source.candidate(),
            None => Ok(None),
        };
        self.settle(found)
    }

    /// Resolve the configuration, awaiting the ambient source if needed.
    pub async fn read(&self) -> Arc<Config> {
        if let Some(cfg) = self.get() {
            return cfg;
        }
        let ambient = self.ambient.read().clone();
        let found = match ambient {
            Some(source) => source.load().await,
            None => Ok(None),
        };
        self.settle(found)
    }

    /// Turn a discovery result into the configuration to return, caching it when sound.
    fn settle(&self, found: Result<Option<Value>, Error>) -> Arc<Config> {
        match found {
            Ok(Some(candidate)) if is_valid_config_shape(&candidate) => {
                debug!("using ambient config candidate");
                self.fill(merge_config(&candidate))
            }
            Ok(Some(_)) => {
                debug!("ambient config candidate rejected by shape check; using defaults");
                self.fill(Config::default())
            }
            Ok(None) => {
                debug!("no ambient config candidate; using defaults");
                self.fill(Config::default())
            }
            Err(e) => {
                warn!(error = %e.pretty(), "config discovery failed; using defaults");
                Arc::new(Config::default())
            }
        }
    }

    /// Store `cfg` unless another reader or `set` got there first, and return the cached value.
    fn fill(&self, cfg: Config) -> Arc<Config> {
        let mut slot = self.cached.write();
        if let Some(existing) = slot.as_ref() {
            return existing.clone();
        }
        let cfg = Arc::new(cfg);
        *slot = Some(cfg.clone());
        cfg
    }
}

/// The process-wide context used by the free functions below.
pub fn global() -> &'static ConfigContext {
    static GLOBAL: OnceLock<ConfigContext> = OnceLock::new();
    GLOBAL.get_or_init(ConfigContext::new)
}

/// Merge `raw` and store it as the process-wide configuration.
pub fn set_global_config(raw: &Value) -> Arc<Config> {
    global().set(raw)
}

/// The process-wide configuration, if one has been set or discovered.
pub fn get_global_config() -> Option<Arc<Config>> {
    global().get()
}

/// Drop the process-wide configuration.
pub fn clear_global_config() {
    global().clear();
}

/// Resolve the process-wide configuration without suspending.
pub fn read_config_sync() -> Arc<Config> {
    global().read_sync()
}

/// Resolve the process-wide configuration, awaiting the ambient source if needed.
pub async fn read_config() -> Arc<Config> {
    global().read().await
}
