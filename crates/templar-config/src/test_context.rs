#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        path::PathBuf,
        process,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use serde_json::{Value, json};

    use crate::{Ambient, Config, ConfigContext, Error, FileAmbient, StaticAmbient};

    /// Ambient source that fails a fixed number of times before yielding a value.
    struct Flaky {
        /// Remaining failures.
        failures: AtomicUsize,
        /// Value returned once failures are exhausted.
        value: Value,
    }

    impl Ambient for Flaky {
        fn candidate(&self) -> Result<Option<Value>, Error> {
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(Error::Read {
                    path: None,
                    message: "slot unavailable".to_string(),
                });
            }
            Ok(Some(self.value.clone()))
        }
    }

    /// Write `contents` to a unique temp file with the given extension.
    fn temp_file(tag: &str, ext: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "templar-config-{}-{}.{}",
            tag,
            process::id(),
            ext
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_sync_defaults_and_caches() {
        let ctx = ConfigContext::new();
        assert!(ctx.get().is_none());
        let first = ctx.read_sync();
        assert_eq!(*first, Config::default());
        let second = ctx.read_sync();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &ctx.get().unwrap()));
    }

    #[test]
    fn set_get_clear() {
        let ctx = ConfigContext::new();
        let set = ctx.set(&json!({"name": "X"}));
        let got = ctx.get().unwrap();
        assert!(Arc::ptr_eq(&set, &got));
        assert_eq!(got.name, "X");
        assert_eq!(got.providers, Config::default().providers);

        ctx.clear();
        assert!(ctx.get().is_none());
    }

    #[test]
    fn set_overwrites_cache() {
        let ctx = ConfigContext::with_ambient(StaticAmbient(json!({"name": "ambient"})));
        assert_eq!(ctx.read_sync().name, "ambient");
        ctx.set(&json!({"name": "explicit"}));
        assert_eq!(ctx.read_sync().name, "explicit");
    }

    #[test]
    fn ambient_candidate_is_merged_and_cached() {
        let ctx = ConfigContext::with_ambient(StaticAmbient(json!({
            "providers": {"modal": {"enabled": false}}
        })));
        let cfg = ctx.read_sync();
        assert!(!cfg.is_provider_enabled("modal"));
        assert!(cfg.is_provider_enabled("toast"));

        // Later ambient changes do not affect the cached value
        ctx.set_ambient(StaticAmbient(json!({"name": "later"})));
        assert!(Arc::ptr_eq(&cfg, &ctx.read_sync()));
    }

    #[test]
    fn ambient_failing_shape_check_falls_back_to_defaults() {
        let ctx = ConfigContext::with_ambient(StaticAmbient(json!({"version": 2})));
        let cfg = ctx.read_sync();
        assert_eq!(*cfg, Config::default());
        assert!(ctx.get().is_some());
    }

    #[test]
    fn ambient_failure_is_not_cached() {
        let ctx = ConfigContext::with_ambient(Flaky {
            failures: AtomicUsize::new(1),
            value: json!({"name": "recovered"}),
        });
        let first = ctx.read_sync();
        assert_eq!(*first, Config::default());
        assert!(ctx.get().is_none());

        let second = ctx.read_sync();
        assert_eq!(second.name, "recovered");
        assert!(ctx.get().is_some());
    }

    #[test]
    fn clearing_allows_rediscovery() {
        let ctx = ConfigContext::with_ambient(StaticAmbient(json!({"name": "one"})));
        assert_eq!(ctx.read_sync().name, "one");
        ctx.clear();
        ctx.set_ambient(StaticAmbient(json!({"name": "two"})));
        assert_eq!(ctx.read_sync().name, "two");
        ctx.clear();
        ctx.clear_ambient();
        assert_eq!(*ctx.read_sync(), Config::default());
    }

    #[tokio::test]
    async fn read_uses_async_ambient_load() {
        let path = temp_file(
            "async",
            "mourn",
            r#"{"providers": {"toast": {"maxToasts": 9}}}"#,
        );
        let ctx = ConfigContext::with_ambient(FileAmbient::new(&path));
        let cfg = ctx.read().await;
        assert_eq!(cfg.providers.toast.max_toasts, 9.0);
        assert!(Arc::ptr_eq(&cfg, &ctx.read().await));
        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn read_with_missing_file_caches_defaults() {
        let ctx = ConfigContext::with_ambient(FileAmbient::new(
            env::temp_dir().join("templar-config-does-not-exist.mourn"),
        ));
        let cfg = ctx.read().await;
        assert_eq!(*cfg, Config::default());
        assert!(ctx.get().is_some());
    }

    #[tokio::test]
    async fn read_with_broken_file_does_not_cache() {
        let path = temp_file("broken", "mourn", "{ not json");
        let ctx = ConfigContext::with_ambient(FileAmbient::new(&path));
        assert_eq!(*ctx.read().await, Config::default());
        assert!(ctx.get().is_none());
        assert_eq!(*ctx.read_sync(), Config::default());
        assert!(ctx.get().is_none());
        fs::remove_file(&path).unwrap();
    }
}
