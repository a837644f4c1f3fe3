#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Config, ProviderName, ThemeName, merge_config, validate_config};

    #[test]
    fn empty_candidate_is_default() {
        assert_eq!(merge_config(&json!({})), Config::default());
    }

    #[test]
    fn non_object_candidates_are_default() {
        for v in [json!(null), json!(3), json!("x"), json!([1, 2])] {
            assert_eq!(merge_config(&v), Config::default());
        }
    }

    #[test]
    fn all_providers_present_for_partial_candidates() {
        let candidates = [
            json!({}),
            json!({"providers": {}}),
            json!({"providers": {"toast": {"enabled": false}}}),
            json!({"providers": "nonsense"}),
        ];
        for c in candidates {
            let cfg = merge_config(&c);
            let v = cfg.to_value();
            for p in ProviderName::ALL {
                assert!(v["providers"].get(p.as_str()).is_some(), "missing {p}");
            }
        }
    }

    #[test]
    fn provider_fields_merge_key_by_key() {
        let cfg = merge_config(&json!({
            "providers": {"toast": {"maxToasts": 8}}
        }));
        assert_eq!(cfg.providers.toast.max_toasts, 8.0);
        // Siblings keep their defaults
        assert_eq!(cfg.providers.toast.default_duration, 5000.0);
        assert_eq!(cfg.providers.toast.default_position, "top-right");
        assert!(cfg.providers.toast.enabled);
    }

    #[test]
    fn default_settings_merge_one_level_deeper() {
        let cfg = merge_config(&json!({
            "providers": {
                "settings": {
                    "defaultSettings": {
                        "appearance": {"fontSize": "large"}
                    }
                }
            }
        }));
        let ds = &cfg.providers.settings.default_settings;
        assert_eq!(ds.appearance.font_size, "large");
        assert_eq!(ds.appearance.theme, "dark");
        assert!(!ds.appearance.reduced_motion);
        assert_eq!(ds.language.code, "en");
        assert!(ds.notifications.enabled);
        assert_eq!(cfg.providers.settings.storage_key, "templar-settings");
    }

    #[test]
    fn custom_variables_merge_per_key() {
        let cfg = merge_config(&json!({
            "customVariables": {"--primary": "#112233", "--radius": "4px"}
        }));
        assert_eq!(cfg.custom_variables["--primary"], "#112233");
        assert_eq!(cfg.custom_variables["--radius"], "4px");
        assert_eq!(cfg.custom_variables.len(), 2);

        // Layering keeps earlier keys and replaces repeated ones
        let layered = cfg.overlay(&json!({"customVariables": {"--primary": "red"}}));
        assert_eq!(layered.custom_variables["--primary"], "red");
        assert_eq!(layered.custom_variables["--radius"], "4px");
    }

    #[test]
    fn components_and_build_merge_per_key() {
        let cfg = merge_config(&json!({
            "components": {"includeGlassmorphic": false, "exclude": ["FallingLeaves"]},
            "build": {"sourceMaps": true}
        }));
        assert!(cfg.components.include_animations);
        assert!(!cfg.components.include_glassmorphic);
        assert_eq!(cfg.components.include, None);
        assert_eq!(cfg.components.exclude, Some(vec!["FallingLeaves".to_string()]));
        assert!(cfg.build.tree_shaking);
        assert!(cfg.build.css_variables);
        assert!(cfg.build.source_maps);
    }

    #[test]
    fn top_level_strings_replace_defaults() {
        let cfg = merge_config(&json!({"name": "X", "version": "2.0.0"}));
        assert_eq!(cfg.name, "X");
        assert_eq!(cfg.version, "2.0.0");
        assert_eq!(cfg.providers, Config::default().providers);
    }

    #[test]
    fn mistyped_fields_fall_back_to_defaults() {
        let cfg = merge_config(&json!({
            "name": 42,
            "providers": {
                "toast": {"maxToasts": "many", "defaultPosition": "bottom-left"},
                "modal": {"closeOnEscape": "no"},
                "auth": true
            },
            "customVariables": {"--ok": "1px", "--bad": 3}
        }));
        assert_eq!(cfg.name, "templar");
        assert_eq!(cfg.providers.toast.max_toasts, 5.0);
        assert_eq!(cfg.providers.toast.default_position, "bottom-left");
        assert!(cfg.providers.modal.close_on_escape);
        assert_eq!(cfg.providers.auth, Config::default().providers.auth);
        assert_eq!(cfg.custom_variables.get("--ok").map(String::as_str), Some("1px"));
        assert!(!cfg.custom_variables.contains_key("--bad"));
    }

    #[test]
    fn negative_and_fractional_counts_survive_merge() {
        let candidate = json!({
            "providers": {"toast": {"maxToasts": -1}, "modal": {"maxModals": 1.5}}
        });
        let cfg = merge_config(&candidate);
        assert_eq!(cfg.providers.toast.max_toasts, -1.0);
        assert_eq!(cfg.providers.modal.max_modals, 1.5);
        assert_eq!(validate_config(&candidate).len(), 1);
    }

    #[test]
    fn arrays_never_fill_nested_records() {
        let cfg = merge_config(&json!({
            "components": [false, false],
            "build": [false],
            "providers": {
                "toast": [false, 1],
                "settings": {"defaultSettings": {"notifications": [false]}}
            }
        }));
        let defaults = Config::default();
        assert_eq!(cfg.components, defaults.components);
        assert_eq!(cfg.build, defaults.build);
        assert_eq!(cfg.providers, defaults.providers);

        let cfg = merge_config(&json!({"providers": [{"enabled": false}]}));
        assert!(cfg.is_provider_enabled("auth"));
        assert_eq!(cfg.providers, defaults.providers);
    }

    #[test]
    fn out_of_range_values_survive_merge() {
        let cfg = merge_config(&json!({
            "providers": {
                "toast": {"maxToasts": 0, "defaultDuration": -10},
                "theme": {"defaultTheme": "ultraviolet"}
            }
        }));
        assert_eq!(cfg.providers.toast.max_toasts, 0.0);
        assert_eq!(cfg.providers.toast.default_duration, -10.0);
        assert_eq!(cfg.providers.theme.default_theme, "ultraviolet");
        assert_eq!(cfg.providers.theme.default_theme(), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = merge_config(&json!({
            "providers": {"bogus": {"enabled": false}},
            "extra": true
        }));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn null_fields_count_as_absent() {
        let cfg = merge_config(&json!({
            "name": null,
            "providers": {"theme": {"defaultTheme": null}}
        }));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn merge_is_idempotent() {
        let candidates = [
            json!({}),
            json!({"name": "X", "providers": {"theme": {"defaultTheme": "ocean"}}}),
            json!({
                "components": {"include": ["Badge", "Toggle"]},
                "customVariables": {"--gap": "8px"},
                "providers": {
                    "toast": {"defaultDuration": 2500.5},
                    "settings": {"defaultSettings": {"language": {"direction": "rtl"}}}
                }
            }),
        ];
        for c in candidates {
            let once = merge_config(&c);
            let twice = merge_config(&once.to_value());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn default_theme_is_builtin() {
        let cfg = Config::default();
        assert_eq!(cfg.providers.theme.default_theme(), Some(ThemeName::Dark));
        assert_eq!(cfg.providers.theme.available_themes.len(), 10);
    }
}
