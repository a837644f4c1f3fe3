#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use crate::{Config, Error, validate::SHAPE_ERROR, validate_config, validation_error};

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default().to_value()).is_empty());
        assert!(validate_config(&json!({})).is_empty());
    }

    #[test]
    fn shape_failure_stops_further_checks() {
        for bad in [
            json!(null),
            json!("config"),
            json!(7),
            json!({"version": 1, "providers": {"bogus": {}}}),
            json!({"name": false}),
        ] {
            assert_eq!(validate_config(&bad), vec![SHAPE_ERROR.to_string()]);
        }
    }

    #[test]
    fn arrays_pass_the_shape_gate() {
        assert!(validate_config(&json!([])).is_empty());
    }

    #[test]
    fn unknown_providers_are_reported_individually() {
        let errors = validate_config(&json!({
            "providers": {"bogus": {}, "analytics": {}, "toast": {}}
        }));
        assert!(errors.contains(&"Unknown provider: bogus".to_string()));
        assert!(errors.contains(&"Unknown provider: analytics".to_string()));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn max_toasts_must_be_positive() {
        let errors = validate_config(&json!({"providers": {"toast": {"maxToasts": 0}}}));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("maxToasts"));

        assert!(validate_config(&json!({"providers": {"toast": {"maxToasts": 5}}})).is_empty());

        let errors = validate_config(&json!({"providers": {"toast": {"maxToasts": "5"}}}));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn default_duration_must_be_non_negative() {
        assert!(validate_config(&json!({"providers": {"toast": {"defaultDuration": 0}}})).is_empty());
        let errors = validate_config(&json!({"providers": {"toast": {"defaultDuration": -1}}}));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("defaultDuration"));
    }

    #[test]
    fn max_modals_must_be_positive() {
        let errors = validate_config(&json!({"providers": {"modal": {"maxModals": 0.5}}}));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("maxModals"));
        assert!(validate_config(&json!({"providers": {"modal": {"maxModals": 1}}})).is_empty());
    }

    #[test]
    fn default_theme_must_be_builtin() {
        let errors = validate_config(&json!({
            "providers": {"theme": {"defaultTheme": "ultraviolet"}}
        }));
        assert_eq!(errors, vec!["Invalid theme: ultraviolet".to_string()]);

        assert!(
            validate_config(&json!({"providers": {"theme": {"defaultTheme": "dark"}}})).is_empty()
        );

        let errors = validate_config(&json!({"providers": {"theme": {"defaultTheme": 3}}}));
        assert_eq!(errors, vec!["Invalid theme: 3".to_string()]);
    }

    #[test]
    fn checks_accumulate() {
        let errors = validate_config(&json!({
            "providers": {
                "bogus": {},
                "theme": {"defaultTheme": "neon"},
                "toast": {"maxToasts": -1, "defaultDuration": -5},
                "modal": {"maxModals": 0}
            }
        }));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn unchecked_sections_are_ignored() {
        let errors = validate_config(&json!({
            "providers": {
                "auth": {"sessionTimeout": -1},
                "loading": {"defaultText": 3},
                "settings": {"defaultSettings": "nope"}
            },
            "components": "nope",
            "build": 7,
            "customVariables": {"--x": 1}
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn validation_does_not_mutate_input() {
        let candidate = json!({"providers": {"toast": {"maxToasts": 0}}});
        let before = candidate.clone();
        let _errors = validate_config(&candidate);
        assert_eq!(candidate, before);
    }

    #[test]
    fn validation_error_folds_messages() {
        assert!(validation_error(None, &[]).is_ok());
        let err = validation_error(
            Some(Path::new(".mourn")),
            &["a".to_string(), "b".to_string()],
        )
        .unwrap_err();
        match err {
            Error::Validation { message, path } => {
                assert_eq!(message, "a\nb");
                assert_eq!(path.as_deref(), Some(Path::new(".mourn")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
