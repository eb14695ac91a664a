//! Property-based tests for landofile validation
//!
//! These cover the validator over generated names and proxy entries rather
//! than hand-picked samples.

#[cfg(test)]
mod tests {
    use crate::validator::LandofileValidator;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    // Strategy for generating names that satisfy the name pattern
    prop_compose! {
        fn valid_app_name()(
            head in "[a-z0-9]",
            tail in "[a-z0-9._-]{0,30}",
        ) -> String {
            format!("{head}{tail}")
        }
    }

    // Strategy for names that contain at least one forbidden character
    prop_compose! {
        fn invalid_app_name()(
            prefix in "[a-z0-9]{0,8}",
            bad in "[A-Z!@# /]",
            suffix in "[a-z0-9]{0,8}",
        ) -> String {
            format!("{prefix}{bad}{suffix}")
        }
    }

    prop_compose! {
        fn hostname()(
            labels in prop::collection::vec("[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?", 1..4),
        ) -> String {
            labels.join(".")
        }
    }

    // Arbitrary JSON trees, for totality checks
    fn any_document() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[ -~]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("name".to_string()),
                        Just("recipe".to_string()),
                        Just("config".to_string()),
                        Just("proxy".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..4
                )
                .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_valid_names_pass(name in valid_app_name()) {
            let validator = LandofileValidator::new().unwrap();
            let report = validator.validate(&json!({ "name": name, "recipe": "lamp" }));
            prop_assert!(report.valid, "violations: {:?}", report.errors);
        }

        #[test]
        fn test_invalid_names_fail_on_pattern(name in invalid_app_name()) {
            let validator = LandofileValidator::new().unwrap();
            let report = validator.validate(&json!({ "name": name, "recipe": "lamp" }));
            prop_assert!(!report.valid);
            prop_assert!(report.has_violation("pattern", "/name"));
        }

        #[test]
        fn test_valid_proxy_routes_pass(
            host in hostname(),
            port in 1u16..=65535,
            path in "(/[a-z0-9]{1,6}){0,3}",
        ) {
            let validator = LandofileValidator::new().unwrap();
            let pathname = if path.is_empty() { "/".to_string() } else { path };
            let doc = json!({
                "name": "myapp",
                "proxy": {
                    "appserver": [
                        host.clone(),
                        format!("{host}:{port}{pathname}"),
                        { "hostname": host, "port": port, "pathname": pathname }
                    ]
                }
            });
            let report = validator.validate(&doc);
            prop_assert!(report.valid, "violations: {:?}", report.errors);
        }

        #[test]
        fn test_bang_in_hostname_fails(host in hostname(), at in 0usize..4) {
            let validator = LandofileValidator::new().unwrap();
            let cut = at.min(host.len());
            let bad = format!("{}!!{}", &host[..cut], &host[cut..]);
            let report = validator.validate(&json!({
                "name": "myapp",
                "proxy": { "appserver": [bad.clone(), { "hostname": bad }] }
            }));
            prop_assert!(!report.valid);
            prop_assert!(report.has_violation("pattern", "/proxy/appserver/1/hostname"));
        }

        #[test]
        fn test_validation_is_total_and_idempotent(doc in any_document()) {
            let validator = LandofileValidator::new().unwrap();
            let first = validator.validate(&doc);
            let second = validator.validate(&doc);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.valid, validator.is_valid(&doc));
        }
    }
}
