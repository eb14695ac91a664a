//! Landofile validation against the embedded schema
//!
//! All violations are collected; validation never stops at the first one and
//! never fails for a well-formed document tree. Operational problems (an
//! uncompilable schema) surface only when building the validator.

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::{LandoError, Result};
use crate::landofile::Landofile;
use crate::schema;

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaViolation {
    /// Failing schema keyword, e.g. `pattern`, `required`, `type`.
    pub keyword: String,
    /// JSON pointer into the document. Empty for the document root.
    pub instance_path: String,
    /// JSON pointer into the schema.
    pub schema_path: String,
    pub message: String,
}

impl SchemaViolation {
    fn from_error(error: &jsonschema::ValidationError<'_>) -> Self {
        let schema_path = error.schema_path.to_string();
        Self {
            keyword: keyword_from_schema_path(&schema_path),
            instance_path: error.instance_path.to_string(),
            schema_path,
            message: error.to_string(),
        }
    }

    /// Document location for display, with the root shown as `/`.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "/"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.location(), self.message, self.keyword)
    }
}

/// The keyword is the last non-index segment of the schema path.
fn keyword_from_schema_path(schema_path: &str) -> String {
    schema_path
        .rsplit('/')
        .find(|segment| !segment.is_empty() && !segment.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or("schema")
        .to_string()
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<SchemaViolation>,
}

impl ValidationReport {
    /// Violations reported at exactly `path`.
    pub fn violations_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a SchemaViolation> {
        self.errors.iter().filter(move |v| v.instance_path == path)
    }

    pub fn has_violation(&self, keyword: &str, path: &str) -> bool {
        self.violations_for(path).any(|v| v.keyword == keyword)
    }

    pub fn into_result(self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(LandoError::Validation {
                violations: self.errors,
            })
        }
    }
}

/// Compiled Landofile schema.
pub struct LandofileValidator {
    validator: Validator,
}

impl LandofileValidator {
    /// Compile the embedded Landofile schema.
    pub fn new() -> Result<Self> {
        Self::with_schema(schema::landofile_schema()?)
    }

    /// Compile a caller supplied schema.
    pub fn with_schema(schema: Value) -> Result<Self> {
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| LandoError::InvalidSchema(e.to_string()))?;
        Ok(Self { validator })
    }

    pub fn validate(&self, document: &Value) -> ValidationReport {
        let errors: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|error| SchemaViolation::from_error(&error))
            .collect();

        tracing::debug!(violations = errors.len(), "Schema validation finished");

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }

    /// Validate and then read the document into the typed model.
    pub fn validate_typed(&self, document: &Value) -> Result<Landofile> {
        self.validate(document).into_result()?;
        Landofile::from_value(document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> LandofileValidator {
        LandofileValidator::new().unwrap()
    }

    #[test]
    fn test_keyword_from_schema_path() {
        assert_eq!(keyword_from_schema_path("/properties/name/pattern"), "pattern");
        assert_eq!(keyword_from_schema_path("/required"), "required");
        assert_eq!(keyword_from_schema_path("/items/0/type"), "type");
        assert_eq!(keyword_from_schema_path("/required/0"), "required");
        assert_eq!(keyword_from_schema_path(""), "schema");
    }

    #[test]
    fn test_basic_landofile_is_valid() {
        let report = validator().validate(&json!({
            "name": "myapp",
            "recipe": "lamp",
            "config": { "via": "apache" }
        }));
        assert!(report.valid, "unexpected violations: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_name_is_required_violation() {
        let report = validator().validate(&json!({ "recipe": "lamp" }));
        assert!(!report.valid);
        assert!(report.has_violation("required", ""));
    }

    #[test]
    fn test_wrong_types_are_reported() {
        let report = validator().validate(&json!({
            "name": 42,
            "recipe": "lamp",
            "config": "apache"
        }));
        assert!(!report.valid);
        assert!(report.has_violation("type", "/name"));
        assert!(report.has_violation("type", "/config"));
    }

    #[test]
    fn test_collects_all_violations() {
        let report = validator().validate(&json!({
            "name": "Bad Name",
            "recipe": "",
            "proxy": { "appserver": ["bad!!host"] }
        }));
        assert!(report.has_violation("pattern", "/name"));
        assert!(report.has_violation("minLength", "/recipe"));
        assert!(!report.violations_for("/proxy/appserver/0").collect::<Vec<_>>().is_empty());
    }

    #[test]
    fn test_non_object_document() {
        let report = validator().validate(&json!(["myapp"]));
        assert!(!report.valid);
        assert!(report.has_violation("type", ""));
    }

    #[test]
    fn test_violation_display_uses_root_slash() {
        let report = validator().validate(&json!({}));
        let rendered = report.errors[0].to_string();
        assert!(rendered.starts_with("/: "));
        assert!(rendered.ends_with("(required)"));
    }

    #[test]
    fn test_into_result() {
        let ok = validator().validate(&json!({ "name": "myapp" }));
        assert!(ok.into_result().is_ok());

        let bad = validator().validate(&json!({ "name": "NOPE" }));
        match bad.into_result() {
            Err(LandoError::Validation { violations }) => assert!(!violations.is_empty()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validate_typed() {
        let landofile = validator()
            .validate_typed(&json!({
                "name": "myapp",
                "recipe": "lamp",
                "proxy": { "appserver": ["myapp.lndo.site"] }
            }))
            .unwrap();
        assert_eq!(landofile.name, "myapp");
        assert_eq!(landofile.recipe.as_deref(), Some("lamp"));
        assert_eq!(landofile.proxy["appserver"].len(), 1);
    }

    #[test]
    fn test_with_schema_rejects_invalid_schema() {
        let result = LandofileValidator::with_schema(json!({ "type": 12 }));
        assert!(matches!(result, Err(LandoError::InvalidSchema(_))));
    }

    #[test]
    fn test_is_valid_agrees_with_validate() {
        let validator = validator();
        for doc in [
            json!({ "name": "myapp" }),
            json!({ "name": "MyApp" }),
            json!({ "name": "myapp", "proxy": { "web": [{ "hostname": "a.b", "port": 0 }] } }),
        ] {
            assert_eq!(validator.is_valid(&doc), validator.validate(&doc).valid);
        }
    }
}
