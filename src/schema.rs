//! The embedded Landofile schema
//!
//! The schema is a draft-07 JSON Schema document kept at the crate root as
//! `landofile-spec.json`. It is the only source of truth for what a valid
//! Landofile looks like; the patterns below mirror it for callers that need
//! them outside of schema validation.

use serde_json::Value;

use crate::error::{LandoError, Result};

const SCHEMA_SOURCE: &str = include_str!("../landofile-spec.json");

/// Pattern an app `name` must match.
pub const NAME_PATTERN: &str = "^[a-z0-9][a-z0-9._-]*$";

/// Pattern for the `hostname` of a structured proxy route.
pub const HOSTNAME_PATTERN: &str = r"^([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?|\*)(\.([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?|\*))*$";

/// Pattern for a bare proxy route string, `hostname[:port][/path]`.
pub const ROUTE_PATTERN: &str = r"^([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?|\*)(\.([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?|\*))*(:[1-9][0-9]{0,4})?(/.*)?$";

/// Raw schema text as embedded in the binary.
pub fn schema_source() -> &'static str {
    SCHEMA_SOURCE
}

/// Parse the embedded schema.
pub fn landofile_schema() -> Result<Value> {
    serde_json::from_str(SCHEMA_SOURCE)
        .map_err(|e| LandoError::InvalidSchema(format!("embedded schema is not JSON: {e}")))
}
