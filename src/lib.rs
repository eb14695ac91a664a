//! Landofile schema validation
//!
//! A landofile describes a Lando app: its `name`, the `recipe` it is built
//! from, recipe `config`, and the `proxy` routes exposed per service. This
//! crate embeds the landofile JSON Schema and checks documents against it,
//! collecting every violation with the keyword and document path that failed.
//!
//! ```rust,no_run
//! use landofile::LandofileValidator;
//! use serde_json::json;
//!
//! let validator = LandofileValidator::new()?;
//! let report = validator.validate(&json!({ "name": "myapp", "recipe": "lamp" }));
//! assert!(report.valid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod landofile;
pub mod loader;
pub mod logging;
pub mod output;
pub mod schema;
pub mod utils;
pub mod validator;

#[cfg(test)]
mod validator_proptest;

pub use config::LoaderConfig;
pub use error::{LandoError, Result};
pub use landofile::{Landofile, ProxyRoute, Route};
pub use loader::{Format, LoadedLandofile};
pub use validator::{LandofileValidator, SchemaViolation, ValidationReport};
