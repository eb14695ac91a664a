//! Reading landofiles from disk
//!
//! A landofile may be YAML or JSON. In a directory the main file is merged
//! with its layers: pre layers underneath, post layers on top, each in the
//! order configured by [`LoaderConfig`].

use serde_json::{Map, Number, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::error::{LandoError, Result};
use crate::utils::input_limits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Document assembled from one or more files.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLandofile {
    /// Files in the order they were merged.
    pub files: Vec<PathBuf>,
    pub document: Value,
}

/// Parse landofile content into a document tree.
pub fn parse_document(content: &str, format: Format) -> Result<Value> {
    input_limits::check_size(content)?;

    let value = match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|e| LandoError::parse(None, Some(e.line()), e.to_string()))?,
        Format::Yaml if content.trim().is_empty() => Value::Null,
        Format::Yaml => {
            let mut yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(content).map_err(|e| {
                LandoError::parse(None, e.location().map(|loc| loc.line()), e.to_string())
            })?;
            yaml.apply_merge()
                .map_err(|e| LandoError::parse(None, None, e.to_string()))?;
            yaml_to_json(yaml)?
        }
    };

    input_limits::check_depth(&value)?;
    Ok(value)
}

fn yaml_to_json(value: serde_yaml_ng::Value) -> Result<Value> {
    use serde_yaml_ng::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml_ng::Number) -> Result<Value> {
    if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else {
        // .inf, -.inf and .nan have no JSON number form; keep their YAML spelling.
        Ok(n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(n.to_string())))
    }
}

/// Mapping keys become strings. Scalar keys are rendered, anything else is an error.
fn yaml_key(key: serde_yaml_ng::Value) -> Result<String> {
    use serde_yaml_ng::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(LandoError::parse(
            None,
            None,
            format!("mapping keys must be scalars, found {other:?}"),
        )),
    }
}

/// Read and parse a single landofile.
pub fn load_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| LandoError::io_error("read landofile", Some(path.to_path_buf()), e))?;
    let format = Format::from_path(path);
    let document = parse_document(&content, format).map_err(|e| e.with_path(path))?;

    crate::logging::log_landofile_loaded(&path.display().to_string(), format.as_str());
    Ok(document)
}

/// Existing landofiles in `dir`, in merge order. The main file must exist.
pub fn discover(dir: &Path, config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    let main = dir.join(config.main_file_name());
    if !main.is_file() {
        return Err(LandoError::not_found(dir, config.file_names()));
    }

    let files: Vec<PathBuf> = config
        .file_names()
        .into_iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect();

    crate::logging::log_layers_discovered(&dir.display().to_string(), files.len());
    Ok(files)
}

/// Deep merge `overlay` into `base`.
///
/// Mappings merge key by key. Any other overlay value, including sequences
/// and `null`, replaces what was there.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Discover, load and merge every landofile layer in `dir`.
pub fn load_dir(dir: &Path, config: &LoaderConfig) -> Result<LoadedLandofile> {
    let files = discover(dir, config)?;

    let mut document = Value::Object(Map::new());
    for file in &files {
        // An empty layer contributes nothing.
        match load_file(file)? {
            Value::Null => continue,
            layer => merge(&mut document, layer),
        }
    }

    Ok(LoadedLandofile { files, document })
}

/// Load only the main landofile in `dir`, ignoring layers.
pub fn load_main(dir: &Path, config: &LoaderConfig) -> Result<LoadedLandofile> {
    let main = dir.join(config.main_file_name());
    if !main.is_file() {
        return Err(LandoError::not_found(dir, vec![config.main_file_name()]));
    }

    let document = load_file(&main)?;
    Ok(LoadedLandofile {
        files: vec![main],
        document,
    })
}

/// Load a path that is either a landofile or a directory containing one.
pub fn load_path(path: &Path, config: &LoaderConfig, single: bool) -> Result<LoadedLandofile> {
    if path.is_dir() {
        if single {
            load_main(path, config)
        } else {
            load_dir(path, config)
        }
    } else {
        let document = load_file(path)?;
        Ok(LoadedLandofile {
            files: vec![path.to_path_buf()],
            document,
        })
    }
}
