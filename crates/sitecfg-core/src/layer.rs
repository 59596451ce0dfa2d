//! A single configuration source
//!
//! A layer is a flat mapping from setting name to value, tagged with where it
//! came from. Layers never merge with each other here; that is the
//! resolver's job.

use std::collections::BTreeMap;

use serde_json::Value;
use sitecfg_fs::{ConfigStore, Format, NormalizedPath};

use crate::{Error, Result};

/// Setting name to value, ordered by name for deterministic output.
pub type Settings = BTreeMap<String, Value>;

/// Where a layer was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerOrigin {
    /// Embedded in the binary
    Builtin,
    /// Read from a file on disk
    File(NormalizedPath),
}

impl LayerOrigin {
    /// The file behind this origin, if any.
    pub fn path(&self) -> Option<&NormalizedPath> {
        match self {
            LayerOrigin::Builtin => None,
            LayerOrigin::File(path) => Some(path),
        }
    }
}

/// One configuration source: a named set of setting bindings
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    origin: LayerOrigin,
    settings: Settings,
}

impl Layer {
    /// Create a layer from settings already in memory.
    pub fn new(name: impl Into<String>, origin: LayerOrigin, settings: Settings) -> Self {
        Self {
            name: name.into(),
            origin,
            settings,
        }
    }

    /// Parse a builtin layer from text in the given format.
    pub fn parse(name: impl Into<String>, format: Format, content: &str) -> Result<Self> {
        let name = name.into();
        let value: Value = format.parse(content, std::path::Path::new(&name))?;
        Self::from_value(name, LayerOrigin::Builtin, value)
    }

    /// Load a layer from a file; the layer is named after the file stem.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::LayerNotFound {
                path: path.to_native(),
            });
        }
        let value: Value = ConfigStore::new().load(path)?;
        let name = path.file_stem().unwrap_or(path.as_str()).to_string();
        Self::from_value(name, LayerOrigin::File(path.clone()), value)
    }

    /// Load a layer from a file that may legitimately be absent.
    ///
    /// An absent file contributes nothing: `Ok(None)`.
    pub fn load_optional(path: &NormalizedPath) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    fn from_value(name: String, origin: LayerOrigin, value: Value) -> Result<Self> {
        let settings = match value {
            Value::Object(map) => map.into_iter().collect(),
            // An empty YAML document
            Value::Null => Settings::new(),
            other => {
                let origin_label = match &origin {
                    LayerOrigin::Builtin => format!("builtin:{name}"),
                    LayerOrigin::File(path) => path.to_string(),
                };
                return Err(Error::InvalidLayer {
                    origin: origin_label,
                    found: value_kind(&other).to_string(),
                });
            }
        };
        Ok(Self {
            name,
            origin,
            settings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &LayerOrigin {
        &self.origin
    }

    /// Label used in provenance: `builtin:<name>` or the file path.
    pub fn label(&self) -> String {
        match &self.origin {
            LayerOrigin::Builtin => format!("builtin:{}", self.name),
            LayerOrigin::File(path) => path.to_string(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
