//! Layer file formats and extension detection

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result};

/// A serialization format a layer file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Every supported format, in the order files are probed during discovery.
    pub const ALL: [Format; 3] = [Format::Toml, Format::Json, Format::Yaml];

    /// Detect the format from a bare file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        Self::from_extension(path.extension().unwrap_or(""))
    }

    /// Human-readable format name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// File extensions recognised for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Toml => &["toml"],
            Format::Json => &["json"],
            Format::Yaml => &["yaml", "yml"],
        }
    }

    /// Parse `content` in this format.
    ///
    /// TOML datetimes are read as their string form. Non-finite numbers
    /// (TOML `nan`/`inf`, YAML `.nan`/`.inf`) have no JSON form and are
    /// rejected rather than read as null.
    ///
    /// `origin` only labels errors; nothing is read from it.
    pub fn parse<T: DeserializeOwned>(&self, content: &str, origin: &Path) -> Result<T> {
        let parsed = match self {
            Format::Toml => toml::from_str::<toml::Value>(content)
                .map_err(|e| e.to_string())
                .and_then(toml_to_json)
                .and_then(|value| serde_json::from_value(value).map_err(|e| e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
                .map_err(|e| e.to_string())
                .and_then(|value| {
                    ensure_finite_yaml(&value)?;
                    serde_yaml::from_value(value).map_err(|e| e.to_string())
                }),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: origin.to_path_buf(),
            format: self.name().into(),
            message,
        })
    }
}

fn non_finite(number: impl std::fmt::Display) -> String {
    format!("non-finite number '{number}' is not a valid setting value")
}

fn toml_to_json(value: toml::Value) -> std::result::Result<serde_json::Value, String> {
    use serde_json::Value as Json;

    Ok(match value {
        toml::Value::String(s) => Json::String(s),
        toml::Value::Integer(i) => Json::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Json::Number)
            .ok_or_else(|| non_finite(f))?,
        toml::Value::Boolean(b) => Json::Bool(b),
        toml::Value::Datetime(datetime) => Json::String(datetime.to_string()),
        toml::Value::Array(items) => Json::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<std::result::Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Json::Object(
            table
                .into_iter()
                .map(|(key, item)| Ok((key, toml_to_json(item)?)))
                .collect::<std::result::Result<_, String>>()?,
        ),
    })
}

fn ensure_finite_yaml(value: &serde_yaml::Value) -> std::result::Result<(), String> {
    match value {
        serde_yaml::Value::Number(n) if n.is_nan() || n.is_infinite() => Err(non_finite(n)),
        serde_yaml::Value::Sequence(items) => items.iter().try_for_each(ensure_finite_yaml),
        serde_yaml::Value::Mapping(map) => map.values().try_for_each(ensure_finite_yaml),
        serde_yaml::Value::Tagged(tagged) => ensure_finite_yaml(&tagged.value),
        _ => Ok(()),
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
