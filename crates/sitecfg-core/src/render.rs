//! Export of resolved settings
//!
//! The engine reads a Python settings module, so that is the primary export.
//! TOML and JSON exports exist for inspection and for feeding the result
//! back in as a layer.

use std::fmt::Write;

use serde_json::Value;

use crate::{Error, ResolvedConfig, Result, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Python,
    Toml,
    Json,
}

impl ExportFormat {
    /// Infer from an output file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "py" => Some(ExportFormat::Python),
            "toml" => Some(ExportFormat::Toml),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Python => "python",
            ExportFormat::Toml => "toml",
            ExportFormat::Json => "json",
        }
    }
}

/// Render resolved settings; names are emitted in sorted order.
pub fn render(resolved: &ResolvedConfig, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Python => render_python(resolved),
        ExportFormat::Toml => render_toml(resolved.settings()),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(resolved.settings())? + "\n"),
    }
}

fn render_python(resolved: &ResolvedConfig) -> Result<String> {
    let mut out = String::new();
    out.push_str("# Generated by sitecfg. Do not edit; change a layer and re-export.\n");
    for label in resolved.layers() {
        let _ = writeln!(out, "# layer: {label}");
    }
    out.push('\n');

    for (name, value) in resolved.iter() {
        if !is_python_identifier(name) {
            return Err(Error::Render {
                format: ExportFormat::Python.name().into(),
                message: format!("'{name}' is not a valid Python assignment target"),
            });
        }
        out.push_str(name);
        out.push_str(" = ");
        python_literal(value, &mut out);
        out.push('\n');
    }
    Ok(out)
}

/// Reserved words that cannot be assignment targets.
const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

fn is_python_identifier(name: &str) -> bool {
    if PYTHON_KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Append `value` as a Python literal.
pub fn python_literal(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => python_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                python_literal(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                python_string(key, out);
                out.push_str(": ");
                python_literal(item, out);
            }
            out.push('}');
        }
    }
}

fn python_string(s: &str, out: &mut String) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
}

/// TOML has no null; write it as `false`, the TOML spelling of "disabled".
fn toml_compatible(value: &Value) -> Value {
    match value {
        Value::Null => {
            tracing::warn!("Writing null as false in TOML export");
            Value::Bool(false)
        }
        Value::Array(items) => Value::Array(items.iter().map(toml_compatible).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), toml_compatible(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn render_toml(settings: &Settings) -> Result<String> {
    let converted: Settings = settings
        .iter()
        .map(|(name, value)| (name.clone(), toml_compatible(value)))
        .collect();
    Ok(toml::to_string_pretty(&converted)?)
}
