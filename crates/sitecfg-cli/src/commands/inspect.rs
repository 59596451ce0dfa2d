//! Read-only inspection commands: get, explain, layers

use colored::Colorize;
use serde_json::{Value, json};
use sitecfg_core::SourceKind;

use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Print one resolved setting
///
/// Strings print bare so the output can be used in shell substitutions.
pub fn run_get(ctx: &SiteContext, name: &str, as_json: bool) -> Result<()> {
    let resolved = ctx.resolve()?;
    let value = resolved.get(name).ok_or_else(|| {
        CliError::user(format!("Setting '{}' is not defined by any layer", name))
    })?;

    match value {
        Value::String(s) if !as_json => println!("{s}"),
        other => println!("{other}"),
    }
    Ok(())
}

/// Show, per setting, the winning layer and the layers it overrode
pub fn run_explain(ctx: &SiteContext, as_json: bool) -> Result<()> {
    let resolved = ctx.resolve()?;

    if as_json {
        let output: serde_json::Map<String, Value> = resolved
            .iter()
            .map(|(name, value)| {
                let layers = resolved.provenance(name).unwrap_or_default();
                (name.clone(), json!({ "value": value, "layers": layers }))
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let width = resolved.settings().keys().map(String::len).max().unwrap_or(0);
    for (name, value) in resolved.iter() {
        let layers = resolved.provenance(name).unwrap_or_default();
        let Some((winner, overridden)) = layers.split_last() else {
            continue;
        };
        print!("{}  {}  {}", format!("{name:<width$}").bold(), value, winner.cyan());
        if !overridden.is_empty() {
            print!("  {}", format!("(overrides {})", overridden.join(", ")).dimmed());
        }
        println!();
    }
    Ok(())
}

/// List the layer sources in precedence order
pub fn run_layers(ctx: &SiteContext) -> Result<()> {
    let resolver = ctx.resolver();

    println!("{}", "Layer sources (lowest precedence first)".bold());
    println!();
    for (index, source) in resolver.sources().iter().enumerate() {
        let kind = match source.kind {
            SourceKind::Builtin => "builtin",
            SourceKind::Mounted => "mounted",
            SourceKind::Explicit => "explicit",
        };
        let status = if source.present {
            "present".green()
        } else if source.kind == SourceKind::Explicit {
            "missing".red()
        } else {
            "absent".dimmed()
        };
        let location = source
            .path
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "(embedded)".to_string());
        println!(
            "  {}. {:<9} {:<12} {:<8} {}",
            index + 1,
            kind,
            source.name,
            status,
            location.dimmed()
        );
    }
    Ok(())
}
