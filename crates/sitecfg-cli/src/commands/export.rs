//! Export command implementation

use std::path::Path;

use colored::Colorize;
use sitecfg_core::ExportFormat;
use sitecfg_core::render::render;
use sitecfg_fs::{NormalizedPath, io};

use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Write the resolved settings to `output`
///
/// Without an explicit format, the output file's extension decides.
pub fn run_export(ctx: &SiteContext, output: &Path, format: Option<ExportFormat>) -> Result<()> {
    let path = NormalizedPath::new(output);
    let format = match format {
        Some(format) => format,
        None => path
            .extension()
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| {
                CliError::user(format!(
                    "Cannot infer export format from '{}'. Use --format python|toml|json.",
                    path
                ))
            })?,
    };

    let resolved = ctx.resolve()?;
    let content = render(&resolved, format)?;
    io::write_text(&path, &content)?;

    println!(
        "{} Wrote {} settings to {} ({})",
        "OK".green().bold(),
        resolved.len(),
        path.to_string().cyan(),
        format.name()
    );
    Ok(())
}
