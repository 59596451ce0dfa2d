//! Resolve command implementation

use sitecfg_core::ExportFormat;
use sitecfg_core::render::render;

use crate::context::SiteContext;
use crate::error::Result;

/// Print the resolved settings in the requested format
pub fn run_resolve(ctx: &SiteContext, format: ExportFormat) -> Result<()> {
    let resolved = ctx.resolve()?;
    print!("{}", render(&resolved, format)?);
    Ok(())
}
