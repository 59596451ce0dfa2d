//! Check command implementation

use colored::Colorize;
use sitecfg_core::lint::{self, Severity};

use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Decode the resolved settings and report operator mistakes
///
/// Errors always fail the command; warnings fail it only with `strict`.
pub fn run_check(ctx: &SiteContext, strict: bool) -> Result<()> {
    let (resolved, site) = ctx.site()?;
    let findings = lint::check(&site);

    for finding in &findings {
        let label = match finding.severity {
            Severity::Warning => "warning".yellow().bold(),
            Severity::Error => "error".red().bold(),
        };
        println!("{}: {}: {}", label, finding.setting.bold(), finding.message);
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if errors > 0 || (strict && warnings > 0) {
        return Err(CliError::user(format!(
            "check failed: {} error(s), {} warning(s)",
            errors, warnings
        )));
    }

    println!(
        "{} {} settings from {} layer(s), {} warning(s)",
        "OK".green().bold(),
        resolved.len(),
        resolved.layers().len(),
        warnings
    );
    Ok(())
}
