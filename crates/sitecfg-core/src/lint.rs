//! Operator-error checks over a decoded site configuration
//!
//! Resolution never validates. These checks run separately and only report;
//! the caller decides whether a finding should fail the build.

use crate::constants::{PLUGINS, SITEURL};
use crate::site::{ContentKind, SiteConfig};
use crate::template::UrlTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// The setting the finding is about
    pub setting: String,
    pub message: String,
}

impl Finding {
    fn warning(setting: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            setting: setting.to_string(),
            message: message.into(),
        }
    }

    fn error(setting: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            setting: setting.to_string(),
            message: message.into(),
        }
    }
}

/// Run every check.
pub fn check(site: &SiteConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for kind in ContentKind::ALL {
        check_templates(site, kind, &mut findings);
    }
    check_site_url(site, &mut findings);
    check_plugins(site, &mut findings);
    findings
}

/// True if any finding is an error.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

/// Whether a save path agrees with its public URL.
///
/// A directory-style URL (`{slug}/`) must be followed by exactly one file
/// name in the save path. Any other URL must equal the save path.
pub fn templates_consistent(url: &str, save_as: &str) -> bool {
    if url.is_empty() || url.ends_with('/') {
        match save_as.strip_prefix(url) {
            Some(file_name) => !file_name.is_empty() && !file_name.contains('/'),
            None => false,
        }
    } else {
        url == save_as
    }
}

fn check_templates(site: &SiteConfig, kind: ContentKind, findings: &mut Vec<Finding>) {
    let url_name = kind.url_setting();
    let save_name = kind.save_as_setting();

    let mut parsed_ok = true;
    for (name, raw) in [(url_name, site.url(kind)), (save_name, site.save_as(kind))] {
        let Some(raw) = raw else { continue };
        match UrlTemplate::parse(raw) {
            Ok(template) => {
                for unknown in template.unknown_placeholders() {
                    findings.push(Finding::warning(
                        name,
                        format!("placeholder '{{{unknown}}}' is not filled in by the engine"),
                    ));
                }
            }
            Err(e) => {
                parsed_ok = false;
                findings.push(Finding::error(name, e.to_string()));
            }
        }
    }

    match (site.url(kind), site.save_as(kind)) {
        (Some(url), Some(save_as)) if parsed_ok && !templates_consistent(url, save_as) => {
            findings.push(Finding::warning(
                save_name,
                format!("'{save_as}' does not match {url_name} '{url}'"),
            ));
        }
        (Some(_), None) => findings.push(Finding::warning(
            url_name,
            format!("{url_name} is set but {save_name} is not"),
        )),
        (None, Some(_)) => findings.push(Finding::warning(
            save_name,
            format!("{save_name} is set but {url_name} is not"),
        )),
        _ => {}
    }
}

fn check_site_url(site: &SiteConfig, findings: &mut Vec<Finding>) {
    if site.siteurl.is_empty() {
        if site.any_feed_enabled() {
            findings.push(Finding::warning(
                SITEURL,
                "feeds are enabled but SITEURL is empty, so feed links will be relative",
            ));
        }
        return;
    }
    if !site.relative_urls
        && !(site.siteurl.starts_with("https://") || site.siteurl.starts_with("http://"))
    {
        findings.push(Finding::warning(
            SITEURL,
            format!("'{}' is not an absolute http(s) URL", site.siteurl),
        ));
    }
    if site.siteurl.ends_with('/') {
        findings.push(Finding::warning(
            SITEURL,
            "trailing '/' produces double slashes in generated links",
        ));
    }
}

fn check_plugins(site: &SiteConfig, findings: &mut Vec<Finding>) {
    let mut seen: Vec<&str> = Vec::new();
    for plugin in &site.plugins {
        if seen.contains(&plugin.as_str()) {
            findings.push(Finding::warning(
                PLUGINS,
                format!("'{plugin}' is listed more than once"),
            ));
        } else {
            seen.push(plugin.as_str());
        }
    }
}
