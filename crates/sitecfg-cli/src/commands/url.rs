//! URL preview command implementation

use chrono::NaiveDate;
use colored::Colorize;
use sitecfg_core::{ContentKind, SiteConfig, TemplateContext, UrlTemplate};

use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Inputs for rendering one piece of content's paths
#[derive(Debug, Clone)]
pub struct UrlRequest {
    pub kind: ContentKind,
    pub slug: String,
    pub date: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
    pub lang: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl UrlRequest {
    /// Template context, falling back to the site's default language and author.
    fn context(&self, site: &SiteConfig) -> TemplateContext {
        TemplateContext {
            slug: Some(self.slug.clone()),
            lang: self.lang.clone().or_else(|| site.default_lang.clone()),
            date: self.date,
            modified: self.modified.or(self.date),
            category: self.category.clone(),
            author: self.author.clone().or_else(|| site.author.clone()),
        }
    }
}

fn required(template: Option<UrlTemplate>, setting: &str) -> Result<UrlTemplate> {
    template.ok_or_else(|| CliError::user(format!("{} is not set by any layer", setting)))
}

/// Render the public URL and the output path for one piece of content
pub fn run_url(ctx: &SiteContext, request: &UrlRequest) -> Result<()> {
    let (_, site) = ctx.site()?;
    let kind = request.kind;

    let url = required(site.url_template(kind)?, kind.url_setting())?;
    let save_as = required(site.save_as_template(kind)?, kind.save_as_setting())?;
    let context = request.context(&site);

    let rendered_url = url.render(&context)?;
    let rendered_save_as = save_as.render(&context)?;

    println!("{:<8} {}", "url:".dimmed(), rendered_url);
    println!("{:<8} {}", "save_as:".dimmed(), rendered_save_as);
    if !site.relative_urls && !site.siteurl.is_empty() {
        println!(
            "{:<8} {}/{}",
            "link:".dimmed(),
            site.siteurl.trim_end_matches('/'),
            rendered_url.cyan()
        );
    }
    Ok(())
}
