//! URL and save-path templates
//!
//! Templates use `{name}` and `{name:format}` placeholders, with `{{` and `}}`
//! for literal braces. Only `date` and `modified` accept a format, which is a
//! strftime pattern such as `%Y`.

use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::{Error, Result};

/// Placeholders the site engine fills in for articles and pages.
pub const KNOWN_PLACEHOLDERS: [&str; 6] = ["slug", "lang", "date", "modified", "category", "author"];

/// Date pattern used when a date placeholder carries no format.
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder {
        name: String,
        format: Option<String>,
    },
}

/// A parsed URL or save-path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
}

/// Values available when rendering a template
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    pub slug: Option<String>,
    pub lang: Option<String>,
    pub date: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl TemplateContext {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    fn text(&self, name: &str) -> Option<&str> {
        match name {
            "slug" => self.slug.as_deref(),
            "lang" => self.lang.as_deref(),
            "category" => self.category.as_deref(),
            "author" => self.author.as_deref(),
            _ => None,
        }
    }

    fn date(&self, name: &str) -> Option<NaiveDate> {
        match name {
            "date" => self.date,
            "modified" => self.modified,
            _ => None,
        }
    }
}

fn is_date_placeholder(name: &str) -> bool {
    matches!(name, "date" | "modified")
}

impl UrlTemplate {
    /// Parse a template, validating brace structure and date formats.
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |message: &str| Error::Template {
            template: source.to_string(),
            message: message.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(invalid("single '}' outside a placeholder")),
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(invalid("nested '{' in placeholder")),
                            Some(ch) => field.push(ch),
                            None => return Err(invalid("unterminated placeholder")),
                        }
                    }
                    let (name, format) = match field.split_once(':') {
                        Some((name, format)) => (name, Some(format.to_string())),
                        None => (field.as_str(), None),
                    };
                    if name.is_empty() {
                        return Err(invalid("empty placeholder name"));
                    }
                    if let Some(format) = &format {
                        if is_date_placeholder(name)
                            && StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
                        {
                            return Err(invalid(&format!("bad date format '{format}'")));
                        }
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder {
                        name: name.to_string(),
                        format,
                    });
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder names the engine does not fill in.
    pub fn unknown_placeholders(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = Vec::new();
        for name in self.placeholders() {
            if !KNOWN_PLACEHOLDERS.contains(&name) && !unknown.contains(&name) {
                unknown.push(name);
            }
        }
        unknown
    }

    /// Substitute every placeholder from `context`.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            let (name, format) = match segment {
                Segment::Literal(text) => {
                    out.push_str(text);
                    continue;
                }
                Segment::Placeholder { name, format } => (name.as_str(), format.as_deref()),
            };

            if !KNOWN_PLACEHOLDERS.contains(&name) {
                return Err(Error::UnknownPlaceholder {
                    template: self.source.clone(),
                    name: name.to_string(),
                });
            }
            let missing = || Error::MissingPlaceholder {
                template: self.source.clone(),
                name: name.to_string(),
            };

            if is_date_placeholder(name) {
                let date = context.date(name).ok_or_else(missing)?;
                let items = StrftimeItems::new(format.unwrap_or(DEFAULT_DATE_FORMAT));
                write!(out, "{}", date.format_with_items(items)).map_err(|_| Error::Template {
                    template: self.source.clone(),
                    message: format!("cannot format '{name}'"),
                })?;
            } else {
                if format.is_some() {
                    return Err(Error::Template {
                        template: self.source.clone(),
                        message: format!("'{name}' does not take a format"),
                    });
                }
                out.push_str(context.text(name).ok_or_else(missing)?);
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for UrlTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_date_and_slug_placeholders() {
        let template = UrlTemplate::parse("{date:%Y}/{date:%m}/{slug}/").unwrap();
        let names: Vec<&str> = template.placeholders().collect();
        assert_eq!(names, vec!["date", "date", "slug"]);
        assert_eq!(template.segments().len(), 6);
    }

    #[test]
    fn renders_article_url() {
        let template = UrlTemplate::parse("{date:%Y}/{date:%m}/{date:%d}/{slug}/").unwrap();
        let context = TemplateContext {
            date: Some(date(2024, 3, 7)),
            ..TemplateContext::new("hello-world")
        };
        assert_eq!(template.render(&context).unwrap(), "2024/03/07/hello-world/");
    }

    #[test]
    fn escaped_braces_are_literal() {
        let template = UrlTemplate::parse("{{raw}}/{slug}").unwrap();
        assert_eq!(
            template.render(&TemplateContext::new("x")).unwrap(),
            "{raw}/x"
        );
    }

    #[test]
    fn unterminated_placeholder_is_rejected() {
        assert!(matches!(
            UrlTemplate::parse("{slug"),
            Err(Error::Template { .. })
        ));
        assert!(matches!(
            UrlTemplate::parse("slug}"),
            Err(Error::Template { .. })
        ));
    }

    #[test]
    fn missing_date_is_reported() {
        let template = UrlTemplate::parse("{date:%Y}/{slug}").unwrap();
        let err = template.render(&TemplateContext::new("x")).unwrap_err();
        assert!(matches!(err, Error::MissingPlaceholder { name, .. } if name == "date"));
    }

    #[test]
    fn unknown_placeholder_is_listed_and_fails_render() {
        let template = UrlTemplate::parse("{series}/{slug}").unwrap();
        assert_eq!(template.unknown_placeholders(), vec!["series"]);
        assert!(matches!(
            template.render(&TemplateContext::new("x")),
            Err(Error::UnknownPlaceholder { .. })
        ));
    }
}
