//! Typed view over resolved settings
//!
//! `SiteConfig` is what components receive instead of reaching into a global
//! settings namespace. It is decoded once from a `ResolvedConfig` and never
//! mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::constants::FEED_SETTINGS;
use crate::layer::value_kind;
use crate::template::UrlTemplate;
use crate::{Error, ResolvedConfig, Result};

/// An output path for a feed, or an explicit "do not generate"
///
/// Combined with `Option` this is tri-state: `None` means no layer set it
/// and the engine's own default applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPath {
    Disabled,
    Path(String),
}

impl FeedPath {
    pub fn is_enabled(&self) -> bool {
        matches!(self, FeedPath::Path(_))
    }

    pub fn as_path(&self) -> Option<&str> {
        match self {
            FeedPath::Path(path) => Some(path),
            FeedPath::Disabled => None,
        }
    }
}

/// `null` and `false` disable a feed; a string enables it.
fn deserialize_feed<'de, D>(deserializer: D) -> std::result::Result<Option<FeedPath>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(Some(FeedPath::Disabled)),
        Value::String(path) => Ok(Some(FeedPath::Path(path))),
        other => Err(de::Error::custom(format!(
            "feed path must be a string, null or false, found {}",
            value_kind(&other)
        ))),
    }
}

/// Items per listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pagination {
    /// Every listing on one page
    #[default]
    Disabled,
    PageSize(u32),
}

impl<'de> Deserialize<'de> for Pagination {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Pagination::Disabled),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(Pagination::Disabled),
                Some(size) => u32::try_from(size)
                    .map(Pagination::PageSize)
                    .map_err(|_| de::Error::custom(format!("page size {size} is too large"))),
                None => Err(de::Error::custom(format!(
                    "page size must be a non-negative integer, found {n}"
                ))),
            },
            other => Err(de::Error::custom(format!(
                "page size must be an integer or false, found {}",
                value_kind(&other)
            ))),
        }
    }
}

/// Kinds of content that carry a URL / save-path template pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Article,
    Page,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Article, ContentKind::Page];

    pub fn url_setting(&self) -> &'static str {
        match self {
            ContentKind::Article => crate::constants::ARTICLE_URL,
            ContentKind::Page => crate::constants::PAGE_URL,
        }
    }

    pub fn save_as_setting(&self) -> &'static str {
        match self {
            ContentKind::Article => crate::constants::ARTICLE_SAVE_AS,
            ContentKind::Page => crate::constants::PAGE_SAVE_AS,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Article => f.write_str("article"),
            ContentKind::Page => f.write_str("page"),
        }
    }
}

/// Site configuration decoded from resolved settings
///
/// Settings no layer defined fall back to the engine's defaults: `None`,
/// empty sequences, or `false`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "AUTHOR", default)]
    pub author: Option<String>,

    #[serde(rename = "SITENAME", default)]
    pub sitename: Option<String>,

    /// Base for absolute links; empty when unset
    #[serde(rename = "SITEURL", default)]
    pub siteurl: String,

    /// Content source tree, relative to the working directory
    #[serde(rename = "PATH", default)]
    pub path: Option<String>,

    #[serde(rename = "TIMEZONE", default)]
    pub timezone: Option<String>,

    #[serde(rename = "DEFAULT_LANG", default)]
    pub default_lang: Option<String>,

    #[serde(rename = "THEME", default)]
    pub theme: Option<String>,

    #[serde(rename = "FEED_ALL_ATOM", default, deserialize_with = "deserialize_feed")]
    pub feed_all_atom: Option<FeedPath>,

    #[serde(rename = "CATEGORY_FEED_ATOM", default, deserialize_with = "deserialize_feed")]
    pub category_feed_atom: Option<FeedPath>,

    #[serde(rename = "TRANSLATION_FEED_ATOM", default, deserialize_with = "deserialize_feed")]
    pub translation_feed_atom: Option<FeedPath>,

    #[serde(rename = "AUTHOR_FEED_ATOM", default, deserialize_with = "deserialize_feed")]
    pub author_feed_atom: Option<FeedPath>,

    #[serde(rename = "AUTHOR_FEED_RSS", default, deserialize_with = "deserialize_feed")]
    pub author_feed_rss: Option<FeedPath>,

    #[serde(rename = "PLUGIN_PATHS", default)]
    pub plugin_paths: Vec<String>,

    /// Order is registration order in the engine
    #[serde(rename = "PLUGINS", default)]
    pub plugins: Vec<String>,

    #[serde(rename = "STATIC_PATHS", default)]
    pub static_paths: Vec<String>,

    #[serde(rename = "ARTICLE_URL", default)]
    pub article_url: Option<String>,

    #[serde(rename = "ARTICLE_SAVE_AS", default)]
    pub article_save_as: Option<String>,

    #[serde(rename = "PAGE_URL", default)]
    pub page_url: Option<String>,

    #[serde(rename = "PAGE_SAVE_AS", default)]
    pub page_save_as: Option<String>,

    #[serde(rename = "DEFAULT_PAGINATION", default)]
    pub default_pagination: Pagination,

    #[serde(rename = "RELATIVE_URLS", default)]
    pub relative_urls: bool,

    #[serde(rename = "DELETE_OUTPUT_DIRECTORY", default)]
    pub delete_output_directory: bool,

    /// Everything else, such as per-plugin mappings, untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SiteConfig {
    /// Decode resolved settings.
    ///
    /// A value of the wrong shape for a recognised setting is an error; this
    /// is where a malformed layer surfaces.
    pub fn from_resolved(resolved: &ResolvedConfig) -> Result<Self> {
        let object: serde_json::Map<String, Value> = resolved
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        serde_json::from_value(Value::Object(object)).map_err(|e| Error::InvalidSettings {
            message: e.to_string(),
        })
    }

    /// Feed settings by name, in reporting order.
    pub fn feeds(&self) -> [(&'static str, Option<&FeedPath>); 5] {
        [
            (FEED_SETTINGS[0], self.feed_all_atom.as_ref()),
            (FEED_SETTINGS[1], self.category_feed_atom.as_ref()),
            (FEED_SETTINGS[2], self.translation_feed_atom.as_ref()),
            (FEED_SETTINGS[3], self.author_feed_atom.as_ref()),
            (FEED_SETTINGS[4], self.author_feed_rss.as_ref()),
        ]
    }

    /// True if any feed has an output path.
    pub fn any_feed_enabled(&self) -> bool {
        self.feeds()
            .iter()
            .any(|(_, feed)| feed.is_some_and(FeedPath::is_enabled))
    }

    /// Raw URL template string for a content kind.
    pub fn url(&self, kind: ContentKind) -> Option<&str> {
        match kind {
            ContentKind::Article => self.article_url.as_deref(),
            ContentKind::Page => self.page_url.as_deref(),
        }
    }

    /// Raw save-path template string for a content kind.
    pub fn save_as(&self, kind: ContentKind) -> Option<&str> {
        match kind {
            ContentKind::Article => self.article_save_as.as_deref(),
            ContentKind::Page => self.page_save_as.as_deref(),
        }
    }

    /// Parsed URL template for a content kind, if set.
    pub fn url_template(&self, kind: ContentKind) -> Result<Option<UrlTemplate>> {
        self.url(kind).map(UrlTemplate::parse).transpose()
    }

    /// Parsed save-path template for a content kind, if set.
    pub fn save_as_template(&self, kind: ContentKind) -> Result<Option<UrlTemplate>> {
        self.save_as(kind).map(UrlTemplate::parse).transpose()
    }

    /// A passed-through setting, such as a plugin's own mapping.
    pub fn plugin_setting(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Layer, LayerOrigin, resolve};
    use serde_json::json;

    fn decode(settings: Value) -> Result<SiteConfig> {
        let Value::Object(map) = settings else {
            panic!("test settings must be an object");
        };
        let layer = Layer::new("test", LayerOrigin::Builtin, map.into_iter().collect());
        SiteConfig::from_resolved(&resolve(&[layer]))
    }

    #[test]
    fn feed_tri_state() {
        let site = decode(json!({
            "FEED_ALL_ATOM": "feeds/all.atom.xml",
            "CATEGORY_FEED_ATOM": null,
            "AUTHOR_FEED_RSS": false,
        }))
        .unwrap();

        assert_eq!(
            site.feed_all_atom,
            Some(FeedPath::Path("feeds/all.atom.xml".into()))
        );
        assert_eq!(site.category_feed_atom, Some(FeedPath::Disabled));
        assert_eq!(site.author_feed_rss, Some(FeedPath::Disabled));
        assert_eq!(site.translation_feed_atom, None);
        assert!(site.any_feed_enabled());
    }

    #[test]
    fn feed_of_wrong_type_is_invalid() {
        let err = decode(json!({"FEED_ALL_ATOM": true})).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings { .. }));
    }

    #[test]
    fn pagination_accepts_false_and_integers() {
        assert_eq!(
            decode(json!({"DEFAULT_PAGINATION": false})).unwrap().default_pagination,
            Pagination::Disabled
        );
        assert_eq!(
            decode(json!({"DEFAULT_PAGINATION": 25})).unwrap().default_pagination,
            Pagination::PageSize(25)
        );
        assert!(decode(json!({"DEFAULT_PAGINATION": -1})).is_err());
        assert!(decode(json!({"DEFAULT_PAGINATION": "ten"})).is_err());
    }

    #[test]
    fn unrecognised_settings_pass_through() {
        let site = decode(json!({
            "TAILWIND": {"version": "4.1.12", "plugins": []},
            "SITENAME": "x",
        }))
        .unwrap();
        assert_eq!(
            site.plugin_setting("TAILWIND"),
            Some(&json!({"version": "4.1.12", "plugins": []}))
        );
        assert!(!site.extra.contains_key("SITENAME"));
    }

    #[test]
    fn empty_settings_use_defaults() {
        let site = decode(json!({})).unwrap();
        assert!(!site.relative_urls);
        assert!(!site.delete_output_directory);
        assert_eq!(site.default_pagination, Pagination::Disabled);
        assert!(site.plugins.is_empty());
        assert!(!site.any_feed_enabled());
    }
}
