//! Well-known layer and setting names

/// File stem of the base layer, both builtin and project-mounted.
pub const BASE_LAYER: &str = "siteconf";

/// File stem of the publish layer, both builtin and project-mounted.
pub const PUBLISH_LAYER: &str = "publishconf";

pub const AUTHOR: &str = "AUTHOR";
pub const SITENAME: &str = "SITENAME";
pub const SITEURL: &str = "SITEURL";
pub const PATH: &str = "PATH";
pub const TIMEZONE: &str = "TIMEZONE";
pub const DEFAULT_LANG: &str = "DEFAULT_LANG";
pub const THEME: &str = "THEME";

pub const FEED_ALL_ATOM: &str = "FEED_ALL_ATOM";
pub const CATEGORY_FEED_ATOM: &str = "CATEGORY_FEED_ATOM";
pub const TRANSLATION_FEED_ATOM: &str = "TRANSLATION_FEED_ATOM";
pub const AUTHOR_FEED_ATOM: &str = "AUTHOR_FEED_ATOM";
pub const AUTHOR_FEED_RSS: &str = "AUTHOR_FEED_RSS";

pub const PLUGIN_PATHS: &str = "PLUGIN_PATHS";
pub const PLUGINS: &str = "PLUGINS";
pub const STATIC_PATHS: &str = "STATIC_PATHS";

pub const ARTICLE_URL: &str = "ARTICLE_URL";
pub const ARTICLE_SAVE_AS: &str = "ARTICLE_SAVE_AS";
pub const PAGE_URL: &str = "PAGE_URL";
pub const PAGE_SAVE_AS: &str = "PAGE_SAVE_AS";

pub const DEFAULT_PAGINATION: &str = "DEFAULT_PAGINATION";
pub const RELATIVE_URLS: &str = "RELATIVE_URLS";
pub const DELETE_OUTPUT_DIRECTORY: &str = "DELETE_OUTPUT_DIRECTORY";

/// Feed settings, in the order they are reported.
pub const FEED_SETTINGS: [&str; 5] = [
    FEED_ALL_ATOM,
    CATEGORY_FEED_ATOM,
    TRANSLATION_FEED_ATOM,
    AUTHOR_FEED_ATOM,
    AUTHOR_FEED_RSS,
];

/// Every setting the typed view decodes. Anything else is passed through.
pub const RECOGNIZED_SETTINGS: [&str; 22] = [
    AUTHOR,
    SITENAME,
    SITEURL,
    PATH,
    TIMEZONE,
    DEFAULT_LANG,
    THEME,
    FEED_ALL_ATOM,
    CATEGORY_FEED_ATOM,
    TRANSLATION_FEED_ATOM,
    AUTHOR_FEED_ATOM,
    AUTHOR_FEED_RSS,
    PLUGIN_PATHS,
    PLUGINS,
    STATIC_PATHS,
    ARTICLE_URL,
    ARTICLE_SAVE_AS,
    PAGE_URL,
    PAGE_SAVE_AS,
    DEFAULT_PAGINATION,
    RELATIVE_URLS,
    DELETE_OUTPUT_DIRECTORY,
];
