//! Deployment scenarios
//!
//! An image ships builtin layers; a project mounts its own siteconf and
//! publishconf files into the working directory; the build then exports a
//! settings module for the engine. Each test walks one such scenario end to
//! end through the library crates.

use pretty_assertions::assert_eq;
use serde_json::json;
use sitecfg_core::lint;
use sitecfg_core::render::{ExportFormat, render};
use sitecfg_core::{ConfigResolver, FeedPath, Pagination, Profile, SiteConfig};
use sitecfg_fs::{NormalizedPath, io};
use sitecfg_test_utils::TestSite;

fn resolve(site: &TestSite, profile: Profile) -> sitecfg_core::ResolvedConfig {
    ConfigResolver::new(NormalizedPath::new(site.root()))
        .with_profile(profile)
        .resolve()
        .expect("resolution should succeed")
}

#[test]
fn image_defaults_for_a_development_build() {
    let site = TestSite::new();

    let resolved = resolve(&site, Profile::Development);
    let config = SiteConfig::from_resolved(&resolved).unwrap();

    assert_eq!(config.sitename.as_deref(), Some("Pelican Docker Build"));
    assert_eq!(config.path.as_deref(), Some("content"));
    assert_eq!(config.timezone.as_deref(), Some("UTC"));
    assert_eq!(config.default_lang.as_deref(), Some("en"));
    assert_eq!(config.default_pagination, Pagination::PageSize(10));
    assert!(!config.any_feed_enabled());
    assert!(config.plugin_paths.is_empty());
    assert!(config.static_paths.is_empty());
    assert!(config.theme.is_none());
}

#[test]
fn project_mounts_both_layers_for_a_publish_build() {
    let site = TestSite::new();
    site.mount_base(
        r#"
AUTHOR = "Ada"
SITENAME = "Ada's Notebook"
STATIC_PATHS = ["images", "extra/robots.txt"]
PLUGINS = [
    "pelican.plugins.series",
    "pelican.plugins.tailwindcss",
    "pelican.plugins.search",
]

[TAILWIND]
version = "4.1.12"
plugins = ["@tailwindcss/typography"]
"#,
    );
    site.mount_publish(
        r#"
SITEURL = "https://notebook.example.org"
AUTHOR_FEED_ATOM = "feeds/{slug}.author.atom.xml"
"#,
    );

    let resolved = resolve(&site, Profile::Publish);
    let config = SiteConfig::from_resolved(&resolved).unwrap();

    assert_eq!(config.author.as_deref(), Some("Ada"));
    assert_eq!(config.siteurl, "https://notebook.example.org");
    assert_eq!(config.static_paths, vec!["images", "extra/robots.txt"]);
    assert_eq!(config.plugins.last().map(String::as_str), Some("pelican.plugins.search"));
    assert_eq!(
        config.plugin_setting("TAILWIND"),
        Some(&json!({"version": "4.1.12", "plugins": ["@tailwindcss/typography"]}))
    );
    assert_eq!(
        config.feed_all_atom,
        Some(FeedPath::Path("feeds/all.atom.xml".into()))
    );
    assert_eq!(
        config.author_feed_atom,
        Some(FeedPath::Path("feeds/{slug}.author.atom.xml".into()))
    );
    assert!(config.delete_output_directory);
    assert!(!config.relative_urls);
    assert!(lint::check(&config).is_empty());
}

#[test]
fn exported_module_is_written_for_the_engine() {
    let site = TestSite::new();
    site.mount_base("SITENAME = \"Exported\"\n");

    let resolved = resolve(&site, Profile::Publish);
    let module = render(&resolved, ExportFormat::Python).unwrap();
    io::write_text(&NormalizedPath::new(site.path("publishconf.py")), &module).unwrap();

    site.assert_file_contains("publishconf.py", "SITENAME = 'Exported'\n");
    site.assert_file_contains("publishconf.py", "RELATIVE_URLS = False\n");
    site.assert_file_contains("publishconf.py", "CATEGORY_FEED_ATOM = 'feeds/{slug}.atom.xml'\n");
    site.assert_file_contains("publishconf.py", "AUTHOR_FEED_RSS = False\n");
}

#[test]
fn exported_json_feeds_back_in_as_a_layer() {
    let site = TestSite::new();
    site.mount_base("DEFAULT_PAGINATION = 3\n");

    let first = resolve(&site, Profile::Publish);
    let snapshot = site.mount("snapshot.json", &render(&first, ExportFormat::Json).unwrap());

    // A fresh directory: builtins plus the snapshot reproduce the first result
    let other = TestSite::new();
    let second = ConfigResolver::new(NormalizedPath::new(other.root()))
        .with_layer(NormalizedPath::new(snapshot))
        .resolve()
        .unwrap();

    assert_eq!(second.settings(), first.settings());
}
