use std::collections::BTreeMap;
use std::fs;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sitecfg_fs::{ConfigStore, Error, NormalizedPath, io};
use tempfile::TempDir;

fn write(temp: &TempDir, name: &str, content: &str) -> NormalizedPath {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    NormalizedPath::new(path)
}

#[test]
fn test_load_toml_layer() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "siteconf.toml",
        r#"
SITENAME = "My Site"
PLUGINS = ["a", "b"]
"#,
    );

    let value: BTreeMap<String, Value> = ConfigStore::new().load(&path).unwrap();

    assert_eq!(value["SITENAME"], json!("My Site"));
    assert_eq!(value["PLUGINS"], json!(["a", "b"]));
}

#[test]
fn test_load_json_keeps_null() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "publishconf.json", r#"{"FEED_ALL_ATOM": null}"#);

    let value: BTreeMap<String, Value> = ConfigStore::new().load(&path).unwrap();

    assert_eq!(value["FEED_ALL_ATOM"], Value::Null);
}

#[test]
fn test_load_yaml_layer() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "siteconf.yml", "DEFAULT_PAGINATION: 5\nRELATIVE_URLS: true\n");

    let value: BTreeMap<String, Value> = ConfigStore::new().load(&path).unwrap();

    assert_eq!(value["DEFAULT_PAGINATION"], json!(5));
    assert_eq!(value["RELATIVE_URLS"], json!(true));
}

#[test]
fn test_load_optional_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.toml"));

    let value: Option<BTreeMap<String, Value>> = ConfigStore::new().load_optional(&path).unwrap();

    assert!(value.is_none());
}

#[test]
fn test_load_optional_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "siteconf.toml", "SITENAME = ");

    let result: sitecfg_fs::Result<Option<BTreeMap<String, Value>>> =
        ConfigStore::new().load_optional(&path);

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "pelicanconf.py", "AUTHOR = 'x'\n");

    let result: sitecfg_fs::Result<Value> = ConfigStore::new().load(&path);

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_write_text_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a/b/pelicanconf.py"));

    io::write_text(&path, "AUTHOR = 'x'\n").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "AUTHOR = 'x'\n");
}
