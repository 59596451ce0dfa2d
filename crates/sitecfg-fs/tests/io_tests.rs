use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use sitecfg_fs::{Error, NormalizedPath, io};
use tempfile::TempDir;

fn temp_leftovers(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect()
}

#[test]
fn test_overwrite_atomically() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("out/settings.json"));

    io::write_text(&path, "{\"SITENAME\": \"first\"}\n").unwrap();
    io::write_text(&path, "{\"SITENAME\": \"second\"}\n").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "{\"SITENAME\": \"second\"}\n");
    assert_eq!(temp_leftovers(&temp.path().join("out")), Vec::<String>::new());
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    // A non-empty directory at the target makes the final rename fail.
    let target = temp.path().join("publishconf.py");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    let result = io::write_text(&NormalizedPath::new(&target), "SITEURL = ''\n");

    assert!(matches!(result, Err(Error::Io { .. })), "got: {result:?}");
    assert_eq!(temp_leftovers(temp.path()), Vec::<String>::new());
    assert!(target.join("keep").is_file());
}
