//! [`TestSite`] builder for layer-resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary working directory that layer files can be mounted into.
///
/// # Example
///
/// ```rust,no_run
/// use sitecfg_test_utils::TestSite;
///
/// let site = TestSite::new();
/// site.mount("siteconf.toml", "SITENAME = \"Blog\"\n");
/// site.assert_file_exists("siteconf.toml");
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty working directory.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestSite::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write a layer file (or any file) relative to the root, creating parents.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn mount(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestSite::mount: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestSite::mount: failed to write {}: {e}", path.display()));
        path
    }

    /// Mount a project base layer as `siteconf.toml`.
    pub fn mount_base(&self, content: &str) -> PathBuf {
        self.mount("siteconf.toml", content)
    }

    /// Mount a project publish layer as `publishconf.toml`.
    pub fn mount_publish(&self, content: &str) -> PathBuf {
        self.mount("publishconf.toml", content)
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let path = self.path(name);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that the file at `name` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            name,
            content,
            file_content
        );
    }
}
