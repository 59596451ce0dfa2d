//! Layered settings resolution
//!
//! Settings come from an ordered list of layers. Resolution is a plain
//! last-write-wins fold by name: a later layer's value replaces the earlier
//! one whole, including sequences and nested mappings.

use std::collections::BTreeMap;

use serde_json::Value;
use sitecfg_fs::{Format, NormalizedPath};

use crate::constants::{BASE_LAYER, PUBLISH_LAYER};
use crate::{Layer, Result, Settings, builtin};

/// Which builtin layers participate in resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Base layers only
    #[default]
    Development,
    /// Base layers, then publish layers
    Publish,
}

/// The final mapping after folding every layer, with provenance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    settings: Settings,
    /// Per name, the labels of every layer that defined it, in order
    provenance: BTreeMap<String, Vec<String>>,
    /// Labels of the layers applied, in order
    layers: Vec<String>,
}

impl ResolvedConfig {
    /// Value of a setting, or `None` if no layer defined it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains_key(name)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Every layer that defined `name`, earliest first.
    pub fn provenance(&self, name: &str) -> Option<&[String]> {
        self.provenance.get(name).map(Vec::as_slice)
    }

    /// The layer whose value for `name` won.
    pub fn winner(&self, name: &str) -> Option<&str> {
        self.provenance(name)
            .and_then(|labels| labels.last())
            .map(String::as_str)
    }

    /// Labels of the layers that were applied, in precedence order.
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    fn apply(&mut self, layer: &Layer) {
        let label = layer.label();
        tracing::debug!(layer = %label, settings = layer.len(), "Applying layer");
        for (name, value) in layer.settings() {
            if let Some(previous) = self.settings.insert(name.clone(), value.clone()) {
                if &previous != value {
                    tracing::trace!(%name, layer = %label, "Overriding setting");
                }
            }
            self.provenance
                .entry(name.clone())
                .or_default()
                .push(label.clone());
        }
        self.layers.push(label);
    }
}

/// Fold layers into one mapping; later layers win by name.
///
/// This is a pure function of its input. An absent source is simply not in
/// the slice.
pub fn resolve(layers: &[Layer]) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    for layer in layers {
        resolved.apply(layer);
    }
    resolved
}

/// Kind of a planned source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Embedded layer
    Builtin,
    /// Optional file a project mounts into the working directory
    Mounted,
    /// File named explicitly by the caller; must exist
    Explicit,
}

/// One entry in the ordered source plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub kind: SourceKind,
    /// File on disk, for mounted and explicit sources
    pub path: Option<NormalizedPath>,
    /// Whether the source will contribute (builtins always do)
    pub present: bool,
}

/// Resolves settings for a working directory
///
/// Sources are applied in this order:
/// 1. builtin base layer
/// 2. `<root>/siteconf.{toml,json,yaml,yml}` if mounted
/// 3. builtin publish layer (publish profile only)
/// 4. `<root>/publishconf.{toml,json,yaml,yml}` if mounted (publish profile only)
/// 5. explicit layer files, in the order given
pub struct ConfigResolver {
    root: NormalizedPath,
    profile: Profile,
    extra_layers: Vec<NormalizedPath>,
}

impl ConfigResolver {
    /// Create a resolver for the given working directory, development profile.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            profile: Profile::Development,
            extra_layers: Vec::new(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Append an explicit layer file, applied after every other source.
    pub fn with_layer(mut self, path: NormalizedPath) -> Self {
        self.extra_layers.push(path);
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Find a mounted layer file by stem, probing each supported extension.
    fn mounted_layer(&self, stem: &str) -> Option<NormalizedPath> {
        let mut found = Format::ALL
            .iter()
            .flat_map(|format| format.extensions())
            .map(|ext| self.root.join(&format!("{stem}.{ext}")))
            .filter(NormalizedPath::is_file);
        let first = found.next()?;
        for ignored in found {
            tracing::warn!(used = %first, %ignored, "Several mounted files for one layer; using the first");
        }
        Some(first)
    }

    fn mounted_source(&self, stem: &str) -> Source {
        let path = self.mounted_layer(stem);
        Source {
            name: stem.to_string(),
            kind: SourceKind::Mounted,
            present: path.is_some(),
            path: path.or_else(|| Some(self.root.join(&format!("{stem}.toml")))),
        }
    }

    fn builtin_source(name: &str) -> Source {
        Source {
            name: name.to_string(),
            kind: SourceKind::Builtin,
            path: None,
            present: true,
        }
    }

    /// The ordered source plan, including mounted files that are absent.
    pub fn sources(&self) -> Vec<Source> {
        let mut sources = vec![
            Self::builtin_source(BASE_LAYER),
            self.mounted_source(BASE_LAYER),
        ];
        if self.profile == Profile::Publish {
            sources.push(Self::builtin_source(PUBLISH_LAYER));
            sources.push(self.mounted_source(PUBLISH_LAYER));
        }
        for path in &self.extra_layers {
            sources.push(Source {
                name: path.file_stem().unwrap_or(path.as_str()).to_string(),
                kind: SourceKind::Explicit,
                present: path.is_file(),
                path: Some(path.clone()),
            });
        }
        sources
    }

    /// Load every contributing layer, in precedence order.
    pub fn load_layers(&self) -> Result<Vec<Layer>> {
        let mut layers = Vec::new();
        for source in self.sources() {
            match (&source.kind, &source.path) {
                (SourceKind::Builtin, _) if source.name == PUBLISH_LAYER => {
                    layers.push(builtin::publish_layer()?);
                }
                (SourceKind::Builtin, _) => layers.push(builtin::base_layer()?),
                (SourceKind::Mounted, Some(path)) => match Layer::load_optional(path)? {
                    Some(layer) => {
                        tracing::debug!(%path, "Loaded mounted layer");
                        layers.push(layer);
                    }
                    None => tracing::debug!(%path, "No mounted layer found, skipping"),
                },
                (SourceKind::Mounted, None) => {}
                (SourceKind::Explicit, Some(path)) => {
                    tracing::debug!(%path, "Loading explicit layer");
                    layers.push(Layer::load(path)?);
                }
                (SourceKind::Explicit, None) => {}
            }
        }
        Ok(layers)
    }

    /// Load and fold every source.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let layers = self.load_layers()?;
        let resolved = resolve(&layers);
        tracing::debug!(
            layers = resolved.layers().len(),
            settings = resolved.len(),
            "Resolved settings"
        );
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayerOrigin;
    use serde_json::json;
    use tempfile::TempDir;

    fn layer(name: &str, settings: Value) -> Layer {
        let Value::Object(map) = settings else {
            panic!("test layer must be an object");
        };
        Layer::new(name, LayerOrigin::Builtin, map.into_iter().collect())
    }

    #[test]
    fn resolve_of_nothing_is_empty() {
        let resolved = resolve(&[]);
        assert!(resolved.is_empty());
        assert!(resolved.layers().is_empty());
    }

    #[test]
    fn later_layer_replaces_sequences_whole() {
        let base = layer("base", json!({"PLUGINS": ["a", "b"], "PATH": "content"}));
        let over = layer("over", json!({"PLUGINS": ["c"]}));

        let resolved = resolve(&[base, over]);

        assert_eq!(resolved.get("PLUGINS"), Some(&json!(["c"])));
        assert_eq!(resolved.get("PATH"), Some(&json!("content")));
        assert_eq!(resolved.winner("PLUGINS"), Some("builtin:over"));
        assert_eq!(
            resolved.provenance("PLUGINS"),
            Some(&["builtin:base".to_string(), "builtin:over".to_string()][..])
        );
    }

    #[test]
    fn nested_mappings_are_not_deep_merged() {
        let base = layer("base", json!({"TAILWIND": {"version": "4", "plugins": ["x"]}}));
        let over = layer("over", json!({"TAILWIND": {"version": "5"}}));

        let resolved = resolve(&[base, over]);

        assert_eq!(resolved.get("TAILWIND"), Some(&json!({"version": "5"})));
    }

    #[test]
    fn resolver_without_mounted_files_uses_builtins() {
        let temp = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(NormalizedPath::new(temp.path()));

        let sources = resolver.sources();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].present);
        assert!(!sources[1].present);

        let resolved = resolver.resolve().unwrap();
        assert_eq!(resolved.layers(), &["builtin:siteconf".to_string()]);
    }

    #[test]
    fn publish_profile_adds_publish_sources() {
        let temp = TempDir::new().unwrap();
        let resolver =
            ConfigResolver::new(NormalizedPath::new(temp.path())).with_profile(Profile::Publish);

        let names: Vec<String> = resolver.sources().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["siteconf", "siteconf", "publishconf", "publishconf"]);
    }
}
