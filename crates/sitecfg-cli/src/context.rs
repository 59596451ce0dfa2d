//! Source selection shared by every command

use std::path::PathBuf;

use sitecfg_core::{ConfigResolver, Profile, ResolvedConfig, SiteConfig};
use sitecfg_fs::NormalizedPath;

use crate::error::Result;

/// Where settings come from for this invocation
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub dir: PathBuf,
    pub profile: Profile,
    pub layers: Vec<PathBuf>,
}

impl SiteContext {
    pub fn new(dir: PathBuf, publish: bool, layers: Vec<PathBuf>) -> Self {
        let profile = if publish {
            Profile::Publish
        } else {
            Profile::Development
        };
        Self {
            dir,
            profile,
            layers,
        }
    }

    /// Resolver over the builtin layers, mounted files in `dir`, and explicit layers.
    pub fn resolver(&self) -> ConfigResolver {
        self.layers.iter().fold(
            ConfigResolver::new(NormalizedPath::new(&self.dir)).with_profile(self.profile),
            |resolver, layer| resolver.with_layer(NormalizedPath::new(layer)),
        )
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        Ok(self.resolver().resolve()?)
    }

    /// Resolve and decode in one step.
    pub fn site(&self) -> Result<(ResolvedConfig, SiteConfig)> {
        let resolved = self.resolve()?;
        let site = SiteConfig::from_resolved(&resolved)?;
        Ok((resolved, site))
    }
}
