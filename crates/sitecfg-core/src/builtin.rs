//! Layers baked into the image
//!
//! These mirror the two settings files a container image ships with: a base
//! layer for development builds and a publish layer applied on top of it for
//! production builds.

use sitecfg_fs::Format;

use crate::constants::{BASE_LAYER, PUBLISH_LAYER};
use crate::{Layer, Result};

/// Source text of the builtin base layer.
pub const BASE_LAYER_TOML: &str = include_str!("../layers/siteconf.toml");

/// Source text of the builtin publish layer.
pub const PUBLISH_LAYER_TOML: &str = include_str!("../layers/publishconf.toml");

/// The builtin base layer (`builtin:siteconf`).
pub fn base_layer() -> Result<Layer> {
    Layer::parse(BASE_LAYER, Format::Toml, BASE_LAYER_TOML)
}

/// The builtin publish layer (`builtin:publishconf`).
pub fn publish_layer() -> Result<Layer> {
    Layer::parse(PUBLISH_LAYER, Format::Toml, PUBLISH_LAYER_TOML)
}
