//! Layered settings for a containerised static-site build
//!
//! An image ships a base layer of defaults and a publish layer for
//! production builds; a deploying project may mount its own layer files over
//! them. This crate folds those layers into one immutable mapping:
//!
//! - **Layers**: named setting bindings from builtin text or files ([`Layer`])
//! - **Resolution**: ordered last-write-wins fold with provenance ([`resolve`], [`ConfigResolver`])
//! - **Typed view**: [`SiteConfig`] decoded once and passed to consumers explicitly
//! - **Checks**: URL/save-path consistency and other operator mistakes ([`lint`])
//! - **Export**: the resolved mapping as a Python settings module, TOML or JSON ([`render`])
//!
//! # Example
//!
//! ```ignore
//! use sitecfg_core::{ConfigResolver, Profile, SiteConfig};
//! use sitecfg_fs::NormalizedPath;
//!
//! let resolved = ConfigResolver::new(NormalizedPath::new("/site"))
//!     .with_profile(Profile::Publish)
//!     .resolve()?;
//! let site = SiteConfig::from_resolved(&resolved)?;
//! assert!(site.delete_output_directory);
//! ```

pub mod builtin;
pub mod constants;
pub mod error;
pub mod layer;
pub mod lint;
pub mod render;
pub mod resolver;
pub mod site;
pub mod template;

pub use error::{Error, Result};
pub use layer::{Layer, LayerOrigin, Settings};
pub use lint::{Finding, Severity};
pub use render::ExportFormat;
pub use resolver::{ConfigResolver, Profile, ResolvedConfig, Source, SourceKind, resolve};
pub use site::{ContentKind, FeedPath, Pagination, SiteConfig};
pub use template::{TemplateContext, UrlTemplate};
