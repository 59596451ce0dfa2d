//! Filesystem helpers for sitecfg
//!
//! Path normalisation, format-detecting loading of layer files and
//! atomic writes for exported settings.

pub mod error;
pub mod format;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use format::Format;
pub use path::NormalizedPath;
pub use store::ConfigStore;
