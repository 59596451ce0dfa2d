//! Shared test utilities for the sitecfg workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`site`]: [`TestSite`] builder for a working directory with mounted layer files

pub mod site;

pub use site::TestSite;
