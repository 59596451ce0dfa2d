//! Command implementations for sitecfg-cli

pub mod check;
pub mod export;
pub mod inspect;
pub mod resolve;
pub mod url;

pub use check::run_check;
pub use export::run_export;
pub use inspect::{run_explain, run_get, run_layers};
pub use resolve::run_resolve;
pub use url::{UrlRequest, run_url};
