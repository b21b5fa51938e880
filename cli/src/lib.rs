//! costar-cli: front end for costar-core.
//!
//! Loads a movie/cast JSON dataset, resolves settings from flags,
//! environment and an optional TOML file, runs path queries and renders the
//! results as text or JSON. The graph is rebuilt from the dataset on every
//! invocation.

pub mod config;
pub mod error;
pub mod load;
pub mod path;
pub mod query;
pub mod relationships;
pub mod status;
pub mod util;

pub use config::{Overrides, Settings};
pub use error::CliError;
pub use load::Session;
pub use query::{execute, Query};
pub use util::OutputFormat;
