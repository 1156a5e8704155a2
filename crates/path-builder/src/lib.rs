//! Read and rewrite key/value parameters in delimiter-separated paths.
//!
//! A path such as `/type/donut/flavor/vanilla/` is treated as alternating
//! key/value segments. [`PathBuilder`] parses such a string, exposes its
//! parameters as a mapping, lets individual parameters be changed or removed,
//! and renders the path back with the same delimiter boundaries, an optional
//! fixed prefix and an optional key ordering.
//!
//! This is meant for client-side routing, where a single parameter of the
//! current route needs to change without string surgery.
//!
//! # Example
//!
//! ```
//! use path_builder::PathBuilder;
//!
//! let mut builder = PathBuilder::new();
//! builder.set_prefix("#!");
//! builder.set_path("#!/type/donut/flavor/vanilla/").unwrap();
//!
//! builder.set_param("flavor", "chocolate");
//! assert_eq!(builder.path(), "#!/type/donut/flavor/chocolate/");
//!
//! builder.set_ordering(["flavor"]).set_param("size", "large");
//! assert_eq!(builder.path(), "#!/flavor/chocolate/type/donut/size/large/");
//!
//! // A path that does not carry the prefix is rejected.
//! assert!(builder.set_path("/type/cake/").is_err());
//! ```

use thiserror::Error;

pub mod builder;
pub use builder::{PathBuilder, DEFAULT_DELIMITER};

pub mod config;
pub use config::PathBuilderConfig;

pub mod types;
pub use types::{Param, ParamMap};

pub mod util;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathBuilderError {
    #[error("prefix {prefix:?} is set, but could not be found in path {path:?}")]
    InvalidPrefix { prefix: String, path: String },
}
