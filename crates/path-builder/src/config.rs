//! Serializable builder configuration.

use serde::{Deserialize, Serialize};

use crate::builder::{PathBuilder, DEFAULT_DELIMITER};

/// The configurable parts of a [`PathBuilder`], without any path state.
///
/// Missing fields take their defaults when deserializing.
///
/// # Example
///
/// ```
/// use path_builder::{PathBuilder, PathBuilderConfig};
///
/// let config = PathBuilderConfig {
///     prefix: "#!".to_string(),
///     ordering: vec!["page".to_string()],
///     ..Default::default()
/// };
/// let mut builder = PathBuilder::with_config(config);
/// builder.set_path("#!/sort/asc/page/2").unwrap();
/// assert_eq!(builder.path(), "#!/page/2/sort/asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathBuilderConfig {
    pub delimiter: String,
    pub prefix: String,
    pub ordering: Vec<String>,
}

impl Default for PathBuilderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prefix: String::new(),
            ordering: Vec::new(),
        }
    }
}

impl PathBuilder {
    /// Create an empty builder from `config`.
    pub fn with_config(config: PathBuilderConfig) -> Self {
        let mut builder = Self::new();
        builder
            .set_delimiter(config.delimiter)
            .set_prefix(config.prefix)
            .set_ordering(config.ordering);
        builder
    }

    /// Snapshot the current configuration.
    pub fn config(&self) -> PathBuilderConfig {
        PathBuilderConfig {
            delimiter: self.delimiter().to_string(),
            prefix: self.prefix().to_string(),
            ordering: self.ordering().to_vec(),
        }
    }
}
