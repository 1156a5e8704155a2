//! The stateful path model.

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::types::{Param, ParamMap};
use crate::util::{flatten_params, pair_tokens, split_tokens, strip_delimiters};
use crate::PathBuilderError;

/// Default token delimiter.
pub const DEFAULT_DELIMITER: &str = "/";

/// A path made of alternating key/value segments, e.g. `/type/donut/flavor/vanilla/`.
///
/// The builder keeps three views of the same state in sync: the delimited
/// string ([`path`](Self::path)), the flat token sequence
/// ([`tokens`](Self::tokens)) and the key/value mapping
/// ([`to_mapping`](Self::to_mapping)). The key/value slots are the source of
/// truth; the mapping is built lazily and dropped on every mutation.
///
/// Setters return `&mut Self` so calls can be chained.
///
/// # Example
///
/// ```
/// use path_builder::PathBuilder;
///
/// let mut builder = PathBuilder::new();
/// builder.set_path("/type/donut/flavor/vanilla/").unwrap();
/// assert_eq!(builder.param("type"), Some("donut"));
///
/// builder.set_param("flavor", "chocolate").remove_param("type");
/// assert_eq!(builder.path(), "/flavor/chocolate/");
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    delimiter: String,
    prefix: String,
    ordering: Vec<String>,
    params: Vec<Param>,
    leading_delimiter: bool,
    trailing_delimiter: bool,
    mapping: OnceCell<ParamMap>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prefix: String::new(),
            ordering: Vec::new(),
            params: Vec::new(),
            leading_delimiter: false,
            trailing_delimiter: false,
            mapping: OnceCell::new(),
        }
    }
}

impl PathBuilder {
    /// Create a builder with the `/` delimiter, no prefix, no ordering and
    /// an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Replace the delimiter.
    ///
    /// This discards the current path, including the recorded leading and
    /// trailing delimiters, since it cannot be re-tokenized without the
    /// original string.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) -> &mut Self {
        self.delimiter = delimiter.into();
        if !self.params.is_empty() {
            debug!(
                "delimiter changed to {:?}, discarding {} params",
                self.delimiter,
                self.params.len()
            );
        }
        self.params.clear();
        self.leading_delimiter = false;
        self.trailing_delimiter = false;
        self.invalidate();
        self
    }

    /// Keys emitted first, in this order, by [`path`](Self::path).
    pub fn ordering(&self) -> &[String] {
        &self.ordering
    }

    pub fn set_ordering<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ordering = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Set the string expected to lead every path. The current params are
    /// left untouched.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Whether [`path`](Self::path) starts with a delimiter.
    pub fn has_leading_delimiter(&self) -> bool {
        self.leading_delimiter
    }

    pub fn set_leading_delimiter(&mut self, leading: bool) -> &mut Self {
        self.leading_delimiter = leading;
        self
    }

    /// Whether [`path`](Self::path) ends with a delimiter.
    pub fn has_trailing_delimiter(&self) -> bool {
        self.trailing_delimiter
    }

    pub fn set_trailing_delimiter(&mut self, trailing: bool) -> &mut Self {
        self.trailing_delimiter = trailing;
        self
    }

    /// Get the value of `key`, or `None` if it is not part of the path.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.to_mapping().get(key).and_then(|value| value.as_deref())
    }

    /// Set `key` to `value`.
    ///
    /// Every occurrence of `key` in a key slot gets the new value; a value
    /// slot holding the same string is never mistaken for the key. When the
    /// key is not present it is appended to the end of the path.
    pub fn set_param(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        let mut found = false;
        for param in self.params.iter_mut() {
            if param.0 == key {
                param.1 = Some(value.clone());
                found = true;
            }
        }
        if !found {
            self.params.push((key.to_string(), Some(value)));
        }
        self.invalidate();
        self
    }

    /// Remove every occurrence of `key` together with its value.
    ///
    /// Removing a key that is not present does nothing.
    pub fn remove_param(&mut self, key: &str) -> &mut Self {
        let before = self.params.len();
        self.params.retain(|(k, _)| k != key);
        let removed = before - self.params.len();
        if removed > 0 {
            debug!("removed {} occurrence(s) of param {:?}", removed, key);
        }
        self.invalidate();
        self
    }

    /// Set `key` to `value`, or remove it when `value` is `None`.
    pub fn set_param_opt<S: Into<String>>(&mut self, key: &str, value: Option<S>) -> &mut Self {
        match value {
            Some(value) => self.set_param(key, value),
            None => self.remove_param(key),
        }
    }

    /// Render the path.
    ///
    /// Keys from [`ordering`](Self::ordering) come first, then the remaining
    /// keys in mapping order. Keys whose value is empty or missing are left
    /// out. The prefix is prepended.
    pub fn path(&self) -> String {
        let mut remaining: IndexMap<&str, &str> = self
            .to_mapping()
            .iter()
            .filter_map(|(key, value)| match value.as_deref() {
                Some(value) if !value.is_empty() => Some((key.as_str(), value)),
                _ => None,
            })
            .collect();

        let mut out = String::new();
        if self.leading_delimiter {
            out.push_str(&self.delimiter);
        }
        for key in &self.ordering {
            if let Some(value) = remaining.shift_remove(key.as_str()) {
                self.push_segment(&mut out, key, value);
            }
        }
        for (key, value) in remaining {
            self.push_segment(&mut out, key, value);
        }
        if !self.trailing_delimiter && out.ends_with(self.delimiter.as_str()) {
            out.truncate(out.len() - self.delimiter.len());
        }

        let mut path = String::with_capacity(self.prefix.len() + out.len());
        path.push_str(&self.prefix);
        path.push_str(&out);
        path
    }

    /// Parse `path`, replacing the current params.
    ///
    /// # Errors
    ///
    /// Returns [`PathBuilderError::InvalidPrefix`] if a prefix is set and
    /// `path` does not start with it. The builder is left unchanged.
    pub fn set_path(&mut self, path: &str) -> Result<&mut Self, PathBuilderError> {
        let path = if self.prefix.is_empty() {
            path
        } else {
            path.strip_prefix(self.prefix.as_str())
                .ok_or_else(|| PathBuilderError::InvalidPrefix {
                    prefix: self.prefix.clone(),
                    path: path.to_string(),
                })?
        };

        let (rest, leading, trailing) = strip_delimiters(path, &self.delimiter);
        self.leading_delimiter = leading;
        self.trailing_delimiter = trailing;
        self.params = pair_tokens(split_tokens(rest, &self.delimiter));
        self.invalidate();
        debug!("parsed path {:?} into {} params", path, self.params.len());
        Ok(self)
    }

    /// The key/value mapping view.
    ///
    /// The mapping is cached until the next mutation. A trailing key without
    /// a value token maps to `None`.
    pub fn to_mapping(&self) -> &ParamMap {
        self.mapping.get_or_init(|| {
            trace!("building mapping from {} params", self.params.len());
            let mut mapping = ParamMap::with_capacity(self.params.len());
            for (key, value) in &self.params {
                mapping.insert(key.clone(), value.clone());
            }
            mapping
        })
    }

    /// The flat alternating key/value token sequence.
    pub fn tokens(&self) -> Vec<&str> {
        flatten_params(&self.params)
    }

    fn push_segment(&self, out: &mut String, key: &str, value: &str) {
        out.push_str(key);
        out.push_str(&self.delimiter);
        out.push_str(value);
        out.push_str(&self.delimiter);
    }

    fn invalidate(&mut self) {
        self.mapping.take();
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for PathBuilder {
    type Err = PathBuilderError;

    /// Parse with the default configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = Self::new();
        builder.set_path(s)?;
        Ok(builder)
    }
}
