//! Type definitions for parameter paths.

use indexmap::IndexMap;

/// A key slot together with its value slot.
///
/// The value is `None` for a trailing key that has no value token, which is
/// what an odd number of tokens produces.
pub type Param = (String, Option<String>);

/// The mapping view of a path.
///
/// Iterates in first-insertion order. A key that occurs more than once keeps
/// the position of its first occurrence and the value of its last.
pub type ParamMap = IndexMap<String, Option<String>>;
