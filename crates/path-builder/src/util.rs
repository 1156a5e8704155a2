//! Tokenizer helpers shared by the builder.

use crate::types::Param;

/// Strip one leading and one trailing `delimiter` from `path`.
///
/// Returns the remainder together with whether a leading and a trailing
/// delimiter were present. Both checks look at the original string, so a
/// path consisting of a single delimiter reports both and leaves `""`.
///
/// # Example
///
/// ```
/// use path_builder::util::strip_delimiters;
///
/// assert_eq!(strip_delimiters("/a/b/", "/"), ("a/b", true, true));
/// assert_eq!(strip_delimiters("a/b", "/"), ("a/b", false, false));
/// assert_eq!(strip_delimiters("/", "/"), ("", true, true));
/// ```
pub fn strip_delimiters<'a>(path: &'a str, delimiter: &str) -> (&'a str, bool, bool) {
    let leading = path.starts_with(delimiter);
    let trailing = path.ends_with(delimiter);

    let mut rest = path;
    if leading {
        rest = &rest[delimiter.len()..];
    }
    if trailing {
        // The trailing delimiter may overlap the one already removed.
        rest = if rest.len() >= delimiter.len() {
            &rest[..rest.len() - delimiter.len()]
        } else {
            ""
        };
    }
    (rest, leading, trailing)
}

/// Split `s` on `delimiter` into tokens.
///
/// An empty input yields a single empty token. An empty delimiter splits
/// into individual characters, and an empty input then yields no tokens.
///
/// # Example
///
/// ```
/// use path_builder::util::split_tokens;
///
/// assert_eq!(split_tokens("a/b", "/"), vec!["a", "b"]);
/// assert_eq!(split_tokens("", "/"), vec![""]);
/// assert_eq!(split_tokens("ab", ""), vec!["a", "b"]);
/// ```
pub fn split_tokens(s: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(delimiter).map(str::to_string).collect()
}

/// Group a flat token sequence into key/value slots.
///
/// Tokens at even positions become keys, the token after each key its value.
/// A trailing key without a value gets `None`.
pub fn pair_tokens(tokens: Vec<String>) -> Vec<Param> {
    let mut params = Vec::with_capacity(tokens.len().div_ceil(2));
    let mut iter = tokens.into_iter();
    while let Some(key) = iter.next() {
        params.push((key, iter.next()));
    }
    params
}

/// Flatten key/value slots back into the alternating token sequence.
pub fn flatten_params(params: &[Param]) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(params.len() * 2);
    for (key, value) in params {
        tokens.push(key.as_str());
        if let Some(value) = value {
            tokens.push(value.as_str());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("/a/b/", "/"), ("a/b", true, true));
        assert_eq!(strip_delimiters("/a/b", "/"), ("a/b", true, false));
        assert_eq!(strip_delimiters("a/b/", "/"), ("a/b", false, true));
        assert_eq!(strip_delimiters("", "/"), ("", false, false));
        assert_eq!(strip_delimiters("//", "/"), ("", true, true));
    }

    #[test]
    fn test_strip_delimiters_multi_char() {
        assert_eq!(strip_delimiters("::a::b::", "::"), ("a::b", true, true));
        assert_eq!(strip_delimiters("::", "::"), ("", true, true));
        // Overlapping leading and trailing occurrences.
        assert_eq!(strip_delimiters("aaa", "aa"), ("", true, true));
        assert_eq!(strip_delimiters(":a", "::"), (":a", false, false));
    }

    #[test]
    fn test_strip_delimiters_empty_delimiter() {
        assert_eq!(strip_delimiters("abc", ""), ("abc", true, true));
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("a/b/c/d", "/"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_tokens("a//b", "/"), vec!["a", "", "b"]);
        assert_eq!(split_tokens("a::b", "::"), vec!["a", "b"]);
        assert_eq!(split_tokens("", "/"), vec![""]);
        assert_eq!(split_tokens("", ""), Vec::<String>::new());
    }

    #[test]
    fn test_pair_tokens() {
        assert_eq!(
            pair_tokens(strings(&["a", "1", "b", "2"])),
            vec![
                ("a".to_string(), Some("1".to_string())),
                ("b".to_string(), Some("2".to_string())),
            ]
        );
        assert_eq!(
            pair_tokens(strings(&["a", "1", "b"])),
            vec![("a".to_string(), Some("1".to_string())), ("b".to_string(), None)]
        );
        assert_eq!(pair_tokens(strings(&[""])), vec![(String::new(), None)]);
        assert!(pair_tokens(Vec::new()).is_empty());
    }

    #[test]
    fn test_flatten_params() {
        let params = pair_tokens(strings(&["a", "1", "b"]));
        assert_eq!(flatten_params(&params), vec!["a", "1", "b"]);
    }
}
