use std::fmt;

use crate::entry::Entry;
use crate::value::Value;

/// Per-entry transform hook. Receives the raw entry plus the default
/// transform, so an implementation can handle a subset of paths and
/// delegate the rest:
///
/// ```
/// use formtree::{ParseOptions, Value};
///
/// let options = ParseOptions::new().with_transform_entry(|entry, default| {
///     if entry.path == "count" {
///         let n = entry.value.as_text().and_then(|t| t.parse().ok());
///         ("count".to_string(), Value::Number(n.unwrap_or(f64::NAN)))
///     } else {
///         default(entry)
///     }
/// });
/// # let _ = options;
/// ```
pub type TransformEntry =
    Box<dyn Fn(Entry, &dyn Fn(Entry) -> (String, Value)) -> (String, Value)>;

#[derive(Default)]
pub struct ParseOptions {
    /// Skip entries whose value is the empty text string, before any
    /// transformation runs.
    pub remove_empty_string: bool,
    /// Replaces the default path/value derivation (see [`TransformEntry`]).
    pub transform_entry: Option<TransformEntry>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_empty_string(mut self, remove_empty_string: bool) -> Self {
        self.remove_empty_string = remove_empty_string;
        self
    }

    pub fn with_transform_entry<F>(mut self, transform: F) -> Self
    where
        F: Fn(Entry, &dyn Fn(Entry) -> (String, Value)) -> (String, Value) + 'static,
    {
        self.transform_entry = Some(Box::new(transform));
        self
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("remove_empty_string", &self.remove_empty_string)
            .field(
                "transform_entry",
                &self.transform_entry.as_ref().map(|_| ".."),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_builder_defaults() {
        let options = ParseOptions::new();
        assert!(!options.remove_empty_string);
        assert!(options.transform_entry.is_none());

        let options = ParseOptions::new()
            .with_remove_empty_string(true)
            .with_transform_entry(|entry, default| default(entry));
        assert!(options.remove_empty_string);
        assert!(options.transform_entry.is_some());
    }
}
