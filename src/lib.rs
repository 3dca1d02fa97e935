//! Build nested objects and arrays from flat form-data entries.
//!
//! HTML forms submit a flat list of `(path, value)` pairs. Each path is a
//! small grammar describing where the value belongs in a nested structure,
//! with an optional leading sigil selecting a scalar coercion:
//!
//! ```text
//! user.name=Ada           {"user": {"name": "Ada"}}
//! tags[]=a  tags[]=b      {"tags": ["a", "b"]}
//! rows[1].id=7            explicit index; gaps are compacted at the end
//! +age=36  &tos=on  -x=   number, boolean and null sigils
//! ```
//!
//! [`parse`] consumes any iterator of [`Entry`] values and returns the
//! assembled [`Value`] tree, or an [`Error`] naming the path prefix at
//! which two entries clashed. Within one array, push (`[]`) and indexed
//! (`[n]`) addressing are mutually exclusive; the first write decides.
//!
//! ```
//! use formtree::{parse, Entry, Value};
//!
//! let tree = parse([
//!     Entry::text("user.name", "Ada"),
//!     Entry::text("user.langs[]", "rust"),
//!     Entry::text("user.langs[]", "fortran"),
//! ])?;
//! assert_eq!(
//!     tree.get("user").and_then(|u| u.get("name")),
//!     Some(&Value::from("Ada"))
//! );
//! # Ok::<(), formtree::Error>(())
//! ```

pub mod entry;
pub mod error;
pub mod options;
pub mod transform;
pub mod value;

mod scanner;
mod tree;

pub use crate::entry::{Entry, RawValue};
pub use crate::error::Error;
pub use crate::options::{ParseOptions, TransformEntry};
pub use crate::transform::default_transform;
pub use crate::value::{Binary, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses entries with default options.
pub fn parse<I>(entries: I) -> Result<Value>
where
    I: IntoIterator<Item = Entry>,
{
    parse_with_options(entries, &ParseOptions::default())
}

/// Parses entries into a nested [`Value::Object`] tree.
///
/// Entries are materialized up front and processed in iteration order,
/// which is what makes first-write-wins and array-mode establishment
/// deterministic. The call either returns the complete tree or fails
/// atomically with the first conflict.
pub fn parse_with_options<I>(entries: I, options: &ParseOptions) -> Result<Value>
where
    I: IntoIterator<Item = Entry>,
{
    let entries: Vec<Entry> = entries.into_iter().collect();
    let mut tree = tree::Tree::new();
    for entry in entries {
        if options.remove_empty_string && entry.value.is_empty_text() {
            continue;
        }
        let (path, leaf) = match &options.transform_entry {
            Some(transform) => transform(entry, &default_transform),
            None => default_transform(entry),
        };
        let segments = scanner::scan_path(&path);
        tree.insert(&segments, leaf)?;
    }
    tree.compact();
    Ok(tree.into_value())
}
