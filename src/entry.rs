use crate::value::Binary;

/// One raw form entry: the path it was submitted under and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub path: String,
    pub value: RawValue,
}

/// The value side of an entry before transformation. Form submissions only
/// ever carry text fields or file parts.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Text(String),
    Binary(Binary),
}

impl Entry {
    pub fn new(path: impl Into<String>, value: RawValue) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    pub fn text(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(path, RawValue::Text(text.into()))
    }

    pub fn binary(path: impl Into<String>, payload: Binary) -> Self {
        Self::new(path, RawValue::Binary(payload))
    }
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            RawValue::Binary(_) => None,
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, RawValue::Text(text) if text.is_empty())
    }
}

impl From<(&str, &str)> for Entry {
    fn from((path, text): (&str, &str)) -> Self {
        Entry::text(path, text)
    }
}
