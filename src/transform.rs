use crate::entry::{Entry, RawValue};
use crate::value::Value;

const NUMBER_SIGIL: char = '+';
const BOOLEAN_SIGIL: char = '&';
const NULL_SIGIL: char = '-';

/// Default entry transform: strips a leading type sigil from the path and
/// coerces the value accordingly. Without a sigil both path and value pass
/// through unchanged, binary payloads included.
///
/// Custom transforms installed through
/// [`ParseOptions::with_transform_entry`](crate::ParseOptions::with_transform_entry)
/// receive this function as their second argument and can delegate to it
/// for entries they do not handle.
pub fn default_transform(entry: Entry) -> (String, Value) {
    let Entry { path, value } = entry;
    if let Some(rest) = path.strip_prefix(NUMBER_SIGIL) {
        (rest.to_string(), Value::Number(coerce_number(&value)))
    } else if let Some(rest) = path.strip_prefix(BOOLEAN_SIGIL) {
        (rest.to_string(), Value::Bool(coerce_boolean(&value)))
    } else if let Some(rest) = path.strip_prefix(NULL_SIGIL) {
        (rest.to_string(), Value::Null)
    } else {
        let leaf = match value {
            RawValue::Text(text) => Value::Text(text),
            RawValue::Binary(payload) => Value::Binary(payload),
        };
        (path, leaf)
    }
}

/// Text that is not a valid numeric literal coerces to NaN, never an
/// error. Binary payloads are never numeric.
fn coerce_number(value: &RawValue) -> f64 {
    match value {
        RawValue::Text(text) => text.parse().unwrap_or(f64::NAN),
        RawValue::Binary(_) => f64::NAN,
    }
}

/// `"true"` and `"on"` are true, case-sensitively, as is any text that
/// coerces to a non-zero, non-NaN number. Binary payloads are false.
fn coerce_boolean(value: &RawValue) -> bool {
    match value {
        RawValue::Text(text) => {
            if text == "true" || text == "on" {
                return true;
            }
            let number = coerce_number(value);
            number != 0.0 && !number.is_nan()
        }
        RawValue::Binary(_) => false,
    }
}
