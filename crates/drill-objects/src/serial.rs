use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::prototype::Prototype;

/// Failure to convert between values and JSON text.
#[derive(Debug, Error)]
pub enum SerialError {
    /// The value has no JSON representation (for example a map with
    /// non-string keys).
    #[error("cannot encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The prototype needs an object but the text holds something else.
    #[error("{prototype} expects a JSON object, found {found}")]
    NotAnObject {
        /// Prototype being decoded.
        prototype: &'static str,
        /// JSON type actually present.
        found: &'static str,
    },

    /// A field the prototype requires is absent.
    #[error("{prototype} is missing field '{field}'")]
    MissingField {
        /// Prototype being decoded.
        prototype: &'static str,
        /// The absent field.
        field: &'static str,
    },

    /// A field is present with the wrong JSON type.
    #[error("{prototype} field '{field}' should be a {expected}, found {found}")]
    InvalidField {
        /// Prototype being decoded.
        prototype: &'static str,
        /// The offending field.
        field: &'static str,
        /// JSON type the prototype requires.
        expected: &'static str,
        /// JSON type actually present.
        found: &'static str,
    },
}

/// Encode `value` as compact JSON.
///
/// Struct fields appear in declaration order; object keys of a [`Value`]
/// keep their insertion order. Finite floats decode back to the same bits.
///
/// JSON has no NaN or infinity: such floats are written as `null`, so a
/// [`Rectangle`](crate::Rectangle) with a non-finite side encodes fine but
/// fails to decode with [`SerialError::InvalidField`].
///
/// # Errors
///
/// Returns [`SerialError::Encode`] if the value cannot be represented.
pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, SerialError> {
    serde_json::to_string(value).map_err(SerialError::Encode)
}

/// Encode `value` as indented JSON.
///
/// # Errors
///
/// Returns [`SerialError::Encode`] if the value cannot be represented.
pub fn to_text_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, SerialError> {
    serde_json::to_string_pretty(value).map_err(SerialError::Encode)
}

/// Decode JSON text into the type described by `P`.
///
/// ```
/// use drill_objects::{Rectangle, from_text};
///
/// let rect: Rectangle = from_text(r#"{"width": 3, "height": 4}"#).unwrap();
/// assert_eq!(rect.area(), 12.0);
/// ```
///
/// # Errors
///
/// Returns [`SerialError::Parse`] for malformed text, or the error `P`
/// reports when the parsed value does not fit it.
pub fn from_text<P: Prototype>(text: &str) -> Result<P, SerialError> {
    let value: Value = serde_json::from_str(text).map_err(SerialError::Parse)?;
    P::from_value(value)
}
