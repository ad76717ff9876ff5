use serde_json::{Map, Value};

use drill_common::warning::warn_once;

use crate::serial::SerialError;

/// A type that can be rebuilt from a structural JSON value.
///
/// Decoding happens in two steps: [`from_text`](crate::from_text) parses the
/// text into a [`Value`], then the prototype checks the fields it needs and
/// builds the concrete type. Methods of the type (such as
/// [`Rectangle::area`](crate::Rectangle::area)) are then available on the
/// result; nothing but data survives the text form.
pub trait Prototype: Sized {
    /// Type name used in error messages and warnings.
    const NAME: &'static str;

    /// Build the type from a parsed value.
    ///
    /// # Errors
    ///
    /// Returns a [`SerialError`] when the value does not have the shape the
    /// type requires.
    fn from_value(value: Value) -> Result<Self, SerialError>;
}

/// Plain structured data decodes as itself.
impl Prototype for Value {
    const NAME: &'static str = "value";

    fn from_value(value: Value) -> Result<Self, SerialError> {
        Ok(value)
    }
}

/// The fields of a JSON object being consumed by a [`Prototype`].
///
/// Each accessor removes the field it reads; whatever is left when
/// [`Fields::finish`] runs was not expected by the prototype.
#[derive(Debug)]
pub struct Fields {
    prototype: &'static str,
    map: Map<String, Value>,
}

impl Fields {
    /// Take the fields of `value` on behalf of prototype `P`.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::NotAnObject`] if `value` is not a JSON object.
    pub fn of<P: Prototype>(value: Value) -> Result<Self, SerialError> {
        match value {
            Value::Object(map) => Ok(Self {
                prototype: P::NAME,
                map,
            }),
            other => Err(SerialError::NotAnObject {
                prototype: P::NAME,
                found: json_type(&other),
            }),
        }
    }

    /// Remove a field, whatever its type.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::MissingField`] if the field is absent.
    pub fn take(&mut self, field: &'static str) -> Result<Value, SerialError> {
        self.map.remove(field).ok_or(SerialError::MissingField {
            prototype: self.prototype,
            field,
        })
    }

    /// Remove a numeric field.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::MissingField`] if the field is absent, or
    /// [`SerialError::InvalidField`] if it is not a number.
    pub fn number(&mut self, field: &'static str) -> Result<f64, SerialError> {
        let value = self.take(field)?;
        value.as_f64().ok_or_else(|| self.invalid(field, "number", &value))
    }

    /// Remove a string field.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::MissingField`] if the field is absent, or
    /// [`SerialError::InvalidField`] if it is not a string.
    pub fn string(&mut self, field: &'static str) -> Result<String, SerialError> {
        match self.take(field)? {
            Value::String(text) => Ok(text),
            other => Err(self.invalid(field, "string", &other)),
        }
    }

    /// Remove a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::MissingField`] if the field is absent, or
    /// [`SerialError::InvalidField`] if it is not a boolean.
    pub fn boolean(&mut self, field: &'static str) -> Result<bool, SerialError> {
        let value = self.take(field)?;
        value.as_bool().ok_or_else(|| self.invalid(field, "boolean", &value))
    }

    /// Warn about every field no accessor consumed. Unknown fields are
    /// dropped, not rejected.
    pub fn finish(self) {
        for key in self.map.keys() {
            warn_once(
                "Objects",
                &format!("ignoring unknown field '{key}' on {}", self.prototype),
            );
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str, found: &Value) -> SerialError {
        SerialError::InvalidField {
            prototype: self.prototype,
            field,
            expected,
            found: json_type(found),
        }
    }
}

/// JSON type name of a value, for error messages.
#[must_use]
pub const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
