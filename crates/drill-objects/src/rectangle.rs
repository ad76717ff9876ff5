use serde::Serialize;
use serde_json::Value;

use crate::prototype::{Fields, Prototype};
use crate::serial::SerialError;

/// Anything with an area.
pub trait Shape {
    /// The enclosed area.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// Dimensions are not validated: zero and negative values are kept as given.
/// Fields serialize in declaration order, `width` then `height`. Decoding
/// goes through [`Prototype`] only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        Self::area(self)
    }
}

impl Prototype for Rectangle {
    const NAME: &'static str = "Rectangle";

    fn from_value(value: Value) -> Result<Self, SerialError> {
        let mut fields = Fields::of::<Self>(value)?;
        let width = fields.number("width")?;
        let height = fields.number("height")?;
        fields.finish();
        Ok(Self::new(width, height))
    }
}
