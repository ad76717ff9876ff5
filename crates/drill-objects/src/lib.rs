//! Small value objects and JSON helpers for the drill crates.
//!
//! - [`Rectangle`] - a width/height value with a derived area
//! - [`to_text`] / [`from_text`] - JSON encoding, and decoding into a type
//!   described by a [`Prototype`]

/// Typed reconstruction of structural JSON values.
pub mod prototype;
/// The rectangle value.
pub mod rectangle;
/// JSON text conversion.
pub mod serial;

pub use prototype::{Fields, Prototype};
pub use rectangle::{Rectangle, Shape};
pub use serial::{SerialError, from_text, to_text, to_text_pretty};
