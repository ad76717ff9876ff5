use thiserror::Error;

use super::FragmentKind;

/// Misuse of the selector builder. The failing call consumes the builder, so
/// only the selector under construction is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton fragment (element, id, pseudo-element) was added twice.
    #[error("a selector can have only one {kind}")]
    Duplicate {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A fragment was added after a fragment of a later kind.
    #[error("{kind} cannot be added after {after}")]
    OutOfOrder {
        /// The kind that was being added.
        kind: FragmentKind,
        /// The latest kind already present.
        after: FragmentKind,
    },
}

/// Failure to read a `kind=value` fragment description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentParseError {
    /// No `=` between kind and value.
    #[error("expected kind=value, got '{0}'")]
    MissingSeparator(String),

    /// The kind is not one of the six fragment kinds.
    #[error(
        "unknown fragment kind '{0}' (expected element, id, class, attribute, pseudo-class or pseudo-element)"
    )]
    UnknownKind(String),
}
