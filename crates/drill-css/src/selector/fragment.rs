use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use super::{FragmentParseError, Specificity};

/// The six kinds of simple selector a [`CompoundSelector`](super::CompoundSelector)
/// is built from.
///
/// Variants are declared in the order fragments must be added and rendered,
/// so the derived `Ord` is the ordering rule. Names convert to and from
/// kebab-case (`pseudo-class`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Example: `.highlight`
    Class,

    /// [§ 6.1 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[type="text"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-child(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Whether the kind may appear at most once per compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Marker written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Marker written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Contribution of one fragment of this kind.
    #[must_use]
    pub const fn specificity(self) -> Specificity {
        match self {
            Self::Id => Specificity::new(1, 0, 0),
            Self::Class | Self::Attribute | Self::PseudoClass => Specificity::new(0, 1, 0),
            Self::Element | Self::PseudoElement => Specificity::new(0, 0, 1),
        }
    }
}

/// A fragment kind paired with its raw value, as written `kind=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Which simple selector this is.
    pub kind: FragmentKind,
    /// The raw value, without markers. Not validated.
    pub value: String,
}

impl Fragment {
    /// Pair a kind with a value.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl FromStr for Fragment {
    type Err = FragmentParseError;

    /// Parse `kind=value`. Only the first `=` separates, so
    /// `attribute=type=text` yields the value `type=text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, value)) = s.split_once('=') else {
            return Err(FragmentParseError::MissingSeparator(s.to_string()));
        };
        let kind = FragmentKind::from_str(kind.trim())
            .map_err(|_| FragmentParseError::UnknownKind(kind.trim().to_string()))?;
        Ok(Self::new(kind, value))
    }
}
