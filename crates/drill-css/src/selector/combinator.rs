use std::fmt;

use drill_common::warning::warn_once;

use super::{CompoundSelector, Specificity};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,

    /// Any other token, written out as given.
    ///
    /// Example: `||` (column combinator)
    Custom(String),
}

impl Combinator {
    /// Classify a raw combinator token. Surrounding whitespace is ignored and
    /// an all-whitespace token is the descendant combinator. Unrecognized
    /// tokens are kept verbatim with a warning.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "" => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            other => {
                warn_once("CSS", &format!("unrecognized combinator '{other}'"));
                Self::Custom(other.to_string())
            }
        }
    }

    /// The token as rendered between two selectors. Empty for descendant.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Descendant => "",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Custom(token) => token,
        }
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

/// Either kind of finished selector, accepted on both sides of [`combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector, e.g. `a#main.x`.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator.
    Combined(Box<CombinedSelector>),
}

impl Selector {
    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(combined) => combined.specificity(),
        }
    }

    /// Render the selector string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundSelector> for Selector {
    fn from(compound: &CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

impl From<&CombinedSelector> for Selector {
    fn from(combined: &CombinedSelector) -> Self {
        Self::Combined(Box::new(combined.clone()))
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Built left to right: `combine(combine(a, ">", b), "+", c)` renders
/// `a > b + c`. There is no way to add fragments to a combined selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: Selector,
    combinator: Combinator,
    right: Selector,
}

impl CombinedSelector {
    /// Join two selectors with an already classified combinator.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: left.into(),
            combinator,
            right: right.into(),
        }
    }

    /// The selector left of the combinator.
    #[must_use]
    pub const fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining both sides.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// The selector right of the combinator.
    #[must_use]
    pub const fn right(&self) -> &Selector {
        &self.right
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Sum of both sides; combinators contribute nothing.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }

    /// Render the selector string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.combinator {
            Combinator::Descendant => write!(f, "{} {}", self.left, self.right),
            combinator => write!(f, "{} {} {}", self.left, combinator.token(), self.right),
        }
    }
}

/// Join two finished selectors as `"<left> <combinator> <right>"`.
///
/// `combinator` is a raw token (`">"`, `"+"`, `"~"`, or whitespace for
/// descendant); see [`Combinator::from_token`]. The operands are not
/// modified; pass references to keep using them.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: &str,
    right: impl Into<Selector>,
) -> CombinedSelector {
    CombinedSelector::new(left, Combinator::from_token(combinator), right)
}
