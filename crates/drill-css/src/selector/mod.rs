//! CSS selector building
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). A
//! [`CompoundSelector`] accumulates typed fragments in a fixed order and
//! renders them without separators; [`combine`] joins two finished selectors
//! with a combinator.
//!
//! ```
//! use drill_css::selector::{combine, element};
//!
//! # fn main() -> Result<(), drill_css::SelectorError> {
//! let nav = element("ul").class("nav")?;
//! let item = element("li").pseudo_class("first-child")?;
//! assert_eq!(combine(nav, ">", item).render(), "ul.nav > li:first-child");
//! # Ok(())
//! # }
//! ```

mod combinator;
mod error;
mod fragment;
mod specificity;

use std::fmt;

pub use combinator::{Combinator, CombinedSelector, Selector, combine};
pub use error::{FragmentParseError, SelectorError};
pub use fragment::{Fragment, FragmentKind};
pub use specificity::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments must be added in [`FragmentKind`] order. Each adding method
/// consumes the builder and hands it back on success, so calls chain with `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    element: Option<String>,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    id: Option<String>,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    classes: Vec<String>,
    /// [§ 6.1 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    attributes: Vec<String>,
    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    pseudo_classes: Vec<String>,
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    pseudo_element: Option<String>,
    /// Latest kind added so far; later additions may not go below it.
    latest: Option<FragmentKind>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh builder holding a single fragment. A fresh builder can take
    /// any one fragment, so this cannot fail.
    fn seeded(kind: FragmentKind, value: String) -> Self {
        let mut selector = Self::new();
        selector.push(kind, value);
        selector
    }

    /// Add a fragment of `kind` after checking the ordering rules.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Duplicate`] if `kind` is a singleton that is
    /// already present, otherwise [`SelectorError::OutOfOrder`] if a fragment
    /// of a later kind has already been added.
    pub fn add_raw(
        mut self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        if kind.is_singleton() && self.contains(kind) {
            return Err(SelectorError::Duplicate { kind });
        }
        if let Some(after) = self.latest.filter(|&latest| latest > kind) {
            return Err(SelectorError::OutOfOrder { kind, after });
        }
        self.push(kind, value.into());
        Ok(self)
    }

    /// Add a parsed [`Fragment`].
    ///
    /// # Errors
    ///
    /// Same as [`CompoundSelector::add_raw`].
    pub fn add(self, fragment: Fragment) -> Result<Self, SelectorError> {
        let Fragment { kind, value } = fragment;
        self.add_raw(kind, value)
    }

    /// Set the type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails if an element is already set or any other fragment was added.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::Element, name)
    }

    /// Set the ID selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// Fails if an id is already set, or a class, attribute, pseudo-class or
    /// pseudo-element was added.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element was added.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element was added.
    pub fn attribute(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element was added.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already set.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add_raw(FragmentKind::PseudoElement, value)
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    /// Whether at least one fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// All fragments in render order, without their markers.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        fn tagged(
            kind: FragmentKind,
            values: &[String],
        ) -> impl Iterator<Item = (FragmentKind, &str)> {
            values.iter().map(move |value| (kind, value.as_str()))
        }

        tagged(FragmentKind::Element, self.element.as_slice())
            .chain(tagged(FragmentKind::Id, self.id.as_slice()))
            .chain(tagged(FragmentKind::Class, &self.classes))
            .chain(tagged(FragmentKind::Attribute, &self.attributes))
            .chain(tagged(FragmentKind::PseudoClass, &self.pseudo_classes))
            .chain(tagged(
                FragmentKind::PseudoElement,
                self.pseudo_element.as_slice(),
            ))
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.fragments()
            .fold(Specificity::default(), |total, (kind, _)| {
                total + kind.specificity()
            })
    }

    /// Render the selector string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Store a fragment whose ordering has already been checked.
    fn push(&mut self, kind: FragmentKind, value: String) {
        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.latest = Some(kind);
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector, e.g. `element("div")`.
#[must_use]
pub fn element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::Element, name.into())
}

/// Start a selector with an ID selector, e.g. `id("main")` renders `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::Id, value.into())
}

/// Start a selector with a class selector, e.g. `class("nav")` renders `.nav`.
#[must_use]
pub fn class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::Class, value.into())
}

/// Start a selector with an attribute selector, e.g. `attribute("href")`
/// renders `[href]`.
#[must_use]
pub fn attribute(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::Attribute, value.into())
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")`
/// renders `:hover`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::PseudoClass, value.into())
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("before")`
/// renders `::before`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(FragmentKind::PseudoElement, value.into())
}
