//! CSS selector building for the drill crates.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fixed fragment ordering and singleton enforcement
//!
//! - **Complex selectors** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Recursive combination of already built selectors
//!
//! - **Specificity** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Selector parsing (selectors are only built and rendered)
//! - Validation of identifiers inside fragments

/// Selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    Combinator, CombinedSelector, CompoundSelector, Fragment, FragmentKind, FragmentParseError,
    Selector, SelectorError, Specificity, attribute, class, combine, element, id, pseudo_class,
    pseudo_element,
};
