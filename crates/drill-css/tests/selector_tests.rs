//! Integration tests for building and rendering CSS selectors.

use drill_common::warning::has_warned;
use drill_css::selector::{
    Combinator, CompoundSelector, Fragment, FragmentKind, FragmentParseError, Selector,
    SelectorError, Specificity, attribute, class, combine, element, id, pseudo_class,
    pseudo_element,
};
use strum::IntoEnumIterator;

// Single-fragment facade

#[test]
fn test_facade_renders_each_fragment_kind() {
    assert_eq!(element("div").render(), "div");
    assert_eq!(id("main").render(), "#main");
    assert_eq!(class("nav").render(), ".nav");
    assert_eq!(attribute("href").render(), "[href]");
    assert_eq!(pseudo_class("hover").render(), ":hover");
    assert_eq!(pseudo_element("before").render(), "::before");
}

#[test]
fn test_empty_compound_renders_nothing() {
    let selector = CompoundSelector::new();
    assert!(selector.is_empty());
    assert_eq!(selector.render(), "");
}

// Compound selectors

#[test]
fn test_chained_fragments_render_in_order() {
    let selector = element("a")
        .id("main")
        .unwrap()
        .class("x")
        .unwrap()
        .class("y")
        .unwrap();
    assert_eq!(selector.render(), "a#main.x.y");
}

#[test]
fn test_every_kind_in_one_selector() -> Result<(), SelectorError> {
    let selector = element("input")
        .id("email")?
        .class("field")?
        .class("wide")?
        .attribute("type=\"email\"")?
        .attribute("required")?
        .pseudo_class("focus")?
        .pseudo_class("not(.empty)")?
        .pseudo_element("placeholder")?;
    assert_eq!(
        selector.render(),
        "input#email.field.wide[type=\"email\"][required]:focus:not(.empty)::placeholder"
    );
    Ok(())
}

#[test]
fn test_skipping_kinds_is_allowed() -> Result<(), SelectorError> {
    assert_eq!(element("li").pseudo_class("first-child")?.render(), "li:first-child");
    assert_eq!(id("x").attribute("hidden")?.render(), "#x[hidden]");
    assert_eq!(class("btn").pseudo_element("after")?.render(), ".btn::after");
    Ok(())
}

#[test]
fn test_payload_spaces_are_kept() -> Result<(), SelectorError> {
    let selector = element("a").attribute("title=\"two words\"")?;
    assert_eq!(selector.render(), "a[title=\"two words\"]");
    Ok(())
}

#[test]
fn test_empty_builder_accepts_any_first_fragment() -> Result<(), SelectorError> {
    for kind in FragmentKind::iter() {
        let selector = CompoundSelector::new().add_raw(kind, "v")?;
        assert!(selector.contains(kind));
        assert!(!selector.is_empty());
    }
    Ok(())
}

#[test]
fn test_fragments_iterates_in_render_order() -> Result<(), SelectorError> {
    let selector = element("p").class("a")?.class("b")?.pseudo_element("first-line")?;
    let fragments: Vec<_> = selector.fragments().collect();
    assert_eq!(
        fragments,
        vec![
            (FragmentKind::Element, "p"),
            (FragmentKind::Class, "a"),
            (FragmentKind::Class, "b"),
            (FragmentKind::PseudoElement, "first-line"),
        ]
    );
    Ok(())
}

#[test]
fn test_display_matches_render() -> Result<(), SelectorError> {
    let selector = element("span").class("tag")?;
    assert_eq!(format!("{selector}"), selector.render());
    Ok(())
}

// Cardinality errors

#[test]
fn test_duplicate_id_fails() {
    let err = id("x").id("y").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate { kind: FragmentKind::Id });
}

#[test]
fn test_duplicate_element_fails() {
    let err = element("a").element("b").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate { kind: FragmentKind::Element });
}

#[test]
fn test_duplicate_pseudo_element_fails() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Duplicate {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_repeatable_kinds_do_not_fail() -> Result<(), SelectorError> {
    let selector = class("a")
        .class("b")?
        .attribute("c")?
        .attribute("d")?
        .pseudo_class("e")?
        .pseudo_class("f")?;
    assert_eq!(selector.render(), ".a.b[c][d]:e:f");
    Ok(())
}

#[test]
fn test_duplicate_reported_before_out_of_order() -> Result<(), SelectorError> {
    let err = element("a").class("x")?.element("b").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate { kind: FragmentKind::Element });
    Ok(())
}

// Ordering errors

#[test]
fn test_element_after_class_fails() {
    let err = class("x").element("a").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Element,
            after: FragmentKind::Class,
        }
    );
}

#[test]
fn test_id_after_attribute_fails() {
    let err = attribute("href").id("main").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Id,
            after: FragmentKind::Attribute,
        }
    );
}

#[test]
fn test_class_after_pseudo_class_fails() {
    let err = pseudo_class("hover").class("x").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Class,
            after: FragmentKind::PseudoClass,
        }
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_fails() {
    let err = pseudo_element("before").pseudo_class("hover").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::PseudoClass,
            after: FragmentKind::PseudoElement,
        }
    );
}

#[test]
fn test_every_earlier_kind_after_later_kind_fails() {
    for later in FragmentKind::iter() {
        for earlier in FragmentKind::iter().filter(|&kind| kind < later) {
            let result = CompoundSelector::new()
                .add_raw(later, "v")
                .and_then(|selector| selector.add_raw(earlier, "w"));
            assert!(
                matches!(result, Err(SelectorError::OutOfOrder { kind, after }) if kind == earlier && after == later),
                "{earlier} after {later} should be out of order"
            );
        }
    }
}

#[test]
fn test_failed_build_leaves_other_builders_untouched() -> Result<(), SelectorError> {
    let kept = element("div").class("card")?;
    let copy = kept.clone();
    assert!(copy.element("span").is_err());
    assert_eq!(kept.render(), "div.card");
    Ok(())
}

#[test]
fn test_error_messages_name_the_kinds() {
    let duplicate = SelectorError::Duplicate {
        kind: FragmentKind::PseudoElement,
    };
    assert_eq!(duplicate.to_string(), "a selector can have only one pseudo-element");

    let out_of_order = SelectorError::OutOfOrder {
        kind: FragmentKind::Id,
        after: FragmentKind::PseudoClass,
    };
    assert_eq!(out_of_order.to_string(), "id cannot be added after pseudo-class");
}

// Combination

#[test]
fn test_combine_child() -> Result<(), SelectorError> {
    let combined = combine(element("div").id("a")?, ">", element("span"));
    assert_eq!(combined.render(), "div#a > span");
    Ok(())
}

#[test]
fn test_combine_siblings() {
    assert_eq!(combine(element("h1"), "+", element("p")).render(), "h1 + p");
    assert_eq!(combine(element("h1"), "~", element("p")).render(), "h1 ~ p");
}

#[test]
fn test_combine_descendant_uses_single_space() {
    assert_eq!(combine(element("nav"), " ", element("a")).render(), "nav a");
    assert_eq!(combine(element("nav"), "", element("a")).render(), "nav a");
}

#[test]
fn test_combine_trims_padded_tokens() {
    assert_eq!(combine(element("ul"), "  >  ", element("li")).render(), "ul > li");
}

#[test]
fn test_combine_is_recursive() -> Result<(), SelectorError> {
    let inner = combine(element("ul").class("nav")?, ">", element("li"));
    let outer = combine(inner, "+", element("li").class("active")?);
    assert_eq!(outer.render(), "ul.nav > li + li.active");

    let right_nested = combine(element("main"), " ", combine(element("p"), "~", element("p")));
    assert_eq!(right_nested.render(), "main p ~ p");
    Ok(())
}

#[test]
fn test_combine_borrows_operands() -> Result<(), SelectorError> {
    let left = element("form").id("login")?;
    let right = element("input");
    let combined = combine(&left, ">", &right);
    assert_eq!(combined.render(), "form#login > input");
    assert_eq!(left.render(), "form#login");
    assert_eq!(right.render(), "input");
    Ok(())
}

#[test]
fn test_combined_accessors() {
    let combined = combine(element("a"), "+", element("b"));
    assert_eq!(combined.left(), &Selector::Compound(element("a")));
    assert_eq!(combined.combinator(), &Combinator::NextSibling);
    assert_eq!(combined.right().render(), "b");
}

#[test]
fn test_custom_combinator_is_kept_and_warned() {
    let combined = combine(element("col"), "||", element("td"));
    assert_eq!(combined.render(), "col || td");
    assert_eq!(combined.combinator(), &Combinator::Custom("||".to_string()));
    assert!(has_warned("CSS", "unrecognized combinator '||'"));
}

#[test]
fn test_combinator_tokens() {
    assert_eq!(Combinator::from_token("\t"), Combinator::Descendant);
    assert_eq!(Combinator::from_token(">"), Combinator::Child);
    assert_eq!(Combinator::from("+"), Combinator::NextSibling);
    assert_eq!(Combinator::from("~").token(), "~");
    assert_eq!(Combinator::Descendant.token(), "");
}

#[test]
fn test_selector_wraps_both_shapes() -> Result<(), SelectorError> {
    let compound: Selector = element("a").class("x")?.into();
    let combined: Selector = combine(element("p"), ">", element("a")).into();
    assert_eq!(compound.render(), "a.x");
    assert_eq!(combined.to_string(), "p > a");
    Ok(())
}

// Specificity
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_specificity_of_compound() -> Result<(), SelectorError> {
    let selector = element("a")
        .id("main")?
        .class("x")?
        .attribute("href")?
        .pseudo_class("hover")?
        .pseudo_element("after")?;
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
    Ok(())
}

#[test]
fn test_specificity_of_combined_sums_both_sides() -> Result<(), SelectorError> {
    let combined = combine(element("ul").id("menu")?, ">", element("li").class("item")?);
    assert_eq!(combined.specificity(), Specificity(1, 1, 2));
    assert_eq!(Selector::from(combined).specificity(), Specificity(1, 1, 2));
    Ok(())
}

#[test]
fn test_specificity_ordering_and_display() {
    assert!(Specificity(1, 0, 0) > Specificity(0, 9, 9));
    assert!(Specificity(0, 1, 0) > Specificity(0, 0, 9));
    assert_eq!(Specificity::new(1, 2, 3).to_string(), "(1, 2, 3)");
    assert_eq!(Specificity::default(), CompoundSelector::new().specificity());
}

// Fragment descriptions

#[test]
fn test_fragment_kind_names() {
    let names: Vec<String> = FragmentKind::iter().map(|kind| kind.to_string()).collect();
    assert_eq!(
        names,
        ["element", "id", "class", "attribute", "pseudo-class", "pseudo-element"]
    );
    assert_eq!("pseudo-class".parse::<FragmentKind>(), Ok(FragmentKind::PseudoClass));
}

#[test]
fn test_parse_fragment() {
    let fragment: Fragment = "id=main".parse().unwrap();
    assert_eq!(fragment, Fragment::new(FragmentKind::Id, "main"));
}

#[test]
fn test_parse_fragment_splits_at_first_equals() {
    let fragment: Fragment = "attribute=type=text".parse().unwrap();
    assert_eq!(fragment.kind, FragmentKind::Attribute);
    assert_eq!(fragment.value, "type=text");
}

#[test]
fn test_parse_fragment_errors() {
    assert_eq!(
        "div".parse::<Fragment>(),
        Err(FragmentParseError::MissingSeparator("div".to_string()))
    );
    assert_eq!(
        "tag=div".parse::<Fragment>(),
        Err(FragmentParseError::UnknownKind("tag".to_string()))
    );
}

#[test]
fn test_add_parsed_fragments() -> Result<(), SelectorError> {
    let selector = ["element=a", "class=x", "pseudo-class=visited"]
        .into_iter()
        .map(|text| text.parse::<Fragment>().unwrap())
        .try_fold(CompoundSelector::new(), CompoundSelector::add)?;
    assert_eq!(selector.render(), "a.x:visited");
    Ok(())
}
