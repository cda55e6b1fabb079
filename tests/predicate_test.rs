//! Tests for the predicate combinators.

use kindred::predicate::{and, not, or, AllOf, AnyOf, IsCategory, IsDepth, IsKind, IsUnclassified, NoneOf};
use kindred::{all_satisfy, any_satisfy, none_satisfy, not_all_satisfy, operator, seq};
use kindred::{Category, Element, KindTag, Operator, Predicate, Sequence};

const MOLD: Operator = operator!(Mold: type..);
const ROAD: Operator = operator!(Road: op(type..)..);
const RAIL: Operator = operator!(Rail: op(value..)..);
const PAIR: Operator = operator!(Pair: type, type);

fn is_even(element: &Element) -> bool {
    element.as_value().and_then(|v| v.as_int()).is_some_and(|n| n % 2 == 0)
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn test_empty_sequence_identities() {
    let empty = Sequence::values(Vec::<i64>::new());
    assert!(all_satisfy(&is_even, &empty));
    assert!(!any_satisfy(&is_even, &empty));
    assert!(none_satisfy(&is_even, &empty));
    assert!(!not_all_satisfy(&is_even, &empty));
}

#[test]
fn test_all_is_not_any_not() {
    let samples = [
        seq![2, 4, 6],
        seq![1, 2, 3],
        seq![1, 3],
        seq![],
        seq![2, 'x', MOLD],
    ];
    for s in &samples {
        assert_eq!(all_satisfy(&is_even, s), !any_satisfy(&not(is_even), s), "{s}");
        assert_eq!(not_all_satisfy(&is_even, s), !all_satisfy(&is_even, s), "{s}");
    }
}

// =============================================================================
// Algebra
// =============================================================================

#[test]
fn test_binary_combinators() {
    let small = |element: &Element| element.as_value().and_then(|v| v.as_int()).is_some_and(|n| n < 4);
    let s = seq![1, 2, 3, 4, 5, 6];
    let evens_below_four: Vec<bool> = s.iter().map(|e| and(is_even, small).test(e)).collect();
    assert_eq!(evens_below_four, [false, true, false, false, false, false]);
    assert!(all_satisfy(&or(is_even, not(is_even)), &s));
}

#[test]
fn test_list_combinators() {
    let all = AllOf::<Element>::new().with(is_even).with(IsUnclassified);
    let any = AnyOf::<Element>::new().with(IsKind(KindTag::Type1)).with(IsKind(KindTag::Type2));
    let none = NoneOf::<Element>::new().with(IsCategory(Category::Value)).with(is_even);

    assert!(all.test(&Element::from(2)));
    assert!(!all.test(&Element::from(MOLD)));
    assert!(any.test(&Element::from(MOLD)));
    assert!(any.test(&Element::from(ROAD)));
    assert!(!any.test(&Element::from(RAIL)));
    assert!(none.test(&Element::from(MOLD)));
    assert!(!none.test(&Element::from(RAIL)));
}

// =============================================================================
// Classifier predicates
// =============================================================================

#[test]
fn test_classifier_predicates() {
    let ops = [MOLD, ROAD, RAIL, PAIR];
    assert!(any_satisfy(&IsKind(KindTag::Value2), &ops));
    assert!(all_satisfy(&not(IsDepth(3)), &ops));
    assert_eq!(ops.iter().filter(|op| IsDepth(2).test(*op)).count(), 2);
    assert_eq!(ops.iter().filter(|op| IsCategory(Category::Type).test(*op)).count(), 2);
    assert!(IsUnclassified.test(&PAIR));
    assert!(IsKind(KindTag::Type2).test(&KindTag::Type2));
}
