//! Tests for the kind_check! macro.

use kindred::{kind_check, operator, Classified, Element, KindTag, Operator, Signature};

const MOLD: Operator = operator!(Mold: type..);
const RAIL: Operator = operator!(Rail: op(value..)..);
const PAIR: Operator = operator!(Pair: type, type);

// =============================================================================
// Atoms
// =============================================================================

#[test]
fn test_tag_atoms() {
    assert!(kind_check!(MOLD: Type1));
    assert!(!kind_check!(MOLD: Value1));
    assert!(kind_check!(RAIL: Value2));
}

#[test]
fn test_category_and_depth_atoms() {
    assert!(kind_check!(MOLD: Type));
    assert!(kind_check!(RAIL: Value & Depth2));
    assert!(!kind_check!(RAIL: Depth1));
    assert!(kind_check!(PAIR: Unclassified));
    assert!(!kind_check!(PAIR: Type | Value));
}

// =============================================================================
// Boolean expressions
// =============================================================================

#[test]
fn test_boolean_expressions() {
    assert!(kind_check!(RAIL: (Type2 | Value2) & !Type));
    assert!(kind_check!(MOLD: !(Value | Unclassified)));
    assert!(kind_check!(PAIR: !Type1 & !Value1));
}

#[test]
fn test_multiple_checks_are_anded() {
    assert!(kind_check!(MOLD: Type1, RAIL: Value2));
    assert!(!kind_check!(MOLD: Type1, RAIL: Type2));
}

#[test]
fn test_other_subjects() {
    let sig: Signature = MOLD.signature();
    assert!(kind_check!(sig: Type1));
    assert!(kind_check!(Classified::Kind(KindTag::Value4): Depth4 & Value));
    assert!(kind_check!(Element::from(RAIL): Value2));
    assert!(kind_check!(Element::from(3): Unclassified));
}

#[test]
fn test_const_context() {
    const ROAD_LIKE: bool = kind_check!(RAIL: Depth2 & !Type);
    assert!(ROAD_LIKE);
}
