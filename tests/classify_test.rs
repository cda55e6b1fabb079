//! Tests for kind classification.
//!
//! Every operator gets exactly one of the fourteen tags, or none.

use kindred::kind::{is_type1, is_type2, is_value1, is_value3, is_value7};
use kindred::{assert_kind, classify, operator, signature};
use kindred::{Category, Classified, KindTag, Operator, Param, Signature};

const MOLD: Operator = operator!(Mold: type..);
const PAGE: Operator = operator!(Page: value..);
const ROAD: Operator = operator!(Road: op(type..)..);
const RAIL: Operator = operator!(Rail: op(value..)..);
const LINE: Operator = operator!(Line: op(op(value..)..)..);
const PAIR: Operator = operator!(Pair: type, type);
const UNIT: Operator = operator!(Unit:);

assert_kind!(MOLD => Type1);
assert_kind!(LINE => Value3);
assert_kind!(signature!(op(op(op(type..)..)..)..) => Type4);
assert_kind!(UNIT => Unclassified);

/// Wrap `inner` in `levels` operator packs.
fn nest(inner: Signature, levels: usize) -> Signature {
    (0..levels).fold(inner, |sig, _| {
        let params: &'static [Param] = Box::leak(Box::new([Param::Operators(sig)]));
        Signature(params)
    })
}

// =============================================================================
// Shapes
// =============================================================================

#[test]
fn test_depth_one() {
    assert_eq!(classify(&MOLD), Classified::Kind(KindTag::Type1));
    assert_eq!(classify(&PAGE), Classified::Kind(KindTag::Value1));
}

#[test]
fn test_operator_packs_promote() {
    assert_eq!(classify(&ROAD), Classified::Kind(KindTag::Type2));
    assert_eq!(classify(&RAIL), Classified::Kind(KindTag::Value2));
    assert_eq!(classify(&LINE), Classified::Kind(KindTag::Value3));
}

#[test]
fn test_non_pack_shapes_are_unclassified() {
    for sig in [
        signature!(type, type),
        signature!(),
        signature!(type),
        signature!(value),
        signature!(type.., value..),
        signature!(op(type..)),
        signature!(op(type, value)..),
        signature!(type, op(type..)..),
    ] {
        assert!(sig.classify().is_unclassified(), "{sig} should be unclassified");
    }
    assert!(PAIR.classify().is_unclassified());
}

#[test]
fn test_depth_seven_is_the_limit() {
    for depth in 1..=7usize {
        let types = nest(Signature(&[Param::Types]), depth - 1);
        let values = nest(Signature(&[Param::Values]), depth - 1);
        let type_tag = types.classify().tag().unwrap();
        let value_tag = values.classify().tag().unwrap();
        assert_eq!(type_tag.depth() as usize, depth);
        assert_eq!(type_tag.category(), Category::Type);
        assert_eq!(value_tag.category(), Category::Value);
    }
    assert!(nest(Signature(&[Param::Types]), 7).classify().is_unclassified());
    assert!(nest(Signature(&[Param::Values]), 9).classify().is_unclassified());
}

// =============================================================================
// Exclusivity
// =============================================================================

#[test]
fn test_exactly_one_predicate_holds() {
    let per_tag: [(KindTag, fn(&Operator) -> bool); 5] = [
        (KindTag::Type1, is_type1),
        (KindTag::Type2, is_type2),
        (KindTag::Value1, is_value1),
        (KindTag::Value3, is_value3),
        (KindTag::Value7, is_value7),
    ];
    for op in [MOLD, PAGE, ROAD, RAIL, LINE, PAIR, UNIT] {
        let holding: Vec<KindTag> = KindTag::ALL
            .iter()
            .copied()
            .filter(|&tag| op.classify().is(tag))
            .collect();
        assert!(holding.len() <= 1, "{op} matched {holding:?}");
        assert_eq!(holding.first().copied(), op.classify().tag());
        for (tag, predicate) in per_tag {
            assert_eq!(predicate(&op), op.classify().is(tag), "{op} / {tag}");
        }
    }
}

#[test]
fn test_containers_classify_as_their_tag() {
    for &tag in KindTag::ALL {
        assert_eq!(tag.container().classify(), Classified::Kind(tag));
        assert_eq!(Classified::from(tag).to_string(), tag.name());
    }
}

#[test]
fn test_const_predicates() {
    const IS_ROAD: bool = is_type2(&ROAD);
    const NOT_PAIR: bool = is_type1(&PAIR);
    assert!(IS_ROAD);
    assert!(!NOT_PAIR);
}
