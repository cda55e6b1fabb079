//! Tests for the interview search engine.

use kindred::interview::{classified_as, holds, instance_of, kind_of, Kindred, Question};
use kindred::{operator, search, search_right, seq};
use kindred::{
    Anchor, Element, ElementKind, Hit, Interview, KindTag, Operator, Precedence, Predicate,
    SearchResult, Sequence, Ty,
};

const MOLD: Operator = operator!(Mold: type..);
const PAGE: Operator = operator!(Page: value..);
const ROAD: Operator = operator!(Road: op(type..)..);

fn abac() -> Sequence {
    Sequence::types(["A", "B", "A", "C"])
}

fn named(name: &'static str) -> impl Fn(&Element) -> bool {
    move |element| element.as_type() == Some(&Ty::from(name))
}

// =============================================================================
// Anchoring
// =============================================================================

#[test]
fn test_left_and_right_anchors() {
    let s = abac();
    let is_a = named("A");
    assert_eq!(search(&s, &[&is_a]), SearchResult::Found(0));
    assert_eq!(search_right(&s, &[&is_a]), SearchResult::Found(2));
    assert_eq!(Interview::anchored(Anchor::Right).find(&s, &named("C")), SearchResult::Found(3));
}

#[test]
fn test_sentinel() {
    let empty = Sequence::types(Vec::<Ty>::new());
    assert_eq!(search(&empty, &[&named("A")]), SearchResult::Sentinel);
    assert_eq!(search_right(&empty, &[&named("A")]), SearchResult::Sentinel);

    let xyz = Sequence::types(["X", "Y", "Z"]);
    let result = search(&xyz, &[&named("W")]);
    assert!(result.is_sentinel());
    assert_eq!(result.index(), None);
    assert_eq!(search(&xyz, &[]), SearchResult::Sentinel);
}

// =============================================================================
// Priority lists
// =============================================================================

#[test]
fn test_earliest_listed_predicate_wins() {
    let s = abac();
    let (is_a, is_c) = (named("A"), named("C"));
    let predicates: [&dyn Predicate<Element>; 2] = [&is_c, &is_a];

    assert_eq!(Interview::left().hit(&s, &predicates), Some(Hit { index: 3, predicate: 0 }));
    assert_eq!(Interview::right().hit(&s, &predicates), Some(Hit { index: 3, predicate: 0 }));

    let by_position = Interview::left().precedence(Precedence::Position);
    assert_eq!(by_position.hit(&s, &predicates), Some(Hit { index: 0, predicate: 1 }));
    let by_position = Interview::right().precedence(Precedence::Position);
    assert_eq!(by_position.hit(&s, &predicates), Some(Hit { index: 3, predicate: 0 }));
}

#[test]
fn test_list_order_breaks_ties_at_one_index() {
    let s = abac();
    let anything = |_: &Element| true;
    let is_a = named("A");
    let predicates: [&dyn Predicate<Element>; 2] = [&is_a, &anything];
    let hit = Interview::left().precedence(Precedence::Position).hit(&s, &predicates);
    assert_eq!(hit, Some(Hit { index: 0, predicate: 0 }));
}

#[test]
fn test_unmatched_predicates_fall_through() {
    let s = abac();
    let (is_w, is_b) = (named("W"), named("B"));
    let hit = Interview::right().hit(&s, &[&is_w, &is_b]);
    assert_eq!(hit, Some(Hit { index: 1, predicate: 1 }));
}

// =============================================================================
// Widened questions
// =============================================================================

#[test]
fn test_context_is_prefix_then_suffix() {
    let s = abac();
    // A candidate already seen in the scanned context.
    let repeat = |context: &[Element], _: &(), candidate: &Element| context.contains(candidate);
    let questions: [&dyn Question<(), Element>; 1] = [&repeat];
    assert_eq!(Interview::left().interview(&s, &(), &questions), SearchResult::Found(2));
    assert_eq!(Interview::right().interview(&s, &(), &questions), SearchResult::Found(0));
}

#[test]
fn test_interviewer_of_another_kind() {
    let counts = seq![1, 2, 3, 4];
    // Interviewer is a threshold; the candidate must exceed it along with
    // everything before it.
    let climbing = |context: &[Element], floor: &i64, candidate: &Element| {
        let above = |e: &Element| e.as_value().and_then(|v| v.as_int()).is_some_and(|n| n > *floor);
        above(candidate) && context.iter().all(|e| !above(e))
    };
    let result = Interview::left().interview(&counts, &2i64, &[&climbing]);
    assert_eq!(result, SearchResult::Found(2));
}

#[test]
fn test_kindred_wrapper() {
    let s = abac();
    let longer = Kindred::new(|len: &usize, candidate: &Element| candidate.to_string().len() >= *len);
    assert_eq!(Interview::left().interview(&s, &1usize, &[&longer]), SearchResult::Found(0));
    assert_eq!(Interview::left().interview(&s, &2usize, &[&longer]), SearchResult::Sentinel);
}

// =============================================================================
// Kindred comparators
// =============================================================================

#[test]
fn test_kindred_comparators() {
    let mold_ab = MOLD.instantiate(Sequence::types(["A", "B"])).unwrap();
    let page_12 = PAGE.instantiate(Sequence::values([1, 2])).unwrap();
    let s = Sequence::types([page_12.clone(), Ty::from("plain"), mold_ab.clone()]);
    let mixed = seq![1, MOLD, ROAD, 'c'];

    assert_eq!(Interview::left().kindred(&s, &MOLD, instance_of), SearchResult::Found(2));
    assert_eq!(Interview::left().kindred(&s, &ROAD, instance_of), SearchResult::Sentinel);
    assert_eq!(Interview::left().kindred(&s, &Element::from(2), holds), SearchResult::Found(0));
    assert_eq!(Interview::left().kindred(&s, &KindTag::Value1, classified_as), SearchResult::Found(0));
    assert_eq!(Interview::left().kindred(&mixed, &KindTag::Type2, classified_as), SearchResult::Found(2));
    assert_eq!(Interview::right().kindred(&mixed, &ElementKind::Value, kind_of), SearchResult::Found(3));
}

// =============================================================================
// Conveniences
// =============================================================================

#[test]
fn test_contains_count_positions() {
    let s = abac();
    let is_a = named("A");
    assert!(Interview::left().contains(&s, &is_a));
    assert!(!Interview::left().contains(&s, &named("Q")));
    assert_eq!(Interview::left().count(&s, &is_a), 2);
    assert_eq!(Interview::left().positions(&s, &is_a), [0, 2]);
    assert_eq!(Interview::right().positions(&s, &is_a), [2, 0]);
}
