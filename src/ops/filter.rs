//! Order-preserving selection.
//!
//! Selection never changes what a sequence may hold, so the input's
//! representation carries over unchanged.

use crate::predicate::Predicate;
use crate::seq::{Element, Sequence};

/// Elements of `seq`, in order, passing every predicate.
pub fn filter(seq: &Sequence, predicates: &[&dyn Predicate<Element>]) -> Sequence {
    select(seq, |element| predicates.iter().all(|p| p.test(element)))
}

/// Elements of `seq`, in order, failing every rejection predicate.
pub fn sieve(seq: &Sequence, rejections: &[&dyn Predicate<Element>]) -> Sequence {
    select(seq, |element| !rejections.iter().any(|p| p.test(element)))
}

fn select(seq: &Sequence, admits: impl Fn(&Element) -> bool) -> Sequence {
    let kept = seq.iter().filter(|element| admits(element)).cloned().collect();
    Sequence::from_parts(seq.repr(), kept)
}
