//! Cross-kind comparators for [`Interview::kindred`](super::Interview::kindred).
//!
//! Each takes the interviewer first and the candidate element second.

use crate::kind::{KindTag, Operator};
use crate::seq::{Element, ElementKind};

/// The candidate is a type built by instantiating `op`.
pub fn instance_of(op: &Operator, candidate: &Element) -> bool {
    candidate.as_type().is_some_and(|ty| ty.is_instance_of(op))
}

/// The candidate is of element kind `kind`.
pub fn kind_of(kind: &ElementKind, candidate: &Element) -> bool {
    candidate.kind() == *kind
}

/// The candidate is an operator of kind `tag`, or an instance of one.
pub fn classified_as(tag: &KindTag, candidate: &Element) -> bool {
    match candidate {
        Element::Operator(op) => op.classify().is(*tag),
        Element::Type(ty) => ty.instance().is_some_and(|instance| instance.operator().classify().is(*tag)),
        Element::Value(_) => false,
    }
}

/// The candidate is an instance whose arguments include `element`.
pub fn holds(element: &Element, candidate: &Element) -> bool {
    candidate
        .as_type()
        .and_then(|ty| ty.instance())
        .is_some_and(|instance| instance.arguments().contains(element))
}
