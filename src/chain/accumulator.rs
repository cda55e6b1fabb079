//! The value threaded through a chain.

use core::fmt;

use crate::seq::{Element, ElementKind, Repr, Sequence};

/// A single element or a whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accumulator {
    Element(Element),
    Sequence(Sequence),
}

impl Accumulator {
    pub fn kind(&self) -> AccumulatorKind {
        match self {
            Accumulator::Element(element) => AccumulatorKind::Element(element.kind()),
            Accumulator::Sequence(seq) => AccumulatorKind::Sequence(seq.repr()),
        }
    }
}

impl From<Element> for Accumulator {
    fn from(element: Element) -> Self {
        Accumulator::Element(element)
    }
}

impl From<Sequence> for Accumulator {
    fn from(seq: Sequence) -> Self {
        Accumulator::Sequence(seq)
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accumulator::Element(element) => write!(f, "{}", element),
            Accumulator::Sequence(seq) => write!(f, "{}", seq),
        }
    }
}

/// The kind of an accumulator: what steps are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccumulatorKind {
    Element(ElementKind),
    Sequence(Repr),
}

impl fmt::Display for AccumulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccumulatorKind::Element(kind) => write!(f, "{}", kind),
            AccumulatorKind::Sequence(repr) => write!(f, "a {}", repr),
        }
    }
}

/// What a step accepts. `None` leaves that part open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Any,
    Element(Option<ElementKind>),
    Sequence(Option<Repr>),
    /// Any sequence with a native representation.
    Native,
}

impl Shape {
    pub const ANY_ELEMENT: Shape = Shape::Element(None);
    pub const ANY_SEQUENCE: Shape = Shape::Sequence(None);

    pub fn admits(self, kind: AccumulatorKind) -> bool {
        match (self, kind) {
            (Shape::Any, _) => true,
            (Shape::Element(expected), AccumulatorKind::Element(found)) => {
                expected.is_none_or(|expected| expected == found)
            }
            (Shape::Sequence(expected), AccumulatorKind::Sequence(found)) => {
                expected.is_none_or(|expected| expected == found)
            }
            (Shape::Native, AccumulatorKind::Sequence(found)) => found.tag().is_some(),
            _ => false,
        }
    }
}

impl From<AccumulatorKind> for Shape {
    fn from(kind: AccumulatorKind) -> Self {
        match kind {
            AccumulatorKind::Element(kind) => Shape::Element(Some(kind)),
            AccumulatorKind::Sequence(repr) => Shape::Sequence(Some(repr)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Any => f.write_str("anything"),
            Shape::Element(None) => f.write_str("any element"),
            Shape::Element(Some(kind)) => write!(f, "{}", kind),
            Shape::Sequence(None) => f.write_str("any sequence"),
            Shape::Sequence(Some(repr)) => write!(f, "a {}", repr),
            Shape::Native => f.write_str("any native sequence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindTag;

    #[test]
    fn shapes_admit_kinds() {
        let values = AccumulatorKind::Sequence(Repr::Native(KindTag::Value1));
        let generic = AccumulatorKind::Sequence(Repr::Generic);
        let value = AccumulatorKind::Element(ElementKind::Value);

        assert!(Shape::Any.admits(value));
        assert!(Shape::ANY_SEQUENCE.admits(generic));
        assert!(Shape::Native.admits(values));
        assert!(!Shape::Native.admits(generic));
        assert!(!Shape::ANY_ELEMENT.admits(values));
        assert!(Shape::from(value).admits(value));
        assert!(!Shape::Element(Some(ElementKind::Type)).admits(value));
    }
}
