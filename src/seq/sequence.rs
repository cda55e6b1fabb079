//! Fixed-length, immutable sequences.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use super::element::{Element, ElementKind, Ty};
use crate::error::{Error, Result};
use crate::kind::{Classified, Classify, KindTag, Operator};
use crate::primitives::Value;

/// How a sequence is represented.
///
/// `Native(tag)` means the sequence is the argument list of a `tag`
/// container and every element is of `tag.element_kind()`. `Generic` holds
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    Native(KindTag),
    Generic,
}

impl Repr {
    pub const fn tag(self) -> Option<KindTag> {
        match self {
            Repr::Native(tag) => Some(tag),
            Repr::Generic => None,
        }
    }

    /// The element kind a native sequence holds.
    pub const fn element_kind(self) -> Option<ElementKind> {
        match self {
            Repr::Native(tag) => Some(tag.element_kind()),
            Repr::Generic => None,
        }
    }

    /// The container operator of a native representation.
    pub const fn container(self) -> Option<Operator> {
        match self {
            Repr::Native(tag) => Some(tag.container()),
            Repr::Generic => None,
        }
    }

    /// Whether `element` may appear in a sequence of this representation.
    pub fn admits(self, element: &Element) -> bool {
        match self {
            Repr::Native(tag) => element.kind() == tag.element_kind(),
            Repr::Generic => true,
        }
    }
}

impl From<KindTag> for Repr {
    fn from(tag: KindTag) -> Self {
        Repr::Native(tag)
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Native(tag) => write!(f, "{} sequence", tag),
            Repr::Generic => f.write_str("generic sequence"),
        }
    }
}

/// An ordered, fixed-length list of elements.
///
/// Sequences are built once and never edited; every algorithm returns a new
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    repr: Repr,
    elements: Vec<Element>,
}

impl Sequence {
    /// A native sequence of kind `tag`.
    ///
    /// Fails on the first element that is not of `tag.element_kind()`.
    pub fn native(tag: KindTag, elements: impl IntoIterator<Item = Element>) -> Result<Self> {
        let expected = tag.element_kind();
        let elements: Vec<Element> = elements.into_iter().collect();
        if let Some((index, found)) = elements
            .iter()
            .enumerate()
            .find(|(_, element)| element.kind() != expected)
        {
            return Err(Error::ElementKind { index, expected, found: found.kind() });
        }
        Ok(Sequence { repr: Repr::Native(tag), elements })
    }

    /// A generic sequence; any mix of elements.
    pub fn generic(elements: impl IntoIterator<Item = Element>) -> Self {
        Sequence { repr: Repr::Generic, elements: elements.into_iter().collect() }
    }

    /// Native when every element shares one kind that has a container,
    /// generic otherwise (including when empty).
    pub fn infer(elements: impl IntoIterator<Item = Element>) -> Self {
        let elements: Vec<Element> = elements.into_iter().collect();
        let repr = match elements.first().map(Element::kind) {
            Some(kind) if elements.iter().all(|element| element.kind() == kind) => {
                kind.container().map_or(Repr::Generic, Repr::Native)
            }
            _ => Repr::Generic,
        };
        Sequence { repr, elements }
    }

    /// An empty sequence of the given representation.
    pub fn empty(repr: Repr) -> Self {
        Sequence { repr, elements: Vec::new() }
    }

    /// A native value sequence.
    pub fn values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Sequence {
            repr: Repr::Native(KindTag::Value1),
            elements: values.into_iter().map(|v| Element::Value(v.into())).collect(),
        }
    }

    /// A native type sequence.
    pub fn types<T: Into<Ty>>(types: impl IntoIterator<Item = T>) -> Self {
        Sequence {
            repr: Repr::Native(KindTag::Type1),
            elements: types.into_iter().map(|t| Element::Type(t.into())).collect(),
        }
    }

    /// Construction for callers that already proved every element fits.
    pub(crate) fn from_parts(repr: Repr, elements: Vec<Element>) -> Self {
        debug_assert!(elements.iter().all(|element| repr.admits(element)));
        Sequence { repr, elements }
    }

    pub fn repr(&self) -> Repr {
        self.repr
    }

    /// The kind of this sequence's container.
    pub fn kind(&self) -> Classified {
        match self.repr {
            Repr::Native(tag) => Classified::Kind(tag),
            Repr::Generic => Classified::Unclassified,
        }
    }

    /// The element kind of a native sequence.
    pub fn element_kind(&self) -> Option<ElementKind> {
        self.repr.element_kind()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// The same elements under another representation.
    pub fn with_repr(self, repr: Repr) -> Result<Self> {
        match repr {
            Repr::Native(tag) => Sequence::native(tag, self.elements),
            Repr::Generic => Ok(Sequence::generic(self.elements)),
        }
    }

    /// Instantiate the native container around these elements.
    ///
    /// Generic sequences have no container.
    pub fn reify(&self) -> Option<Ty> {
        let container = self.repr.container()?;
        container.instantiate(self.clone()).ok()
    }
}

impl Classify for Sequence {
    fn classify(&self) -> Classified {
        self.kind()
    }
}

impl Deref for Sequence {
    type Target = [Element];

    fn deref(&self) -> &[Element] {
        &self.elements
    }
}

impl AsRef<[Element]> for Sequence {
    fn as_ref(&self) -> &[Element] {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = core::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Element;
    type IntoIter = alloc::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Param, Signature};
    use alloc::string::ToString;
    use alloc::vec;

    const MOLD: Operator = Operator::new("Mold", Signature(&[Param::Types]));
    const PAGE: Operator = Operator::new("Page", Signature(&[Param::Values]));

    #[test]
    fn native_rejects_foreign_elements() {
        let err = Sequence::native(KindTag::Value1, vec![Element::from(1), Element::named("int")]).unwrap_err();
        assert_eq!(
            err,
            Error::ElementKind { index: 1, expected: ElementKind::Value, found: ElementKind::Type }
        );
    }

    #[test]
    fn infer_picks_the_container_kind() {
        assert_eq!(Sequence::infer(vec![Element::from(1), Element::from('a')]).repr(), Repr::Native(KindTag::Value1));
        assert_eq!(Sequence::infer(vec![Element::from(MOLD)]).repr(), Repr::Native(KindTag::Type2));
        assert_eq!(Sequence::infer(vec![Element::from(MOLD), Element::from(PAGE)]).repr(), Repr::Generic);
        assert_eq!(Sequence::infer(Vec::new()).repr(), Repr::Generic);
    }

    #[test]
    fn deepest_operators_have_no_container() {
        let deepest = KindTag::Type7.container();
        assert_eq!(Sequence::infer(vec![Element::from(deepest)]).repr(), Repr::Generic);
    }

    #[test]
    fn reify_wraps_the_native_container() {
        let seq = Sequence::values([1, 2]);
        let ty = seq.reify().unwrap();
        assert!(ty.is_instance_of(&KindTag::Value1.container()));
        assert_eq!(ty.to_string(), "ValuePack<1, 2>");
        assert_eq!(Sequence::generic(seq.into_elements()).reify(), None);
    }
}
