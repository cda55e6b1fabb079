//! Elements: the things sequences hold.

use alloc::borrow::Cow;
use core::fmt;

use super::sequence::Sequence;
use crate::kind::{Classified, Classify, KindTag, Operator};
use crate::primitives::Value;

/// A type: either named outright or produced by instantiating an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Named(Cow<'static, str>),
    Instance(Instance),
}

impl Ty {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Ty::Named(name.into())
    }

    pub fn instance(&self) -> Option<&Instance> {
        match self {
            Ty::Instance(instance) => Some(instance),
            Ty::Named(_) => None,
        }
    }

    /// `true` if this type is `op` applied to some arguments.
    pub fn is_instance_of(&self, op: &Operator) -> bool {
        self.instance().is_some_and(|instance| instance.operator() == op)
    }
}

impl From<&'static str> for Ty {
    fn from(name: &'static str) -> Self {
        Ty::Named(Cow::Borrowed(name))
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Named(name) => f.write_str(name),
            Ty::Instance(instance) => write!(f, "{}", instance),
        }
    }
}

/// An operator applied to its arguments.
///
/// Arguments are always a native sequence of the operator's kind; build
/// instances through [`Operator::instantiate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instance {
    operator: Operator,
    arguments: Sequence,
}

impl Instance {
    pub(crate) fn new(operator: Operator, arguments: Sequence) -> Self {
        Instance { operator, arguments }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn arguments(&self) -> &Sequence {
        &self.arguments
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.operator)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(">")
    }
}

/// One entry of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Type(Ty),
    Value(Value),
    Operator(Operator),
}

impl Element {
    /// A named type element.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Element::Type(Ty::named(name))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Type(_) => ElementKind::Type,
            Element::Value(_) => ElementKind::Value,
            Element::Operator(op) => ElementKind::Operator(op.classify()),
        }
    }

    /// Operator classification; types and values are not operators.
    pub fn classify(&self) -> Classified {
        match self {
            Element::Operator(op) => op.classify(),
            Element::Type(_) | Element::Value(_) => Classified::Unclassified,
        }
    }

    pub fn as_value(&self) -> Option<Value> {
        match self {
            Element::Value(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&Ty> {
        match self {
            Element::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            Element::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl Classify for Element {
    fn classify(&self) -> Classified {
        Element::classify(self)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Value(value)
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Value(Value::Int(n))
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Value(Value::from(n))
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Value(Value::Bool(b))
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Value(Value::Char(c))
    }
}

impl From<Ty> for Element {
    fn from(ty: Ty) -> Self {
        Element::Type(ty)
    }
}

impl From<Operator> for Element {
    fn from(op: Operator) -> Self {
        Element::Operator(op)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Type(ty) => write!(f, "{}", ty),
            Element::Value(value) => write!(f, "{}", value),
            Element::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// What kind of thing an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Type,
    Value,
    Operator(Classified),
}

impl ElementKind {
    /// The native container kind able to hold elements of this kind.
    ///
    /// `None` for unclassified operators and for operators already at the
    /// deepest kind.
    pub const fn container(self) -> Option<KindTag> {
        match self {
            ElementKind::Type => Some(KindTag::Type1),
            ElementKind::Value => Some(KindTag::Value1),
            ElementKind::Operator(Classified::Kind(tag)) => tag.promote(),
            ElementKind::Operator(Classified::Unclassified) => None,
        }
    }

    /// Const equality.
    pub const fn same(self, other: ElementKind) -> bool {
        match (self, other) {
            (ElementKind::Type, ElementKind::Type) | (ElementKind::Value, ElementKind::Value) => true,
            (ElementKind::Operator(a), ElementKind::Operator(b)) => a.same(b),
            _ => false,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Type => f.write_str("a type"),
            ElementKind::Value => f.write_str("a value"),
            ElementKind::Operator(Classified::Kind(tag)) => write!(f, "a {} operator", tag),
            ElementKind::Operator(Classified::Unclassified) => f.write_str("an unclassified operator"),
        }
    }
}
