//! Kind classification.
//!
//! Classification unifies a parameter list against the known shapes,
//! shallow to deep:
//!
//! ```text
//! [type..]              -> Type1
//! [value..]             -> Value1
//! [op(S)..]             -> promote(classify(S))     while depth <= 7
//! anything else         -> Unclassified
//! ```
//!
//! Depth and category are jointly unique per tag, so no shape can match two
//! tags. The whole pass is a `const fn`.

use core::fmt;

use super::operator::Operator;
use super::param::{Param, Signature};
use super::tag::{Category, KindTag};

/// Outcome of classification. `Unclassified` is an ordinary value that
/// callers branch on, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified {
    Kind(KindTag),
    Unclassified,
}

impl Classified {
    pub const fn tag(self) -> Option<KindTag> {
        match self {
            Classified::Kind(tag) => Some(tag),
            Classified::Unclassified => None,
        }
    }

    pub const fn is(self, tag: KindTag) -> bool {
        match self {
            Classified::Kind(own) => own.same(tag),
            Classified::Unclassified => false,
        }
    }

    pub const fn is_unclassified(self) -> bool {
        matches!(self, Classified::Unclassified)
    }

    pub const fn is_category(self, category: Category) -> bool {
        match self {
            Classified::Kind(tag) => tag.category().same(category),
            Classified::Unclassified => false,
        }
    }

    pub const fn has_depth(self, depth: u8) -> bool {
        match self {
            Classified::Kind(tag) => tag.depth() == depth,
            Classified::Unclassified => false,
        }
    }

    /// Lets `kind_check!` treat an existing classification as a subject.
    pub const fn classify(&self) -> Classified {
        *self
    }

    /// Const equality.
    pub const fn same(self, other: Classified) -> bool {
        match (self, other) {
            (Classified::Kind(a), Classified::Kind(b)) => a.same(b),
            (Classified::Unclassified, Classified::Unclassified) => true,
            _ => false,
        }
    }
}

impl From<KindTag> for Classified {
    fn from(tag: KindTag) -> Self {
        Classified::Kind(tag)
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classified::Kind(tag) => write!(f, "{}", tag),
            Classified::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// Classify a parameter list.
pub const fn classify_signature(signature: Signature) -> Classified {
    match signature.0 {
        [Param::Types] => Classified::Kind(KindTag::Type1),
        [Param::Values] => Classified::Kind(KindTag::Value1),
        [Param::Operators(inner)] => match classify_signature(*inner) {
            Classified::Kind(tag) => match tag.promote() {
                Some(deeper) => Classified::Kind(deeper),
                None => Classified::Unclassified,
            },
            Classified::Unclassified => Classified::Unclassified,
        },
        _ => Classified::Unclassified,
    }
}

/// Classify an operator by its parameter list.
pub const fn classify(op: &Operator) -> Classified {
    classify_signature(op.signature())
}

/// Anything the classifier can be asked about.
///
/// Implemented by signatures, operators, classifications and elements so the
/// classifier-backed predicates work over all of them.
pub trait Classify {
    fn classify(&self) -> Classified;
}

impl Classify for Signature {
    fn classify(&self) -> Classified {
        classify_signature(*self)
    }
}

impl Classify for Operator {
    fn classify(&self) -> Classified {
        classify(self)
    }
}

impl Classify for Classified {
    fn classify(&self) -> Classified {
        *self
    }
}

impl Classify for KindTag {
    fn classify(&self) -> Classified {
        Classified::Kind(*self)
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn classify(&self) -> Classified {
        (**self).classify()
    }
}
