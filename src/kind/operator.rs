//! Operators: named generic constructs with a parameter list.

use core::fmt;

use super::classify::{classify, Classified};
use super::param::Signature;
use crate::error::{Error, Result};
use crate::primitives::const_utils::str_eq;
use crate::seq::{Instance, Repr, Sequence, Ty};

/// A generic construct parameterized by a uniform parameter list.
///
/// Operators are plain constants. Equality is by name and signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    name: &'static str,
    signature: Signature,
}

impl Operator {
    pub const fn new(name: &'static str, signature: Signature) -> Self {
        Operator { name, signature }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn signature(&self) -> Signature {
        self.signature
    }

    pub const fn classify(&self) -> Classified {
        classify(self)
    }

    /// Const equality.
    pub const fn same(&self, other: &Operator) -> bool {
        str_eq(self.name, other.name) && self.signature.same(&other.signature)
    }

    /// Apply this operator to `arguments`, producing a type.
    ///
    /// The operator must be classified, and every argument must be of the
    /// element kind its classification holds.
    pub fn instantiate(&self, arguments: Sequence) -> Result<Ty> {
        let Classified::Kind(tag) = self.classify() else {
            return Err(Error::Unclassified { operator: self.name });
        };
        let arguments = arguments.with_repr(Repr::Native(tag))?;
        Ok(Ty::Instance(Instance::new(*self, arguments)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
