//! Parameter-list shapes.
//!
//! An operator's signature is a `&'static` list of [`Param`]s, so it can be
//! written as a constant (usually through `signature!`) and classified by a
//! `const fn`.

use core::fmt;

use super::classify::{classify_signature, Classified};

/// One entry in an operator's parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// A single type parameter.
    Type,
    /// A single value parameter.
    Value,
    /// A variadic pack of types.
    Types,
    /// A variadic pack of values.
    Values,
    /// A single operator parameter with the given signature.
    Operator(Signature),
    /// A variadic pack of operators sharing the given signature.
    Operators(Signature),
}

impl Param {
    /// Structural equality in const context.
    pub const fn same(&self, other: &Param) -> bool {
        match (self, other) {
            (Param::Type, Param::Type)
            | (Param::Value, Param::Value)
            | (Param::Types, Param::Types)
            | (Param::Values, Param::Values) => true,
            (Param::Operator(a), Param::Operator(b)) | (Param::Operators(a), Param::Operators(b)) => {
                a.same(b)
            }
            _ => false,
        }
    }

    /// `true` for the variadic forms.
    pub const fn is_pack(&self) -> bool {
        matches!(self, Param::Types | Param::Values | Param::Operators(_))
    }
}

/// The parameter list of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub &'static [Param]);

impl Signature {
    /// A parameter list with no entries.
    pub const EMPTY: Signature = Signature(&[]);

    pub const fn params(&self) -> &'static [Param] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many operator levels the deepest parameter nests.
    pub const fn nesting(&self) -> usize {
        let mut deepest = 0;
        let mut i = 0;
        while i < self.0.len() {
            let level = match &self.0[i] {
                Param::Operator(inner) | Param::Operators(inner) => 1 + inner.nesting(),
                _ => 0,
            };
            if level > deepest {
                deepest = level;
            }
            i += 1;
        }
        deepest
    }

    /// Structural equality in const context.
    pub const fn same(&self, other: &Signature) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut i = 0;
        while i < self.0.len() {
            if !self.0[i].same(&other.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Classify this parameter list.
    pub const fn classify(&self) -> Classified {
        classify_signature(*self)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Type => f.write_str("type"),
            Param::Value => f.write_str("value"),
            Param::Types => f.write_str("type.."),
            Param::Values => f.write_str("value.."),
            Param::Operator(inner) => write!(f, "op({})", inner),
            Param::Operators(inner) => write!(f, "op({})..", inner),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const ROAD: Signature = Signature(&[Param::Operators(Signature(&[Param::Types]))]);
    const MIXED: Signature = Signature(&[Param::Type, Param::Operator(ROAD), Param::Values]);

    #[test]
    fn nesting_counts_the_deepest_parameter() {
        assert_eq!(Signature::EMPTY.nesting(), 0);
        assert_eq!(Signature(&[Param::Types]).nesting(), 0);
        assert_eq!(ROAD.nesting(), 1);
        assert_eq!(MIXED.nesting(), 2);
    }

    #[test]
    fn const_equality_matches_derived_equality() {
        const COPY: Signature = Signature(&[Param::Operators(Signature(&[Param::Types]))]);
        assert!(ROAD.same(&COPY));
        assert_eq!(ROAD, COPY);
        assert!(!ROAD.same(&MIXED));
    }

    #[test]
    fn display_uses_the_macro_notation() {
        assert_eq!(ROAD.to_string(), "op(type..)..");
        assert_eq!(MIXED.to_string(), "type, op(op(type..)..), value..");
    }
}
