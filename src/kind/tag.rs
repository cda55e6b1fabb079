//! The fourteen kind tags.
//!
//! A kind is a pair (nesting depth, innermost category). Depth 1 operators
//! take types or values; depth `d + 1` operators take depth `d` operators.
//!
//! Every tag is registered once in the `kind_table!` below. The table
//! generates the `KindTag` enum, its per-tag data, and the per-tag
//! classification predicates (`is_type1` .. `is_value7`).

use core::fmt;

use super::operator::Operator;
use super::param::{Param, Signature};
use crate::primitives::const_utils::in_range;
use crate::seq::ElementKind;

/// Deepest nesting the classifier recognises.
pub const MAX_DEPTH: u8 = 7;

/// Innermost parameter category of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Type,
    Value,
}

impl Category {
    /// Const equality.
    pub const fn same(self, other: Category) -> bool {
        self as u8 == other as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Type => f.write_str("type"),
            Category::Value => f.write_str("value"),
        }
    }
}

// =============================================================================
// Canonical Signatures
// =============================================================================

const TYPE_1: Signature = Signature(&[Param::Types]);
const TYPE_2: Signature = Signature(&[Param::Operators(TYPE_1)]);
const TYPE_3: Signature = Signature(&[Param::Operators(TYPE_2)]);
const TYPE_4: Signature = Signature(&[Param::Operators(TYPE_3)]);
const TYPE_5: Signature = Signature(&[Param::Operators(TYPE_4)]);
const TYPE_6: Signature = Signature(&[Param::Operators(TYPE_5)]);
const TYPE_7: Signature = Signature(&[Param::Operators(TYPE_6)]);

const VALUE_1: Signature = Signature(&[Param::Values]);
const VALUE_2: Signature = Signature(&[Param::Operators(VALUE_1)]);
const VALUE_3: Signature = Signature(&[Param::Operators(VALUE_2)]);
const VALUE_4: Signature = Signature(&[Param::Operators(VALUE_3)]);
const VALUE_5: Signature = Signature(&[Param::Operators(VALUE_4)]);
const VALUE_6: Signature = Signature(&[Param::Operators(VALUE_5)]);
const VALUE_7: Signature = Signature(&[Param::Operators(VALUE_6)]);

// =============================================================================
// Registration Table
// =============================================================================

macro_rules! kind_table {
    ($( $tag:ident => ($depth:literal, $category:ident, $signature:ident, $container:literal) ),* $(,)?) => {
        /// Classification of an operator by nesting depth and innermost category.
        ///
        /// Variants are ordered shallow to deep, so the derived `Ord` sorts
        /// by depth first.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum KindTag {
            $( $tag, )*
        }

        impl KindTag {
            /// Every tag, shallow to deep.
            pub const ALL: &'static [KindTag] = &[$( KindTag::$tag, )*];

            pub const fn depth(self) -> u8 {
                match self {
                    $( KindTag::$tag => $depth, )*
                }
            }

            pub const fn category(self) -> Category {
                match self {
                    $( KindTag::$tag => Category::$category, )*
                }
            }

            /// The canonical parameter list of this kind.
            pub const fn signature(self) -> Signature {
                match self {
                    $( KindTag::$tag => $signature, )*
                }
            }

            /// The native sequence container of this kind: an operator of
            /// this kind that holds elements one level shallower.
            pub const fn container(self) -> Operator {
                match self {
                    $( KindTag::$tag => Operator::new($container, $signature), )*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( KindTag::$tag => stringify!($tag), )*
                }
            }
        }

        paste::paste! {
            $(
                #[doc = concat!("`true` if `op` classifies as [`KindTag::", stringify!($tag), "`].")]
                pub const fn [<is_ $tag:lower>](op: &Operator) -> bool {
                    op.classify().is(KindTag::$tag)
                }
            )*
        }
    };
}

kind_table! {
    Type1  => (1, Type,  TYPE_1,  "TypePack"),
    Value1 => (1, Value, VALUE_1, "ValuePack"),
    Type2  => (2, Type,  TYPE_2,  "TypePack2"),
    Value2 => (2, Value, VALUE_2, "ValuePack2"),
    Type3  => (3, Type,  TYPE_3,  "TypePack3"),
    Value3 => (3, Value, VALUE_3, "ValuePack3"),
    Type4  => (4, Type,  TYPE_4,  "TypePack4"),
    Value4 => (4, Value, VALUE_4, "ValuePack4"),
    Type5  => (5, Type,  TYPE_5,  "TypePack5"),
    Value5 => (5, Value, VALUE_5, "ValuePack5"),
    Type6  => (6, Type,  TYPE_6,  "TypePack6"),
    Value6 => (6, Value, VALUE_6, "ValuePack6"),
    Type7  => (7, Type,  TYPE_7,  "TypePack7"),
    Value7 => (7, Value, VALUE_7, "ValuePack7"),
}

impl KindTag {
    /// Look a tag up by its two coordinates.
    pub const fn from_parts(depth: u8, category: Category) -> Option<KindTag> {
        if !in_range(depth, 1, MAX_DEPTH) {
            return None;
        }
        let mut i = 0;
        while i < Self::ALL.len() {
            let tag = Self::ALL[i];
            if tag.depth() == depth && tag.category().same(category) {
                return Some(tag);
            }
            i += 1;
        }
        None
    }

    /// The kind one level deeper, `None` at [`MAX_DEPTH`].
    pub const fn promote(self) -> Option<KindTag> {
        Self::from_parts(self.depth() + 1, self.category())
    }

    /// The kind one level shallower, `None` at depth 1.
    pub const fn demote(self) -> Option<KindTag> {
        if self.depth() == 1 {
            None
        } else {
            Self::from_parts(self.depth() - 1, self.category())
        }
    }

    /// Const equality.
    pub const fn same(self, other: KindTag) -> bool {
        self as u8 == other as u8
    }

    /// What a native sequence of this kind holds.
    pub const fn element_kind(self) -> ElementKind {
        match self.demote() {
            Some(inner) => ElementKind::Operator(super::Classified::Kind(inner)),
            None => match self.category() {
                Category::Type => ElementKind::Type,
                Category::Value => ElementKind::Value,
            },
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_pair_once() {
        assert_eq!(KindTag::ALL.len(), 14);
        for depth in 1..=MAX_DEPTH {
            for category in [Category::Type, Category::Value] {
                let tag = KindTag::from_parts(depth, category).unwrap();
                assert_eq!(tag.depth(), depth);
                assert_eq!(tag.category(), category);
            }
        }
        assert_eq!(KindTag::from_parts(0, Category::Type), None);
        assert_eq!(KindTag::from_parts(8, Category::Value), None);
    }

    #[test]
    fn promote_and_demote_are_inverse() {
        for &tag in KindTag::ALL {
            if let Some(up) = tag.promote() {
                assert_eq!(up.demote(), Some(tag));
            } else {
                assert_eq!(tag.depth(), MAX_DEPTH);
            }
        }
    }

    #[test]
    fn ordering_is_shallow_to_deep() {
        let mut sorted = KindTag::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, KindTag::ALL);
        assert!(KindTag::Value1 < KindTag::Type2);
    }

    #[test]
    fn element_kinds_step_down_one_level() {
        assert_eq!(KindTag::Type1.element_kind(), ElementKind::Type);
        assert_eq!(KindTag::Value1.element_kind(), ElementKind::Value);
        assert_eq!(
            KindTag::Value3.element_kind(),
            ElementKind::Operator(super::super::Classified::Kind(KindTag::Value2))
        );
    }
}
