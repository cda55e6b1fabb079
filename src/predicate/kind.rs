//! Classifier-backed predicates.
//!
//! These drive kind-indexed dispatch; they work over anything that
//! implements [`Classify`].

use crate::kind::{Category, Classify, KindTag};

use super::combinator::Predicate;

/// Classifies as exactly this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsKind(pub KindTag);

/// Classifies with this innermost category, at any depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsCategory(pub Category);

/// Classifies at this depth, either category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsDepth(pub u8);

/// Does not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsUnclassified;

impl<T: Classify + ?Sized> Predicate<T> for IsKind {
    fn test(&self, item: &T) -> bool {
        item.classify().is(self.0)
    }
}

impl<T: Classify + ?Sized> Predicate<T> for IsCategory {
    fn test(&self, item: &T) -> bool {
        item.classify().is_category(self.0)
    }
}

impl<T: Classify + ?Sized> Predicate<T> for IsDepth {
    fn test(&self, item: &T) -> bool {
        item.classify().has_depth(self.0)
    }
}

impl<T: Classify + ?Sized> Predicate<T> for IsUnclassified {
    fn test(&self, item: &T) -> bool {
        item.classify().is_unclassified()
    }
}
