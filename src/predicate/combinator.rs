//! Boolean algebra over predicates.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// A side-effect free test over one item.
///
/// Any `Fn(&T) -> bool` is a predicate.
pub trait Predicate<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

// =============================================================================
// Binary and Unary Forms
// =============================================================================

/// Both predicates hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B>(pub A, pub B);

/// Either predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B>(pub A, pub B);

/// The predicate does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&self, item: &T) -> bool {
        self.0.test(item) && self.1.test(item)
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&self, item: &T) -> bool {
        self.0.test(item) || self.1.test(item)
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&self, item: &T) -> bool {
        !self.0.test(item)
    }
}

pub fn and<A, B>(a: A, b: B) -> And<A, B> {
    And(a, b)
}

pub fn or<A, B>(a: A, b: B) -> Or<A, B> {
    Or(a, b)
}

pub fn not<P>(p: P) -> Not<P> {
    Not(p)
}

// =============================================================================
// List Forms
// =============================================================================

macro_rules! predicate_list {
    ($(#[$doc:meta])* $name:ident, $fold:ident, $negate:literal) => {
        $(#[$doc])*
        pub struct $name<'p, T: ?Sized> {
            predicates: Vec<Box<dyn Predicate<T> + 'p>>,
        }

        impl<'p, T: ?Sized> $name<'p, T> {
            pub fn new() -> Self {
                $name { predicates: Vec::new() }
            }

            /// Append a predicate to the list.
            pub fn with(mut self, predicate: impl Predicate<T> + 'p) -> Self {
                self.predicates.push(Box::new(predicate));
                self
            }

            pub fn len(&self) -> usize {
                self.predicates.len()
            }

            pub fn is_empty(&self) -> bool {
                self.predicates.is_empty()
            }
        }

        impl<'p, T: ?Sized> Default for $name<'p, T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'p, T: ?Sized> Predicate<T> for $name<'p, T> {
            fn test(&self, item: &T) -> bool {
                $negate != self.predicates.iter().$fold(|p| p.test(item))
            }
        }
    };
}

predicate_list!(
    /// Every listed predicate holds. Holds for an empty list.
    AllOf, all, false
);
predicate_list!(
    /// At least one listed predicate holds. Fails for an empty list.
    AnyOf, any, false
);
predicate_list!(
    /// No listed predicate holds. Holds for an empty list.
    NoneOf, any, true
);

#[cfg(test)]
mod tests {
    use super::*;

    fn even(n: &i64) -> bool {
        n % 2 == 0
    }

    fn positive(n: &i64) -> bool {
        *n > 0
    }

    #[test]
    fn binary_forms() {
        assert!(and(even, positive).test(&4_i64));
        assert!(!and(even, positive).test(&-4_i64));
        assert!(or(even, positive).test(&-4_i64));
        assert!(!or(even, positive).test(&-3_i64));
        assert!(not(even).test(&3_i64));
    }

    #[test]
    fn empty_lists() {
        assert!(AllOf::<i64>::new().test(&1));
        assert!(!AnyOf::<i64>::new().test(&1));
        assert!(NoneOf::<i64>::new().test(&1));
    }

    #[test]
    fn list_forms() {
        let all = AllOf::<i64>::new().with(even).with(positive);
        let any = AnyOf::<i64>::new().with(even).with(positive);
        let none = NoneOf::<i64>::new().with(even).with(positive);
        assert!(all.test(&2) && !all.test(&3));
        assert!(any.test(&3) && !any.test(&-3));
        assert!(none.test(&-3) && !none.test(&3));
    }
}
