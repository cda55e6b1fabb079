//! One predicate folded over a sequence.
//!
//! `all_satisfy` holds on empty input and `any_satisfy` fails on it, so
//! `all_satisfy(p, s) == !any_satisfy(not(p), s)` for every `s`.

use super::combinator::Predicate;

pub fn all_satisfy<'a, T, P>(predicate: &P, items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: 'a + ?Sized,
    P: Predicate<T> + ?Sized,
{
    items.into_iter().all(|item| predicate.test(item))
}

pub fn any_satisfy<'a, T, P>(predicate: &P, items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: 'a + ?Sized,
    P: Predicate<T> + ?Sized,
{
    items.into_iter().any(|item| predicate.test(item))
}

pub fn none_satisfy<'a, T, P>(predicate: &P, items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: 'a + ?Sized,
    P: Predicate<T> + ?Sized,
{
    !any_satisfy(predicate, items)
}

pub fn not_all_satisfy<'a, T, P>(predicate: &P, items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: 'a + ?Sized,
    P: Predicate<T> + ?Sized,
{
    !all_satisfy(predicate, items)
}
