//! Questions: predicates widened with context and an interviewer.
//!
//! A plain predicate only sees the candidate. A question also sees the
//! elements already scanned (the prefix for a left interview, the suffix
//! for a right one) and the interviewer, which may be of another kind than
//! the candidates.

use core::marker::PhantomData;

use crate::predicate::Predicate;

/// `ask(context, interviewer, candidate)`.
pub trait Question<I: ?Sized, T> {
    fn ask(&self, context: &[T], interviewer: &I, candidate: &T) -> bool;
}

impl<I: ?Sized, T, F> Question<I, T> for F
where
    F: Fn(&[T], &I, &T) -> bool,
{
    #[inline]
    fn ask(&self, context: &[T], interviewer: &I, candidate: &T) -> bool {
        self(context, interviewer, candidate)
    }
}

/// Lifts a candidate-only predicate into a question.
pub struct Plain<'p, T>(pub &'p dyn Predicate<T>);

impl<T> Question<(), T> for Plain<'_, T> {
    fn ask(&self, _context: &[T], _interviewer: &(), candidate: &T) -> bool {
        self.0.test(candidate)
    }
}

/// Lifts a cross-kind comparator `(interviewer, candidate) -> bool` into a
/// question.
pub struct Kindred<I: ?Sized, T, F> {
    comparator: F,
    _kinds: PhantomData<fn(&I, &T)>,
}

impl<I: ?Sized, T, F> Kindred<I, T, F>
where
    F: Fn(&I, &T) -> bool,
{
    pub fn new(comparator: F) -> Self {
        Kindred { comparator, _kinds: PhantomData }
    }
}

impl<I: ?Sized, T, F> Question<I, T> for Kindred<I, T, F>
where
    F: Fn(&I, &T) -> bool,
{
    fn ask(&self, _context: &[T], interviewer: &I, candidate: &T) -> bool {
        (self.comparator)(interviewer, candidate)
    }
}
