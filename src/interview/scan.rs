//! The interview engine.
//!
//! Every search in the crate reduces to one bounded loop over candidate
//! positions. The loop order comes from the [`Anchor`]; how several
//! questions compete comes from the [`Precedence`].

use alloc::vec::Vec;

use super::question::Question;
use super::result::{Hit, SearchResult};
use crate::predicate::Predicate;

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// From index 0 upward; a candidate's context is its prefix.
    #[default]
    Left,
    /// From the last index downward; a candidate's context is its suffix.
    Right,
}

/// How a priority list of questions picks its winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precedence {
    /// The earliest-listed question that matches anywhere wins, at its
    /// first position in scan order.
    #[default]
    Predicate,
    /// The first position in scan order where any question matches wins;
    /// list order only breaks ties at that position.
    Position,
}

/// A configured search.
///
/// ```ignore
/// let at = Interview::right().search(&seq, &[&is_a]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interview {
    anchor: Anchor,
    precedence: Precedence,
}

impl Interview {
    pub const fn left() -> Self {
        Self::anchored(Anchor::Left)
    }

    pub const fn right() -> Self {
        Self::anchored(Anchor::Right)
    }

    pub const fn anchored(anchor: Anchor) -> Self {
        Interview { anchor, precedence: Precedence::Predicate }
    }

    pub const fn precedence(self, precedence: Precedence) -> Self {
        Interview { precedence, ..self }
    }

    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    // =========================================================================
    // Plain predicates
    // =========================================================================

    /// Position of the winning predicate's match, or `Sentinel`.
    pub fn search<T>(&self, items: &[T], predicates: &[&dyn Predicate<T>]) -> SearchResult {
        self.hit(items, predicates).into()
    }

    /// Like [`search`](Self::search), also reporting which predicate won.
    pub fn hit<T>(&self, items: &[T], predicates: &[&dyn Predicate<T>]) -> Option<Hit> {
        self.scan(items, predicates.len(), |question, _, candidate| predicates[question].test(candidate))
    }

    /// Single-predicate search.
    pub fn find<T>(&self, items: &[T], predicate: &dyn Predicate<T>) -> SearchResult {
        self.search(items, &[predicate])
    }

    pub fn contains<T>(&self, items: &[T], predicate: &dyn Predicate<T>) -> bool {
        self.find(items, predicate).is_found()
    }

    /// Number of matching positions. Does not stop early.
    pub fn count<T>(&self, items: &[T], predicate: &dyn Predicate<T>) -> usize {
        items.iter().filter(|item| predicate.test(item)).count()
    }

    /// Every matching position, in scan order.
    pub fn positions<T>(&self, items: &[T], predicate: &dyn Predicate<T>) -> Vec<usize> {
        self.order(items.len()).filter(|&index| predicate.test(&items[index])).collect()
    }

    // =========================================================================
    // Widened questions
    // =========================================================================

    /// Ask every candidate `questions` on behalf of `interviewer`.
    pub fn interview<I: ?Sized, T>(
        &self,
        items: &[T],
        interviewer: &I,
        questions: &[&dyn Question<I, T>],
    ) -> SearchResult {
        self.interview_hit(items, interviewer, questions).into()
    }

    pub fn interview_hit<I: ?Sized, T>(
        &self,
        items: &[T],
        interviewer: &I,
        questions: &[&dyn Question<I, T>],
    ) -> Option<Hit> {
        self.scan(items, questions.len(), |question, context, candidate| {
            questions[question].ask(context, interviewer, candidate)
        })
    }

    /// Search with an interviewer of another kind than the candidates.
    pub fn kindred<I: ?Sized, T>(
        &self,
        items: &[T],
        interviewer: &I,
        comparator: impl Fn(&I, &T) -> bool,
    ) -> SearchResult {
        self.scan(items, 1, |_, _, candidate| comparator(interviewer, candidate)).into()
    }

    // =========================================================================
    // Engine
    // =========================================================================

    fn order(&self, len: usize) -> impl Iterator<Item = usize> {
        let (forward, backward) = match self.anchor {
            Anchor::Left => (Some(0..len), None),
            Anchor::Right => (None, Some((0..len).rev())),
        };
        forward.into_iter().flatten().chain(backward.into_iter().flatten())
    }

    fn context<'a, T>(&self, items: &'a [T], index: usize) -> &'a [T] {
        match self.anchor {
            Anchor::Left => &items[..index],
            Anchor::Right => &items[index + 1..],
        }
    }

    fn scan<T>(
        &self,
        items: &[T],
        questions: usize,
        answers: impl Fn(usize, &[T], &T) -> bool,
    ) -> Option<Hit> {
        let ask = |predicate: usize, index: usize| {
            answers(predicate, self.context(items, index), &items[index]).then_some(Hit { index, predicate })
        };
        let hit = match self.precedence {
            Precedence::Predicate => {
                (0..questions).find_map(|predicate| self.order(items.len()).find_map(|index| ask(predicate, index)))
            }
            Precedence::Position => {
                self.order(items.len()).find_map(|index| (0..questions).find_map(|predicate| ask(predicate, index)))
            }
        };
        tracing::trace!(
            anchor = ?self.anchor,
            precedence = ?self.precedence,
            len = items.len(),
            questions,
            ?hit,
            "interview"
        );
        hit
    }
}

/// Left-anchored search with predicate priority.
pub fn search<T>(items: &[T], predicates: &[&dyn Predicate<T>]) -> SearchResult {
    Interview::left().search(items, predicates)
}

/// Right-anchored search with predicate priority.
pub fn search_right<T>(items: &[T], predicates: &[&dyn Predicate<T>]) -> SearchResult {
    Interview::right().search(items, predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn order_follows_the_anchor() {
        assert_eq!(Interview::left().order(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(Interview::right().order(3).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(Interview::right().order(0).count(), 0);
    }

    #[test]
    fn context_is_prefix_or_suffix() {
        let items = [10, 20, 30, 40];
        assert_eq!(Interview::left().context(&items, 2), &[10, 20]);
        assert_eq!(Interview::right().context(&items, 2), &[40]);
        assert_eq!(Interview::right().context(&items, 3), &[] as &[i32]);
    }
}
