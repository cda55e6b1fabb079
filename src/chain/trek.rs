//! Composed chains.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::accumulator::{Accumulator, AccumulatorKind};
use super::commit::{Commit, Link};
use super::step::{advance, Step};
use crate::error::Result;
use crate::interview::{Interview, SearchResult};

type BoxedStep = Box<dyn Step>;

/// A seed and a composition of steps.
///
/// Steps are listed outermost first, as in `f(g(h(seed)))`, and applied
/// last to first. Nothing is checked until [`commit`](Trek::commit); errors
/// report listed positions.
pub struct Trek {
    seed: Accumulator,
    steps: Vec<BoxedStep>,
}

impl Trek {
    pub fn new(seed: impl Into<Accumulator>) -> Self {
        Trek { seed: seed.into(), steps: Vec::new() }
    }

    /// Add a step inside every step listed so far.
    pub fn step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check the whole route, then hand it to a [`Commit`].
    ///
    /// The first offending step in application order is found by a right
    /// interview: each candidate sees the steps applied before it.
    pub fn commit(&self) -> Result<Commit<'_>> {
        let seed = self.seed.kind();
        let offending = Interview::right().interview(&self.steps, &seed, &[&offends]);
        if let SearchResult::Found(index) = offending {
            tracing::debug!(step = index, "trek rejected");
            let incoming = flow(seed, &self.steps[index + 1..]).unwrap_or(seed);
            advance(index, &*self.steps[index], incoming)?;
        }

        let mut current = seed;
        let mut links = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate().rev() {
            current = advance(index, &**step, current)?;
            links.push(Link { index, step: &**step, declared: current });
        }
        tracing::debug!(steps = links.len(), %current, "trek accepted");
        Ok(Commit::new(&self.seed, links))
    }
}

/// The kind produced by `applied`, run last to first from `seed`.
fn flow(seed: AccumulatorKind, applied: &[BoxedStep]) -> Option<AccumulatorKind> {
    applied
        .iter()
        .rev()
        .try_fold(seed, |kind, step| advance(0, &**step, kind).ok())
}

fn offends(applied: &[BoxedStep], seed: &AccumulatorKind, candidate: &BoxedStep) -> bool {
    flow(*seed, applied).is_some_and(|incoming| advance(0, &**candidate, incoming).is_err())
}
