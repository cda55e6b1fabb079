//! Forward chains.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::accumulator::{Accumulator, AccumulatorKind};
use super::commit::{Commit, Link};
use super::step::{advance, Step};
use crate::error::Result;

/// A seed and steps applied in listed order.
///
/// Each step is checked against the kind flowing into it as it is added,
/// so a `Trip` that exists is always runnable.
///
/// ```ignore
/// let total = Trip::new(Sequence::values([1, 2, 3, 4]))
///     .step(steps::sum())?
///     .commit()
///     .value()?;
/// ```
pub struct Trip {
    seed: Accumulator,
    steps: Vec<Box<dyn Step>>,
    kinds: Vec<AccumulatorKind>,
}

impl Trip {
    pub fn new(seed: impl Into<Accumulator>) -> Self {
        Trip { seed: seed.into(), steps: Vec::new(), kinds: Vec::new() }
    }

    /// The kind the next step will receive.
    pub fn kind(&self) -> AccumulatorKind {
        self.kinds.last().copied().unwrap_or_else(|| self.seed.kind())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step, rejecting it if it cannot accept the current kind.
    pub fn step(mut self, step: impl Step + 'static) -> Result<Self> {
        let index = self.steps.len();
        let next = advance(index, &step, self.kind())?;
        tracing::debug!(step = index, name = step.name(), %next, "trip step accepted");
        self.steps.push(Box::new(step));
        self.kinds.push(next);
        Ok(self)
    }

    pub fn commit(&self) -> Commit<'_> {
        let links = self
            .steps
            .iter()
            .zip(&self.kinds)
            .enumerate()
            .map(|(index, (step, &declared))| Link { index, step: &**step, declared })
            .collect();
        Commit::new(&self.seed, links)
    }
}
