//! Steps: kind-declaring transformations of an accumulator.

use alloc::boxed::Box;

use super::accumulator::{Accumulator, AccumulatorKind, Shape};
use crate::error::{Error, Result};

/// One transformation in a chain.
///
/// A step declares what it accepts and, for each accepted kind, what it
/// produces. Chains check those declarations before running anything, and
/// check every produced accumulator against them while running.
pub trait Step: Send + Sync {
    fn name(&self) -> &str;

    fn accepts(&self) -> Shape;

    /// The kind produced from an accepted `input`.
    fn produces(&self, input: AccumulatorKind) -> Result<AccumulatorKind>;

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator>;
}

/// A step backed by a closure, with a fixed output kind.
pub struct FnStep<F> {
    name: &'static str,
    accepts: Shape,
    produces: AccumulatorKind,
    f: F,
}

impl<F> Step for FnStep<F>
where
    F: Fn(Accumulator) -> Result<Accumulator> + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn accepts(&self) -> Shape {
        self.accepts
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(self.produces)
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        (self.f)(accumulator)
    }
}

/// Build a step from a closure.
///
/// ```ignore
/// let double = step("double", Shape::ANY_ELEMENT, AccumulatorKind::Element(ElementKind::Value), |acc| ...);
/// ```
pub fn step<F>(name: &'static str, accepts: Shape, produces: AccumulatorKind, f: F) -> FnStep<F>
where
    F: Fn(Accumulator) -> Result<Accumulator> + Send + Sync,
{
    FnStep { name, accepts, produces, f }
}

/// Check step `index` against the kind flowing into it.
pub(crate) fn advance(index: usize, step: &dyn Step, current: AccumulatorKind) -> Result<AccumulatorKind> {
    let expected = step.accepts();
    if !expected.admits(current) {
        return Err(Error::StepKind { step: index, expected, found: current });
    }
    step.produces(current).map_err(|source| Error::Step { step: index, source: Box::new(source) })
}

/// Run step `index` and hold it to its declaration.
pub(crate) fn run(
    index: usize,
    step: &dyn Step,
    declared: AccumulatorKind,
    accumulator: Accumulator,
) -> Result<Accumulator> {
    let produced = step
        .apply(accumulator)
        .map_err(|source| Error::Step { step: index, source: Box::new(source) })?;
    let kind = produced.kind();
    if kind != declared {
        return Err(Error::StepContract { step: index, declared, produced: kind });
    }
    tracing::trace!(step = index, name = step.name(), %kind, "step applied");
    Ok(produced)
}
