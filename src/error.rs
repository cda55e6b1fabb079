//! Crate error type.
//!
//! `Unclassified` operators and `Sentinel` search results are ordinary
//! values. Everything here is a usage error: a kind mismatch detected
//! before any output is produced.

use alloc::boxed::Box;

use crate::chain::{AccumulatorKind, Shape, Target};
use crate::primitives::Value;
use crate::seq::{ElementKind, Repr};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("element {index} is {found}, expected {expected}")]
    ElementKind { index: usize, expected: ElementKind, found: ElementKind },

    #[error("operator `{operator}` is unclassified and cannot be instantiated")]
    Unclassified { operator: &'static str },

    #[error("zip input {input} is a {found}, expected a {expected}")]
    Zip { input: usize, expected: Repr, found: Repr },

    #[error("zip input {input} is generic; zip needs classified inputs")]
    ZipGeneric { input: usize },

    #[error("step {step} accepts {expected}, but the accumulator is {found}")]
    StepKind { step: usize, expected: Shape, found: AccumulatorKind },

    #[error("step {step} declared {declared} but produced {produced}")]
    StepContract { step: usize, declared: AccumulatorKind, produced: AccumulatorKind },

    #[error("step {step} failed")]
    Step {
        step: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("cannot commit {found} as {target}")]
    Commit { found: AccumulatorKind, target: Target },

    #[error("expected a one-element sequence, found {len} elements")]
    Singleton { len: usize },

    #[error("`{value}` is not an integer")]
    NotAnInteger { value: Value },

    #[error("integer overflow")]
    Overflow,
}

/// Result type with the crate error as default.
pub type Result<T, E = Error> = core::result::Result<T, E>;
