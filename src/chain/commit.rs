//! Reifying a chain's result.
//!
//! A commit holds a checked route, not a result: every target method runs
//! the whole chain again from the seed.

use alloc::vec::Vec;
use core::fmt;

use super::accumulator::{Accumulator, AccumulatorKind};
use super::step::{self, Step};
use crate::error::{Error, Result};
use crate::kind::{KindTag, Operator};
use crate::primitives::Value;
use crate::seq::{Element, Repr, Sequence, Ty};

/// The output kind a commit was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Element,
    Value,
    Sequence(KindTag),
    Generic,
    Instance(Operator),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Element => f.write_str("an element"),
            Target::Value => f.write_str("a value"),
            Target::Sequence(tag) => write!(f, "a {} sequence", tag),
            Target::Generic => f.write_str("a generic sequence"),
            Target::Instance(op) => write!(f, "an instance of {}", op),
        }
    }
}

/// One checked step: where it was listed and what it must produce.
pub(crate) struct Link<'c> {
    pub(crate) index: usize,
    pub(crate) step: &'c dyn Step,
    pub(crate) declared: AccumulatorKind,
}

/// A checked chain, ready to be reified.
pub struct Commit<'c> {
    seed: &'c Accumulator,
    links: Vec<Link<'c>>,
}

impl<'c> Commit<'c> {
    /// `links` in application order.
    pub(crate) fn new(seed: &'c Accumulator, links: Vec<Link<'c>>) -> Self {
        Commit { seed, links }
    }

    /// The declared kind of the final accumulator.
    pub fn kind(&self) -> AccumulatorKind {
        self.links.last().map_or_else(|| self.seed.kind(), |link| link.declared)
    }

    /// Run the chain and return the raw accumulator.
    pub fn accumulator(&self) -> Result<Accumulator> {
        self.links
            .iter()
            .try_fold(self.seed.clone(), |acc, link| step::run(link.index, link.step, link.declared, acc))
    }

    /// An element; a one-element sequence is unwrapped.
    pub fn element(&self) -> Result<Element> {
        match self.accumulator()? {
            Accumulator::Element(element) => Ok(element),
            Accumulator::Sequence(seq) => {
                let mut elements = seq.into_elements();
                match elements.len() {
                    1 => Ok(elements.remove(0)),
                    len => Err(Error::Singleton { len }),
                }
            }
        }
    }

    pub fn value(&self) -> Result<Value> {
        let element = self.element()?;
        element.as_value().ok_or(Error::Commit {
            found: AccumulatorKind::Element(element.kind()),
            target: Target::Value,
        })
    }

    /// A native sequence of kind `tag`; an element is wrapped.
    pub fn sequence(&self, tag: KindTag) -> Result<Sequence> {
        let accumulator = self.accumulator()?;
        let found = accumulator.kind();
        let converted = match accumulator {
            Accumulator::Element(element) => Sequence::native(tag, [element]),
            Accumulator::Sequence(seq) => seq.with_repr(Repr::Native(tag)),
        };
        converted.map_err(|_| Error::Commit { found, target: Target::Sequence(tag) })
    }

    /// A generic sequence; an element is wrapped.
    pub fn generic(&self) -> Result<Sequence> {
        Ok(match self.accumulator()? {
            Accumulator::Element(element) => Sequence::generic([element]),
            Accumulator::Sequence(seq) => Sequence::generic(seq),
        })
    }

    /// `op` instantiated with the result as its arguments.
    pub fn instance(&self, op: &Operator) -> Result<Ty> {
        let arguments = match self.accumulator()? {
            Accumulator::Element(element) => Sequence::generic([element]),
            Accumulator::Sequence(seq) => seq,
        };
        op.instantiate(arguments)
    }
}
