//! Built-in steps.
//!
//! | step          | accepts            | produces                          |
//! |---------------|--------------------|-----------------------------------|
//! | `fold`        | any sequence       | element of the seed's kind        |
//! | `sum`         | `Value1` sequence  | value                             |
//! | `map`         | any sequence       | native sequence of the mapped kind |
//! | `filter`      | any sequence       | same                              |
//! | `sieve`       | any sequence       | same                              |
//! | `paste_with`  | any sequence       | same, or generic on disagreement  |
//! | `zip_with`    | same kind as other | `Type1` sequence                  |
//! | `wrap`        | any element        | one-element sequence              |
//! | `unwrap`      | native sequence    | its element kind                  |
//! | `instantiate` | any sequence       | type                              |

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::accumulator::{Accumulator, AccumulatorKind, Shape};
use super::commit::Target;
use super::step::Step;
use crate::error::{Error, Result};
use crate::kind::{KindTag, Operator};
use crate::ops;
use crate::predicate::Predicate;
use crate::primitives::Value;
use crate::seq::{Element, ElementKind, Repr, Sequence};

/// The sequence inside an accumulator that a sequence-only step was given.
fn sequence(accumulator: Accumulator) -> Result<Sequence> {
    match accumulator {
        Accumulator::Sequence(seq) => Ok(seq),
        Accumulator::Element(element) => Err(Error::Commit {
            found: AccumulatorKind::Element(element.kind()),
            target: Target::Generic,
        }),
    }
}

fn container_repr(kind: ElementKind) -> Repr {
    kind.container().map_or(Repr::Generic, Repr::Native)
}

// =============================================================================
// Folds
// =============================================================================

pub struct Fold<F> {
    seed: Element,
    f: F,
}

/// Fold a sequence into one element, starting from `seed`.
///
/// Every intermediate result must stay of `seed`'s kind.
pub fn fold<F>(seed: impl Into<Element>, f: F) -> Fold<F>
where
    F: Fn(Element, &Element) -> Result<Element> + Send + Sync,
{
    Fold { seed: seed.into(), f }
}

impl<F> Step for Fold<F>
where
    F: Fn(Element, &Element) -> Result<Element> + Send + Sync,
{
    fn name(&self) -> &str {
        "fold"
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_SEQUENCE
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(AccumulatorKind::Element(self.seed.kind()))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let folded = sequence(accumulator)?
            .iter()
            .try_fold(self.seed.clone(), |acc, element| (self.f)(acc, element))?;
        Ok(Accumulator::Element(folded))
    }
}

/// Running integer sum of a value sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

pub fn sum() -> Sum {
    Sum
}

impl Step for Sum {
    fn name(&self) -> &str {
        "sum"
    }

    fn accepts(&self) -> Shape {
        Shape::Sequence(Some(Repr::Native(KindTag::Value1)))
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(AccumulatorKind::Element(ElementKind::Value))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let seq = sequence(accumulator)?;
        let total = seq.iter().filter_map(Element::as_value).try_fold(Value::Int(0), |total, value| {
            match value.as_int() {
                Some(_) => total.checked_add(value).ok_or(Error::Overflow),
                None => Err(Error::NotAnInteger { value }),
            }
        })?;
        Ok(Accumulator::Element(Element::Value(total)))
    }
}

// =============================================================================
// Element-wise
// =============================================================================

pub struct Map<F> {
    output: ElementKind,
    f: F,
}

/// Map every element to an element of kind `output`.
pub fn map<F>(output: ElementKind, f: F) -> Map<F>
where
    F: Fn(&Element) -> Element + Send + Sync,
{
    Map { output, f }
}

impl<F> Step for Map<F>
where
    F: Fn(&Element) -> Element + Send + Sync,
{
    fn name(&self) -> &str {
        "map"
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_SEQUENCE
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(AccumulatorKind::Sequence(container_repr(self.output)))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let mapped: Vec<Element> = sequence(accumulator)?.iter().map(&self.f).collect();
        if let Some((index, element)) = mapped.iter().enumerate().find(|(_, e)| e.kind() != self.output) {
            return Err(Error::ElementKind { index, expected: self.output, found: element.kind() });
        }
        Ok(Accumulator::Sequence(Sequence::from_parts(container_repr(self.output), mapped)))
    }
}

type BoxedPredicate = Box<dyn Predicate<Element> + Send + Sync>;

/// Keep (`filter`) or drop (`sieve`) the elements a predicate selects.
pub struct Select {
    predicate: BoxedPredicate,
    keep: bool,
}

pub fn filter(predicate: impl Predicate<Element> + Send + Sync + 'static) -> Select {
    Select { predicate: Box::new(predicate), keep: true }
}

pub fn sieve(rejection: impl Predicate<Element> + Send + Sync + 'static) -> Select {
    Select { predicate: Box::new(rejection), keep: false }
}

impl Step for Select {
    fn name(&self) -> &str {
        if self.keep { "filter" } else { "sieve" }
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_SEQUENCE
    }

    fn produces(&self, input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(input)
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let seq = sequence(accumulator)?;
        let predicate: &dyn Predicate<Element> = &*self.predicate;
        let selected = if self.keep {
            ops::filter(&seq, &[predicate])
        } else {
            ops::sieve(&seq, &[predicate])
        };
        Ok(Accumulator::Sequence(selected))
    }
}

// =============================================================================
// Whole-sequence
// =============================================================================

pub struct PasteWith {
    tail: Sequence,
}

/// Append `tail` to the accumulator.
pub fn paste_with(tail: Sequence) -> PasteWith {
    PasteWith { tail }
}

impl Step for PasteWith {
    fn name(&self) -> &str {
        "paste_with"
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_SEQUENCE
    }

    fn produces(&self, input: AccumulatorKind) -> Result<AccumulatorKind> {
        let repr = match input {
            AccumulatorKind::Sequence(repr) if repr == self.tail.repr() => repr,
            _ => Repr::Generic,
        };
        Ok(AccumulatorKind::Sequence(repr))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let head = sequence(accumulator)?;
        Ok(Accumulator::Sequence(ops::paste(&[&head, &self.tail])))
    }
}

pub struct ZipWith {
    other: Sequence,
}

/// Zip the accumulator with `other`. Fails right away if `other` is generic.
pub fn zip_with(other: Sequence) -> Result<ZipWith> {
    match other.repr() {
        Repr::Generic => Err(Error::ZipGeneric { input: 1 }),
        Repr::Native(_) => Ok(ZipWith { other }),
    }
}

impl Step for ZipWith {
    fn name(&self) -> &str {
        "zip_with"
    }

    fn accepts(&self) -> Shape {
        Shape::Sequence(Some(self.other.repr()))
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(AccumulatorKind::Sequence(Repr::Native(KindTag::Type1)))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let seq = sequence(accumulator)?;
        ops::zip(&[&seq, &self.other]).map(Accumulator::Sequence)
    }
}

// =============================================================================
// Kind transitions
// =============================================================================

/// Element to one-element sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrap;

pub fn wrap() -> Wrap {
    Wrap
}

impl Step for Wrap {
    fn name(&self) -> &str {
        "wrap"
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_ELEMENT
    }

    fn produces(&self, input: AccumulatorKind) -> Result<AccumulatorKind> {
        match input {
            AccumulatorKind::Element(kind) => Ok(AccumulatorKind::Sequence(container_repr(kind))),
            AccumulatorKind::Sequence(_) => Err(Error::Commit { found: input, target: Target::Element }),
        }
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        match accumulator {
            Accumulator::Element(element) => {
                let repr = container_repr(element.kind());
                Ok(Accumulator::Sequence(Sequence::from_parts(repr, alloc::vec![element])))
            }
            Accumulator::Sequence(seq) => Err(Error::Commit {
                found: AccumulatorKind::Sequence(seq.repr()),
                target: Target::Element,
            }),
        }
    }
}

/// One-element native sequence to its element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwrap;

pub fn unwrap() -> Unwrap {
    Unwrap
}

impl Step for Unwrap {
    fn name(&self) -> &str {
        "unwrap"
    }

    fn accepts(&self) -> Shape {
        Shape::Native
    }

    fn produces(&self, input: AccumulatorKind) -> Result<AccumulatorKind> {
        match input {
            AccumulatorKind::Sequence(Repr::Native(tag)) => Ok(AccumulatorKind::Element(tag.element_kind())),
            _ => Err(Error::Commit { found: input, target: Target::Element }),
        }
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let seq = sequence(accumulator)?;
        let mut elements = seq.into_elements();
        match elements.len() {
            1 => Ok(Accumulator::Element(elements.remove(0))),
            len => Err(Error::Singleton { len }),
        }
    }
}

pub struct Instantiate {
    op: Operator,
}

/// Sequence to an instance of `op`. Fails right away if `op` is unclassified.
pub fn instantiate(op: Operator) -> Result<Instantiate> {
    if op.classify().is_unclassified() {
        return Err(Error::Unclassified { operator: op.name() });
    }
    Ok(Instantiate { op })
}

impl Step for Instantiate {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn accepts(&self) -> Shape {
        Shape::ANY_SEQUENCE
    }

    fn produces(&self, _input: AccumulatorKind) -> Result<AccumulatorKind> {
        Ok(AccumulatorKind::Element(ElementKind::Type))
    }

    fn apply(&self, accumulator: Accumulator) -> Result<Accumulator> {
        let arguments = sequence(accumulator)?;
        let ty = self.op.instantiate(arguments)?;
        Ok(Accumulator::Element(Element::Type(ty)))
    }
}
