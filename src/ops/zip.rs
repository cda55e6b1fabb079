//! Row-wise zip.

use alloc::vec::Vec;

use super::dispatch::{dispatch, KindIndexed};
use crate::error::{Error, Result};
use crate::kind::KindTag;
use crate::seq::{Element, Repr, Sequence};

/// Zip of sequences sharing one kind.
///
/// Row `r` is the common kind's container instantiated with the `r`th
/// element of every input, so the result is always a `Type1` sequence.
/// Rows past the shortest input are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zip;

impl KindIndexed for Zip {
    type Output = Sequence;

    fn native(&self, tag: KindTag, inputs: &[&Sequence]) -> Result<Sequence> {
        let rows = inputs.iter().map(|input| input.len()).min().unwrap_or(0);
        let container = tag.container();
        let tuples = (0..rows)
            .map(|row| {
                let column = inputs.iter().map(|input| input[row].clone()).collect();
                container
                    .instantiate(Sequence::from_parts(Repr::Native(tag), column))
                    .map(Element::Type)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Sequence::from_parts(Repr::Native(KindTag::Type1), tuples))
    }

    fn generic(&self, inputs: &[&Sequence], disagreement: Option<usize>) -> Result<Sequence> {
        match (inputs.first(), disagreement) {
            (None, _) | (_, None) => Ok(Sequence::empty(Repr::Native(KindTag::Type1))),
            (Some(first), Some(input)) => match first.repr() {
                Repr::Generic => Err(Error::ZipGeneric { input: 0 }),
                expected => match inputs[input].repr() {
                    Repr::Generic => Err(Error::ZipGeneric { input }),
                    found => Err(Error::Zip { input, expected, found }),
                },
            },
        }
    }
}

/// Zip `inputs` into rows. Every input must be native and of one kind.
pub fn zip(inputs: &[&Sequence]) -> Result<Sequence> {
    dispatch(&Zip, inputs)
}
