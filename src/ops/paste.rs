//! Concatenation.
//!
//! Inputs sharing one native kind keep it; anything else falls back to the
//! generic representation. Paste never fails.

use alloc::vec::Vec;

use crate::error::Result;
use crate::kind::Operator;
use crate::seq::{Element, Repr, Sequence, Ty};

use super::dispatch::{route, Route};

/// Concatenate `inputs` in order.
pub fn paste(inputs: &[&Sequence]) -> Sequence {
    let elements: Vec<Element> = inputs.iter().flat_map(|input| input.iter().cloned()).collect();
    match route(inputs) {
        Route::Native(tag) => Sequence::from_parts(Repr::Native(tag), elements),
        Route::Generic { .. } => Sequence::generic(elements),
    }
}

/// Concatenate `inputs` and instantiate `op` with the result.
///
/// The pasted elements must fit `op`'s kind, whatever the inputs'
/// representations were.
pub fn repack(op: &Operator, inputs: &[&Sequence]) -> Result<Ty> {
    op.instantiate(paste(inputs))
}
