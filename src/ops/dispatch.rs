//! Routing between native and generic implementations.
//!
//! An operation implements [`KindIndexed`] once: `native` receives the
//! shared kind of its inputs, `generic` receives everything else. Which one
//! runs is decided by the classifier alone.
//!
//! ```ignore
//! struct Reverse;
//!
//! impl KindIndexed for Reverse {
//!     type Output = Sequence;
//!     fn native(&self, tag: KindTag, inputs: &[&Sequence]) -> Result<Sequence> { ... }
//!     fn generic(&self, inputs: &[&Sequence], _: Option<usize>) -> Result<Sequence> { ... }
//! }
//!
//! let reversed = dispatch(&Reverse, &[&seq])?;
//! ```

use crate::error::Result;
use crate::interview::{Interview, SearchResult};
use crate::kind::{Classified, KindTag};
use crate::predicate::{not, IsKind};
use crate::seq::Sequence;

/// Which implementation a list of inputs is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Every input is a native sequence of this kind.
    Native(KindTag),
    /// The inputs do not share one native kind. `disagreement` is the first
    /// input that breaks agreement; `None` when there are no inputs.
    Generic { disagreement: Option<usize> },
}

/// An operation with a native path and a generic fallback.
pub trait KindIndexed {
    type Output;

    fn native(&self, tag: KindTag, inputs: &[&Sequence]) -> Result<Self::Output>;

    fn generic(&self, inputs: &[&Sequence], disagreement: Option<usize>) -> Result<Self::Output>;
}

/// Classify a list of inputs.
pub fn route(inputs: &[&Sequence]) -> Route {
    let Some(first) = inputs.first() else {
        return Route::Generic { disagreement: None };
    };
    let Classified::Kind(tag) = first.kind() else {
        return Route::Generic { disagreement: Some(0) };
    };
    match Interview::left().find(inputs, &not(IsKind(tag))) {
        SearchResult::Found(index) => Route::Generic { disagreement: Some(index) },
        SearchResult::Sentinel => Route::Native(tag),
    }
}

/// Run `op` on whichever path `inputs` route to.
pub fn dispatch<K: KindIndexed + ?Sized>(op: &K, inputs: &[&Sequence]) -> Result<K::Output> {
    let route = route(inputs);
    tracing::debug!(?route, inputs = inputs.len(), "dispatch");
    match route {
        Route::Native(tag) => op.native(tag, inputs),
        Route::Generic { disagreement } => op.generic(inputs, disagreement),
    }
}
