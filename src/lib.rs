#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables the std support of the error and logging crates

//! # kindred
//!
//! Kind classification for operators, and generic algorithms that work the
//! same way across the whole kind hierarchy.
//!
//! An *operator* is a named generic construct with a uniform parameter list:
//! a pack of types, a pack of values, or a pack of shallower operators.
//! Classification sorts every operator into one of fourteen kinds (depth
//! 1..7 times {type, value}) or reports it unclassified.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0-1: Primitives, Kind Classifier                           |
//! |  - Value, Param, Signature, Operator, KindTag, classify()         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2-3: Sequences, Predicate Combinators                      |
//! |  - Element, Sequence (native / generic), all/any/none, IsKind     |
//! +-------------------------------------------------------------------+
//!                                |
//!                 +--------------+--------------+
//!                 v                             v
//! +-------------------------------+ +-------------------------------+
//! |  Layer 4: Interview           | |  Layer 5: Kind-Indexed Ops    |
//! |  - left/right, priority list, | |  - zip, filter, sieve,        |
//! |    Sentinel, kindred          | |    paste, repack              |
//! +-------------------------------+ +-------------------------------+
//!                 |                             |
//!                 +--------------+--------------+
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 6: Chain Fold Engine                                       |
//! |  - Trip, Trek, Step, Commit                                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kindred::prelude::*;
//!
//! const ROAD: Operator = operator!(Road: op(type..)..);
//! assert_kind!(ROAD => Type2);
//!
//! let seq = seq![1, 2, 3, 4];
//! let total = Trip::new(seq).step(steps::sum())?.commit().value()?;
//! assert_eq!(total, Value::Int(10));
//! ```

// Allow `::kindred` to work inside the crate itself
extern crate self as kindred;

extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Kind Classifier
// =============================================================================
pub mod kind;

// =============================================================================
// Layer 2: Sequences
// =============================================================================
pub mod seq;

pub mod error;

// =============================================================================
// Layer 3: Predicate Combinators
// =============================================================================
pub mod predicate;

// =============================================================================
// Layer 4: Interview Search Engine
// =============================================================================
pub mod interview;

// =============================================================================
// Layer 5: Kind-Indexed Operations
// =============================================================================
pub mod ops;

// =============================================================================
// Layer 6: Chain Fold Engine
// =============================================================================
pub mod chain;

pub use chain::steps;

// Syntax macros (seq!, operator!, assert_kind!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use chain::{Accumulator, AccumulatorKind, Commit, Shape, Step, Target, Trek, Trip};
pub use error::{Error, Result};
pub use interview::{search, search_right, Anchor, Hit, Interview, Precedence, SearchResult};
pub use kind::{classify, classify_signature, Category, Classified, Classify, KindTag, Operator, Param, Signature};
pub use ops::{paste, repack, sieve, zip};
pub use predicate::{all_satisfy, any_satisfy, none_satisfy, not_all_satisfy, Predicate};
pub use primitives::Value;
pub use seq::{Element, ElementKind, Instance, Repr, Sequence, Ty};

// Re-export proc-macros
pub use macros::{kind_check, signature};

/// Common items for working with kinds and sequences.
pub mod prelude {
    pub use crate::chain::{steps, Accumulator, AccumulatorKind, Shape, Step, Trek, Trip};
    pub use crate::interview::{Anchor, Interview, Precedence, SearchResult};
    pub use crate::kind::{Category, Classified, Classify, KindTag, Operator, Signature};
    pub use crate::ops::{filter, paste, repack, sieve, zip};
    pub use crate::predicate::{and, not, or, IsCategory, IsDepth, IsKind, Predicate};
    pub use crate::seq::{Element, ElementKind, Repr, Sequence, Ty};
    pub use crate::{assert_kind, operator, seq};
    pub use crate::{Error, Result, Value};
    pub use macros::{kind_check, signature};
}
