//! # Layer 6: Chain Fold Engine
//!
//! Threads an accumulator through an ordered list of steps. Each step
//! declares the shape it accepts and the kind it produces, so a whole chain
//! is checked before anything runs.
//!
//! - `accumulator.rs`: `Accumulator`, its `AccumulatorKind`, and `Shape`.
//! - `step.rs`: the `Step` trait and closure-backed steps.
//! - `steps.rs`: built-in steps (fold, map, filter, wrap, ...).
//! - `trip.rs`: steps in listed order, checked as they are added.
//! - `trek.rs`: steps listed outermost first, checked as a whole.
//! - `commit.rs`: reifying the result as the kind the caller asks for.
//!
//! ```text
//! seed --step 0--> acc --step 1--> acc ... --commit--> element | value
//!                                                      | sequence(tag)
//!                                                      | generic | instance
//! ```

pub mod accumulator;
pub mod commit;
pub mod step;
pub mod steps;
pub mod trek;
pub mod trip;

pub use accumulator::{Accumulator, AccumulatorKind, Shape};
pub use commit::{Commit, Target};
pub use step::{step, FnStep, Step};
pub use trek::Trek;
pub use trip::Trip;
