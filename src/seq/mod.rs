//! # Layer 2: Sequences
//!
//! The data the algorithms work on.
//!
//! - `element.rs`: `Element`, `Ty`, `Instance`, `ElementKind`.
//! - `sequence.rs`: `Sequence` and its `Repr` (native container or generic).

pub mod element;
pub mod sequence;

pub use element::{Element, ElementKind, Instance, Ty};
pub use sequence::{Repr, Sequence};
