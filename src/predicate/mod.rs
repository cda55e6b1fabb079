//! # Layer 3: Predicate Combinators
//!
//! Pure boolean functions over elements and the algebra that combines them.
//!
//! - `combinator.rs`: the `Predicate` trait, `and`/`or`/`not`, `AllOf`/`AnyOf`/`NoneOf`.
//! - `aggregate.rs`: folding one predicate over a sequence.
//! - `kind.rs`: classifier-backed predicates.

pub mod aggregate;
pub mod combinator;
pub mod kind;

pub use aggregate::{all_satisfy, any_satisfy, none_satisfy, not_all_satisfy};
pub use combinator::{and, not, or, AllOf, And, AnyOf, NoneOf, Not, Or, Predicate};
pub use kind::{IsCategory, IsDepth, IsKind, IsUnclassified};
