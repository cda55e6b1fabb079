//! # Layer 1: Kind Classifier
//!
//! Operators, their parameter lists, and the fourteen kind tags.
//!
//! - `param.rs`: `Param` and `Signature` (const-constructible shapes).
//! - `tag.rs`: `KindTag`, `Category`, the registration table.
//! - `operator.rs`: `Operator` and instantiation.
//! - `classify.rs`: `classify`, `Classified`, the `Classify` trait.

pub mod classify;
pub mod operator;
pub mod param;
pub mod tag;

pub use classify::{classify, classify_signature, Classified, Classify};
pub use operator::Operator;
pub use param::{Param, Signature};
pub use tag::{
    Category, KindTag, MAX_DEPTH,
    is_type1, is_type2, is_type3, is_type4, is_type5, is_type6, is_type7,
    is_value1, is_value2, is_value3, is_value4, is_value5, is_value6, is_value7,
};
