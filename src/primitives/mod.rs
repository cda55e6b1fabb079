//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every layer:
//! - `value.rs`: The value category (integers, booleans, characters).
//! - `const_utils.rs`: Helpers that keep classification usable in const context.

pub mod const_utils;
pub mod value;

pub use value::Value;
