//! # Layer 5: Kind-Indexed Operations
//!
//! One entry point per operation, one native path shared by all fourteen
//! kinds, one generic fallback.
//!
//! - `dispatch.rs`: routing inputs to the native or generic path.
//! - `zip.rs`: row-wise tuples, truncated to the shortest input.
//! - `filter.rs`: `filter` and `sieve`.
//! - `paste.rs`: concatenation and `repack`.
//!
//! Zip treats disagreeing inputs as a usage error; paste falls back to the
//! generic representation.

pub mod dispatch;
pub mod filter;
pub mod paste;
pub mod zip;

pub use dispatch::{dispatch, route, KindIndexed, Route};
pub use filter::{filter, sieve};
pub use paste::{paste, repack};
pub use zip::{zip, Zip};
