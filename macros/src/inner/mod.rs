//! Building-block macros used by the library and its callers.

pub mod signature;
