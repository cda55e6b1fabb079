//! Procedural macros for the kindred kind system
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `signature!` | Write an operator's parameter list as a const `Signature` |
//! | `kind_check!` | Boolean query over the classification of a signature or operator |
//!
//! ## Example
//!
//! ```ignore
//! use kindred::{kind_check, signature, Operator};
//!
//! const ROAD: Operator = Operator::new("Road", signature!(op(type..)..));
//!
//! const _: () = assert!(kind_check!(ROAD: Type2 & !Value));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Build a const `Signature` from the compact parameter notation.
///
/// | Notation | Parameter |
/// |----------|-----------|
/// | `type` / `type..` | one type / a type pack |
/// | `value` / `value..` | one value / a value pack |
/// | `op(...)` / `op(...)..` | one operator / an operator pack with the inner signature |
///
/// ```ignore
/// const MOLD: Signature = signature!(type..);           // Type1
/// const ROAD: Signature = signature!(op(type..)..);     // Type2
/// const RAIL: Signature = signature!(op(value..)..);    // Value2
/// const FIXED: Signature = signature!(type, value);     // Unclassified
/// ```
#[proc_macro]
pub fn signature(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::signature::SignatureDecl);
    inner::signature::expand_signature(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Check what kind a subject classifies as, with boolean expression support.
///
/// Any subject with an inherent `classify()` works: `Signature`, `Operator`,
/// `Classified`, `Element`. For the first three the expansion is a const
/// expression.
///
/// # Syntax: `kind_check!(subject: Expr, ...)`
///
/// Atoms are `Type1`..`Type7`, `Value1`..`Value7`, `Type`, `Value`,
/// `Depth1`..`Depth7` and `Unclassified`. Multiple checks are ANDed.
///
/// ```ignore
/// assert!(kind_check!(MOLD: Type1));
/// assert!(kind_check!(ROAD: Type2 | Value2));
/// assert!(kind_check!(ROAD: Depth2 & !Value));
/// assert!(kind_check!(FIXED: Unclassified, MOLD: Type));
/// ```
#[proc_macro]
pub fn kind_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::KindCheckInput);
    user::expand_kind_check(input).into()
}
