//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Ident, Token,
};

use super::BoolExpr;

// =============================================================================
// Subject Constraint Parsing: `expr: BoolExpr`
// =============================================================================

/// A single kind constraint: `subject: BoolExpr`
///
/// Used in:
/// - `kind_check!(MY_OP: Type2 | Value2)`
/// - `kind_check!(SIG: Type, other.signature(): !Unclassified)`
#[derive(Clone)]
pub struct SubjectConstraint {
    pub subject: Expr,
    pub expr: BoolExpr,
}

impl Parse for SubjectConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let subject: Expr = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(SubjectConstraint { subject, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}
