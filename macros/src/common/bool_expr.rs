// Boolean expression parsing and expansion for kind checks

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Atom(Ident),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else if input.peek(Token![&&]) || input.peek(Token![||]) {
        Err(input.error("use `&` and `|` between kind atoms"))
    } else {
        let atom: Ident = input.parse()?;
        Ok(BoolExpr::Atom(atom))
    }
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Convert BoolExpr to human-readable string
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Atom(atom) => atom.to_string(),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

/// Kind tags accepted as atoms, shallow to deep.
const KIND_TAGS: &[&str] = &[
    "Type1", "Value1", "Type2", "Value2", "Type3", "Value3", "Type4", "Value4",
    "Type5", "Value5", "Type6", "Value6", "Type7", "Value7",
];

/// Deepest kind the classifier knows about.
const MAX_DEPTH: u8 = 7;

/// Expand one atom into a const-evaluable test on `kind` (a `Classified`).
fn expand_atom(atom: &Ident, kind: &Ident) -> syn::Result<TokenStream> {
    let name = atom.to_string();

    if KIND_TAGS.contains(&name.as_str()) {
        return Ok(quote! { #kind.is(::kindred::KindTag::#atom) });
    }

    match name.as_str() {
        "Type" | "Value" => return Ok(quote! { #kind.is_category(::kindred::Category::#atom) }),
        "Unclassified" => return Ok(quote! { #kind.is_unclassified() }),
        _ => {}
    }

    let depth = name.strip_prefix("Depth").and_then(|d| d.parse::<u8>().ok());
    if let Some(depth) = depth.filter(|d| (1..=MAX_DEPTH).contains(d)) {
        return Ok(quote! { #kind.has_depth(#depth) });
    }

    Err(syn::Error::new(
        atom.span(),
        format!(
            "unknown kind atom `{}`\n\
             \n\
             Expected one of Type1..Type7, Value1..Value7, Type, Value,\n\
             Depth1..Depth7 or Unclassified.",
            name
        ),
    ))
}

/// Expand a whole expression against the classification bound to `kind`.
pub fn expand_kind_expr(expr: &BoolExpr, kind: &Ident) -> syn::Result<TokenStream> {
    Ok(match expr {
        BoolExpr::Atom(atom) => expand_atom(atom, kind)?,
        BoolExpr::And(lhs, rhs) => {
            let l = expand_kind_expr(lhs, kind)?;
            let r = expand_kind_expr(rhs, kind)?;
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = expand_kind_expr(lhs, kind)?;
            let r = expand_kind_expr(rhs, kind)?;
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = expand_kind_expr(operand, kind)?;
            quote! { (!#o) }
        }
    })
}

/// Identifier the expansion binds the subject's classification to.
pub fn kind_binding() -> Ident {
    Ident::new("__kind", Span::mixed_site())
}
