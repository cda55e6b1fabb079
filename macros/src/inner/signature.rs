//! Parameter-list notation for `signature!`.
//!
//! ```text
//! sig   := param (',' param)*
//! param := 'type' ['..'] | 'value' ['..'] | 'op' '(' sig ')' ['..']
//! ```
//!
//! A trailing `..` turns a parameter into a variadic pack.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

use crate::common::{parse_comma_separated, peek_keyword};

#[derive(Clone, Debug)]
pub enum ParamDecl {
    Type { pack: bool },
    Value { pack: bool },
    Operator { inner: SignatureDecl, pack: bool },
}

#[derive(Clone, Debug)]
pub struct SignatureDecl {
    pub params: Vec<ParamDecl>,
}

impl Parse for SignatureDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let params = parse_comma_separated(input)?;
        Ok(SignatureDecl { params })
    }
}

impl Parse for ParamDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        enum Head {
            Type,
            Value,
            Operator(SignatureDecl),
        }

        let head = if input.peek(Token![type]) {
            input.parse::<Token![type]>()?;
            Head::Type
        } else if peek_keyword(input, "value") {
            input.parse::<Ident>()?;
            Head::Value
        } else if peek_keyword(input, "op") {
            input.parse::<Ident>()?;
            let content;
            syn::parenthesized!(content in input);
            Head::Operator(content.parse()?)
        } else {
            return Err(input.error("expected `type`, `value` or `op(...)`"));
        };

        if input.peek(Token![...]) {
            return Err(input.error("packs are written with `..`, not `...`"));
        }
        let pack = if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            true
        } else {
            false
        };

        Ok(match head {
            Head::Type => ParamDecl::Type { pack },
            Head::Value => ParamDecl::Value { pack },
            Head::Operator(inner) => ParamDecl::Operator { inner, pack },
        })
    }
}

fn expand_param(param: &ParamDecl) -> TokenStream {
    match param {
        ParamDecl::Type { pack: false } => quote! { ::kindred::Param::Type },
        ParamDecl::Type { pack: true } => quote! { ::kindred::Param::Types },
        ParamDecl::Value { pack: false } => quote! { ::kindred::Param::Value },
        ParamDecl::Value { pack: true } => quote! { ::kindred::Param::Values },
        ParamDecl::Operator { inner, pack } => {
            let sig = expand_signature_literal(inner);
            if *pack {
                quote! { ::kindred::Param::Operators(#sig) }
            } else {
                quote! { ::kindred::Param::Operator(#sig) }
            }
        }
    }
}

fn expand_signature_literal(decl: &SignatureDecl) -> TokenStream {
    let params = decl.params.iter().map(expand_param);
    quote! { ::kindred::Signature(&[#(#params),*]) }
}

/// Expand to a `Signature` evaluated in a const item, so the nested
/// parameter slices are `'static` wherever the macro is used.
pub fn expand_signature(decl: SignatureDecl) -> TokenStream {
    let sig = expand_signature_literal(&decl);
    quote! {
        {
            const __SIGNATURE: ::kindred::Signature = #sig;
            __SIGNATURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_packs() {
        let decl: SignatureDecl = syn::parse_str("op(op(type..)..)..").unwrap();
        assert_eq!(decl.params.len(), 1);
        let ParamDecl::Operator { inner, pack: true } = &decl.params[0] else {
            panic!("expected an operator pack");
        };
        assert!(matches!(inner.params[0], ParamDecl::Operator { pack: true, .. }));
    }

    #[test]
    fn parses_mixed_lists() {
        let decl: SignatureDecl = syn::parse_str("type, value.., op(value)").unwrap();
        assert_eq!(decl.params.len(), 3);
        assert!(matches!(decl.params[0], ParamDecl::Type { pack: false }));
        assert!(matches!(decl.params[1], ParamDecl::Value { pack: true }));
        assert!(matches!(decl.params[2], ParamDecl::Operator { pack: false, .. }));
    }

    #[test]
    fn empty_input_is_an_empty_list() {
        let decl: SignatureDecl = syn::parse_str("").unwrap();
        assert!(decl.params.is_empty());
    }

    #[test]
    fn rejects_three_dots() {
        assert!(syn::parse_str::<SignatureDecl>("type...").is_err());
    }

    #[test]
    fn rejects_unknown_heads() {
        assert!(syn::parse_str::<SignatureDecl>("class..").is_err());
    }
}
