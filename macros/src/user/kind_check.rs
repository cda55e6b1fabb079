//! `kind_check!` - boolean kind queries evaluated against a classification.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::common::{bool_expr_to_string, expand_kind_expr, kind_binding, SubjectConstraint};

pub struct KindCheckInput {
    pub checks: Vec<SubjectConstraint>,
}

impl Parse for KindCheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = Vec::new();

        // First check is required
        checks.push(input.parse()?);

        while input.peek(syn::Token![,]) {
            input.parse::<syn::Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(KindCheckInput { checks })
    }
}

/// Each subject is classified once through its inherent `classify()`; the
/// expression is then a plain `&&`/`||`/`!` tree over const fn tests, so the
/// whole expansion stays usable in const context.
fn expand_single(check: &SubjectConstraint) -> syn::Result<TokenStream> {
    let kind = kind_binding();
    let subject = &check.subject;
    let body = expand_kind_expr(&check.expr, &kind)?;

    Ok(quote! {
        {
            let #kind: ::kindred::Classified = (#subject).classify();
            #body
        }
    })
}

pub fn expand_kind_check(input: KindCheckInput) -> TokenStream {
    let mut expanded = Vec::with_capacity(input.checks.len());
    for check in &input.checks {
        match expand_single(check) {
            Ok(tokens) => expanded.push(tokens),
            Err(err) => {
                let message = format!("{} (in `{}`)", err, bool_expr_to_string(&check.expr));
                return syn::Error::new(err.span(), message).to_compile_error();
            }
        }
    }

    if expanded.len() == 1 {
        expanded.remove(0)
    } else {
        // Multiple checks - AND them together
        quote! { (#(#expanded)&&*) }
    }
}
