//! Type-level identifiers: `name!(ident)` to `Name<[ConstChar<..>, ..]>`.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitInt, LitStr};

pub struct NameInput {
    pub name: String,
}

impl Parse for NameInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(LitStr) {
            input.parse::<LitStr>()?.value()
        } else if input.peek(LitInt) {
            // Tuple field index
            input.parse::<LitInt>()?.base10_parse::<usize>()?.to_string()
        } else {
            // Keywords are valid member names (`type`, `match`, ...)
            Ident::parse_any(input)?.unraw().to_string()
        };
        if !input.is_empty() {
            return Err(input.error("expected a single identifier"));
        }
        if name.is_empty() {
            return Err(input.error("names cannot be empty"));
        }
        Ok(NameInput { name })
    }
}

/// `Name<TCons<ConstChar<'a'>, TCons<ConstChar<'b'>, TNil>>>` for `"ab"`.
pub fn name_type(name: &str) -> TokenStream {
    let list = name.chars().rev().fold(
        quote! { ::tola_tmpl::list::TNil },
        |tail, c| {
            let lit = Literal::character(c);
            quote! {
                ::tola_tmpl::list::TCons<::tola_tmpl::value::ConstChar<#lit>, #tail>
            }
        },
    );

    quote! { ::tola_tmpl::value::Name<#list> }
}
