//! Peano number generation macro.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt, Token};

pub struct PeanoInput {
    pub max: usize,
    /// Window bounds are bridged over `-bounds..=bounds`.
    pub bounds: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        let mut bounds = max;
        if input.parse::<Option<Token![,]>>()?.is_some() {
            let key: Ident = input.parse()?;
            if key != "bounds" {
                return Err(syn::Error::new(key.span(), "expected `bounds = N`"));
            }
            input.parse::<Token![=]>()?;
            let lit: LitInt = input.parse()?;
            bounds = lit.base10_parse::<usize>()?;
            if bounds < max {
                return Err(syn::Error::new(lit.span(), "`bounds` must be at least the largest natural"));
            }
        }
        Ok(PeanoInput { max, bounds })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let max = input.max;

    // U0 = Z
    let mut types = vec![quote! {
        /// 0
        pub type U0 = Z;
    }];

    // U1..Umax = S<U(n-1)>
    for n in 1..=max {
        let curr = format_ident!("U{}", n);
        let prev = format_ident!("U{}", n - 1);
        let doc = n.to_string();
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    // const N: usize -> UN
    let bridge = (0..=max).map(|n| {
        let alias = format_ident!("U{}", n);
        let lit = Literal::usize_unsuffixed(n);
        quote! {
            impl ::tola_tmpl::primitives::bridge::ToPeano<#lit> for () {
                type Out = #alias;
            }
        }
    });

    // const N: isize -> Z below zero, UN in range, Inf above
    let bounds = (1..=input.bounds).map(|n| {
        let lit = Literal::usize_unsuffixed(n);
        quote! {
            impl ::tola_tmpl::primitives::bridge::ToBound<{ -#lit }> for () {
                type Out = Z;
            }
        }
    });
    let upper = (0..=input.bounds).map(|n| {
        let lit = Literal::usize_unsuffixed(n);
        let out = if n <= max {
            let alias = format_ident!("U{}", n);
            quote! { #alias }
        } else {
            quote! { Inf }
        };
        quote! {
            impl ::tola_tmpl::primitives::bridge::ToBound<#lit> for () {
                type Out = #out;
            }
        }
    });

    quote! {
        #(#types)*
        #(#bridge)*
        #(#bounds)*
        #(#upper)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        let input: PeanoInput = syn::parse2(input).unwrap();
        expand_peano(input).to_string().replace(' ', "")
    }

    #[test]
    fn test_bound_table() {
        let out = expand(quote! { 2, bounds = 4 });
        assert!(out.contains("ToBound<{-4}>for(){typeOut=Z;}"));
        assert!(out.contains("ToBound<2>for(){typeOut=U2;}"));
        assert!(out.contains("ToBound<3>for(){typeOut=Inf;}"));
        assert!(!out.contains("ToBound<5>"));
    }

    #[test]
    fn test_bounds_default_to_max() {
        let out = expand(quote! { 3 });
        assert!(out.contains("pubtypeU3=S<U2>;"));
        assert!(!out.contains("Inf"));
    }

    #[test]
    fn test_bounds_below_max_are_rejected() {
        assert!(syn::parse2::<PeanoInput>(quote! { 8, bounds = 4 }).is_err());
    }
}
