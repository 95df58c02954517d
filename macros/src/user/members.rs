//! Member registry macros: `#[derive(Members)]` and `#[members]`.
//!
//! Both emit one `Member<name!(..)>` impl per registered item; the derive
//! also emits `Typedef<name!(..)>` impls. Only `pub` items are registered
//! unless `#[member(include)]` says otherwise.
//!
//! ```ignore
//! #[derive(Members)]
//! struct Point { pub x: f32 }
//!
//! // expands to
//! impl ::tola_tmpl::probe::Member<name!(x)> for Point {
//!     type Ptr = ::tola_tmpl::probe::DataPtr<Self, f32>;
//! }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, ImplItem, ItemImpl, WherePredicate};

use crate::common::{
    fn_pointer, is_registered, parse_member_options, strip_member_attrs, MemberOption,
};
use crate::inner::name::name_type;

// =============================================================================
// #[derive(Members)]
// =============================================================================

pub fn expand_derive_members(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "Members can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "Members can only be derived for structs",
            ));
        }
    };

    let mut impls = Vec::new();

    for option in parse_member_options(&input.attrs)? {
        match option {
            MemberOption::Typedef(entries) => {
                for (name, ty) in entries {
                    let name = name_type(&name.unraw().to_string());
                    impls.push(quote! {
                        impl #impl_generics ::tola_tmpl::probe::Typedef<#name> for #ident #ty_generics #where_clause {
                            type Type = #ty;
                        }
                    });
                }
            }
            MemberOption::Skip(ident) | MemberOption::Include(ident) => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("`{ident}` applies to fields; put it on the field itself"),
                ));
            }
        }
    }

    for (index, field) in fields.iter().enumerate() {
        if !is_registered(&field.vis, &field.attrs)? {
            continue;
        }
        // Tuple fields are named by position
        let member = field
            .ident
            .as_ref()
            .map_or_else(|| index.to_string(), |ident| ident.unraw().to_string());
        let name = name_type(&member);
        let ty = &field.ty;
        impls.push(quote! {
            impl #impl_generics ::tola_tmpl::probe::Member<#name> for #ident #ty_generics #where_clause {
                type Ptr = ::tola_tmpl::probe::DataPtr<Self, #ty>;
            }
        });
    }

    Ok(quote! { #(#impls)* })
}

// =============================================================================
// #[members]
// =============================================================================

pub fn expand_members_impl(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[members] applies to inherent impls; trait items are reached through the trait",
        ));
    }

    let self_ty = item.self_ty.to_token_stream();

    let mut impls = Vec::new();
    for impl_item in &item.items {
        let (vis, attrs, member, ptr, predicates) = match impl_item {
            ImplItem::Fn(method) => {
                // No single function type: not addressable
                let Some(ptr) = fn_pointer(&method.sig) else {
                    continue;
                };
                let ty = ptr.ty;
                let pointer = if ptr.has_receiver {
                    quote! { ::tola_tmpl::probe::MethodPtr<Self, #ty> }
                } else {
                    quote! { ::tola_tmpl::probe::FnPtr<#ty> }
                };
                (&method.vis, &method.attrs, &method.sig.ident, pointer, ptr.predicates)
            }
            ImplItem::Const(constant) => {
                if !constant.generics.params.is_empty() {
                    continue;
                }
                let ty = &constant.ty;
                let pointer = quote! { ::tola_tmpl::probe::StaticPtr<#ty> };
                (&constant.vis, &constant.attrs, &constant.ident, pointer, Vec::new())
            }
            _ => continue,
        };

        if !is_registered(vis, attrs)? {
            continue;
        }
        let name = name_type(&member.unraw().to_string());
        let generics = with_predicates(&item.generics, predicates);
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        impls.push(quote! {
            impl #impl_generics ::tola_tmpl::probe::Member<#name> for #self_ty #where_clause {
                type Ptr = #ptr;
            }
        });
    }

    // The helper attribute is only inert under the derive
    for impl_item in &mut item.items {
        match impl_item {
            ImplItem::Fn(method) => strip_member_attrs(&mut method.attrs),
            ImplItem::Const(constant) => strip_member_attrs(&mut constant.attrs),
            _ => {}
        }
    }

    Ok(quote! {
        #item
        #(#impls)*
    })
}

/// The impl's generics with a method's `where` predicates appended.
fn with_predicates(generics: &syn::Generics, predicates: Vec<WherePredicate>) -> syn::Generics {
    let mut generics = generics.clone();
    if !predicates.is_empty() {
        generics.make_where_clause().predicates.extend(predicates);
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn compact(tokens: TokenStream2) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn test_derive_registers_fields() {
        let out = compact(
            expand_derive_members(parse_quote! {
                struct Pair<T> { pub first: T, #[member(skip)] pub second: T }
            })
            .unwrap(),
        );
        assert!(out.contains("DataPtr<Self,T>"));
        assert_eq!(out.matches("::tola_tmpl::probe::Member<").count(), 1);
        assert!(out.contains("ConstChar<'f'>"));
        assert!(!out.contains("ConstChar<'c'>"));
    }

    #[test]
    fn test_derive_registers_public_fields_only() {
        let out = compact(
            expand_derive_members(parse_quote! {
                struct Account { pub id: u32, secret: u64, #[member(include)] audit: bool }
            })
            .unwrap(),
        );
        assert_eq!(out.matches("::tola_tmpl::probe::Member<").count(), 2);
        assert!(out.contains("DataPtr<Self,u32>"));
        assert!(out.contains("DataPtr<Self,bool>"));
        assert!(!out.contains("DataPtr<Self,u64>"));
    }

    #[test]
    fn test_derive_typedefs_and_tuple_fields() {
        let out = compact(
            expand_derive_members(parse_quote! {
                #[member(typedef(value_type = u8))]
                struct Wrapper(pub u16);
            })
            .unwrap(),
        );
        assert!(out.contains("Typedef<"));
        assert!(out.contains("typeType=u8;"));
        assert!(out.contains("ConstChar<'0'>"));
    }

    #[test]
    fn test_derive_rejects_enums() {
        let err = expand_derive_members(parse_quote! { enum E { A } }).unwrap_err();
        assert!(err.to_string().contains("structs"));
    }

    #[test]
    fn test_members_kinds() {
        let out = compact(
            expand_members_impl(parse_quote! {
                impl Counter {
                    pub fn bump(&mut self) {}
                    pub fn new() -> Self { Counter }
                    pub const MAX: u32 = 9;
                    pub fn map<T>(&self, t: T) -> T { t }
                    #[member(skip)]
                    pub fn hidden(&self) {}
                    fn private(&self) {}
                    #[member(include)]
                    fn audited(&self) {}
                }
            })
            .unwrap(),
        );
        assert!(out.contains("MethodPtr<Self,fn(&mutSelf)>"));
        assert!(out.contains("FnPtr<fn()->Self>"));
        assert!(out.contains("StaticPtr<u32>"));
        assert_eq!(out.matches("::tola_tmpl::probe::Member<").count(), 4);
        assert!(!out.contains("#[member"));
    }

    #[test]
    fn test_members_carry_method_where_clause() {
        let out = compact(
            expand_members_impl(parse_quote! {
                impl<T> Wrapper<T> {
                    pub fn cloned(&self) -> T where T: Clone { self.0.clone() }
                }
            })
            .unwrap(),
        );
        assert!(out.contains("forWrapper<T>whereT:Clone{typePtr="));
    }

    #[test]
    fn test_members_rejects_trait_impls() {
        let err = expand_members_impl(parse_quote! {
            impl Default for Counter { fn default() -> Self { Counter } }
        })
        .unwrap_err();
        assert!(err.to_string().contains("inherent"));
    }
}
