//! Common parsing utilities
//!
//! The `#[member(...)]` helper attribute, shared by `#[derive(Members)]` and
//! `#[members]`.

use syn::{Attribute, Ident, Type, Visibility};

pub const HELPER: &str = "member";

/// One option inside `#[member(...)]`.
pub enum MemberOption {
    /// `skip`
    Skip(Ident),
    /// `include`
    Include(Ident),
    /// `typedef(name = Type, ...)`
    Typedef(Vec<(Ident, Type)>),
}

impl MemberOption {
    pub fn span(&self) -> proc_macro2::Span {
        match self {
            MemberOption::Skip(ident) | MemberOption::Include(ident) => ident.span(),
            MemberOption::Typedef(entries) => entries
                .first()
                .map_or_else(proc_macro2::Span::call_site, |(name, _)| name.span()),
        }
    }
}

/// Parse every `#[member(...)]` attribute in `attrs`.
pub fn parse_member_options(attrs: &[Attribute]) -> syn::Result<Vec<MemberOption>> {
    let mut options = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(HELPER)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                let ident = meta.path.require_ident()?.clone();
                options.push(MemberOption::Skip(ident));
                Ok(())
            } else if meta.path.is_ident("include") {
                let ident = meta.path.require_ident()?.clone();
                options.push(MemberOption::Include(ident));
                Ok(())
            } else if meta.path.is_ident("typedef") {
                let mut entries = Vec::new();
                meta.parse_nested_meta(|entry| {
                    let name = entry.path.require_ident()?.clone();
                    let value = entry.value()?;
                    let ty: Type = value.parse()?;
                    entries.push((name, ty));
                    Ok(())
                })?;
                options.push(MemberOption::Typedef(entries));
                Ok(())
            } else {
                Err(meta.error("expected `skip`, `include` or `typedef(name = Type, ...)`"))
            }
        })?;
    }
    Ok(options)
}

/// Whether a member with `vis` and `attrs` is registered.
///
/// `pub` members are registered unless marked `#[member(skip)]`; other
/// members only with `#[member(include)]`.
pub fn is_registered(vis: &Visibility, attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = None;
    let mut include = None;
    for option in parse_member_options(attrs)? {
        match option {
            MemberOption::Skip(ident) => skip = Some(ident),
            MemberOption::Include(ident) => include = Some(ident),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "typedefs are declared on the struct, not on a member",
                ));
            }
        }
    }
    match (skip, include) {
        (Some(_), Some(include)) => Err(syn::Error::new(
            include.span(),
            "a member cannot be both skipped and included",
        )),
        (Some(_), None) => Ok(false),
        (None, Some(_)) => Ok(true),
        (None, None) => Ok(matches!(vis, Visibility::Public(_))),
    }
}

/// Remove `#[member(...)]` attributes, which are inert only under a derive.
pub fn strip_member_attrs(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(HELPER));
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse::Parser;
    use syn::parse_quote;

    #[test]
    fn test_skip_include_and_typedef() {
        let item: syn::ItemStruct = parse_quote! {
            #[member(typedef(value_type = u8, key_type = String))]
            struct S {
                #[member(skip)]
                pub a: u8,
                pub b: u8,
                c: u8,
                #[member(include)]
                d: u8,
                pub(crate) e: u8,
            }
        };
        let options = parse_member_options(&item.attrs).unwrap();
        assert!(matches!(&options[..], [MemberOption::Typedef(entries)] if entries.len() == 2));

        let registered: Vec<_> = item
            .fields
            .iter()
            .map(|field| is_registered(&field.vis, &field.attrs).unwrap())
            .collect();
        assert_eq!(registered, [false, true, false, true, false]);
    }

    #[test]
    fn test_conflicting_options_are_rejected() {
        let field: syn::Field = syn::Field::parse_named
            .parse2(quote::quote! { #[member(skip, include)] pub a: u8 })
            .unwrap();
        assert!(is_registered(&field.vis, &field.attrs).is_err());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let item: syn::ItemStruct = parse_quote! {
            #[member(rename = "x")]
            struct S;
        };
        assert!(parse_member_options(&item.attrs).is_err());
    }
}
