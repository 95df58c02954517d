//! Function signatures as function pointer types.
//!
//! `fn get(&self, key: &str) -> &V` becomes
//! `for<'__self> fn(&'__self Self, &str) -> &'__self V`: the receiver's
//! lifetime is named so that the output keeps the lifetime elision would have
//! given it.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::visit_mut::{self, VisitMut};
use syn::{FnArg, GenericParam, Lifetime, ReturnType, Signature, Type, WherePredicate};

/// A signature lowered to a function pointer type.
pub struct FnPointer {
    /// The signature takes `self` in some form.
    pub has_receiver: bool,
    pub ty: TokenStream,
    /// `where` predicates the method exists under.
    pub predicates: Vec<WherePredicate>,
}

/// Lower `sig`, or `None` when it has no single function type (type or const
/// parameters, `async`, `impl Trait`, ambiguous output lifetimes).
pub fn fn_pointer(sig: &Signature) -> Option<FnPointer> {
    if sig.asyncness.is_some() || sig.variadic.is_some() {
        return None;
    }

    // Predicates on `Self` or the impl's parameters carry over to the
    // registration; anything tied to method parameters has no fn type.
    let mut predicates = Vec::new();
    if let Some(where_clause) = &sig.generics.where_clause {
        if !sig.generics.params.is_empty() {
            return None;
        }
        for predicate in &where_clause.predicates {
            match predicate {
                WherePredicate::Type(_) => predicates.push(predicate.clone()),
                _ => return None,
            }
        }
    }

    let mut bound = Vec::new();
    for param in &sig.generics.params {
        match param {
            GenericParam::Lifetime(def) if def.bounds.is_empty() => bound.push(def.lifetime.clone()),
            _ => return None,
        }
    }

    let mut receiver = None;
    let mut inputs = Vec::new();
    for arg in &sig.inputs {
        match arg {
            FnArg::Receiver(recv) => {
                receiver = Some(inputs.len());
                inputs.push((*recv.ty).clone());
            }
            FnArg::Typed(typed) => inputs.push((*typed.ty).clone()),
        }
    }

    let mut output = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => Some((**ty).clone()),
    };

    let mut inputs_scan = Scan::default();
    for ty in &mut inputs {
        inputs_scan.visit_type_mut(ty);
    }
    let mut output_scan = Scan::default();
    if let Some(ty) = &mut output {
        output_scan.visit_type_mut(ty);
    }
    if inputs_scan.impl_trait || output_scan.impl_trait {
        return None;
    }
    // A bound lifetime must be constrained by the inputs
    if bound.iter().any(|lifetime| !inputs_scan.names.contains(&lifetime.ident)) {
        return None;
    }

    if output_scan.elided > 0 {
        let by_ref = match receiver {
            Some(i) => match &mut inputs[i] {
                Type::Reference(reference) => Some(reference),
                _ => None,
            },
            None => None,
        };
        match by_ref {
            // Elided outputs borrow from `self`
            Some(reference) => {
                let lifetime = match &reference.lifetime {
                    Some(lifetime) => lifetime.clone(),
                    None => {
                        let lifetime = Lifetime::new("'__self", Span::call_site());
                        reference.lifetime = Some(lifetime.clone());
                        bound.push(lifetime.clone());
                        lifetime
                    }
                };
                if let Some(ty) = &mut output {
                    Elide(lifetime).visit_type_mut(ty);
                }
            }
            // Plain fn pointer elision: needs exactly one input lifetime
            None if inputs_scan.elided + inputs_scan.named == 1 => {}
            None => return None,
        }
    }

    let unsafety = &sig.unsafety;
    let abi = &sig.abi;
    let binder = if bound.is_empty() {
        quote! {}
    } else {
        quote! { for<#(#bound),*> }
    };
    let ret = output.map(|ty| quote! { -> #ty });

    Some(FnPointer {
        has_receiver: receiver.is_some(),
        ty: quote! { #binder #unsafety #abi fn(#(#inputs),*) #ret },
        predicates,
    })
}

// =============================================================================
// Visitors
// =============================================================================

/// Counts lifetime positions and spots `impl Trait`.
#[derive(Default)]
struct Scan {
    elided: usize,
    named: usize,
    names: Vec<syn::Ident>,
    impl_trait: bool,
}

impl VisitMut for Scan {
    fn visit_type_reference_mut(&mut self, reference: &mut syn::TypeReference) {
        if reference.lifetime.is_none() {
            self.elided += 1;
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            self.elided += 1;
        } else if lifetime.ident != "static" {
            self.named += 1;
            self.names.push(lifetime.ident.clone());
        }
    }

    fn visit_type_impl_trait_mut(&mut self, _: &mut syn::TypeImplTrait) {
        self.impl_trait = true;
    }

    // Nested fn pointers have their own elision scope
    fn visit_type_bare_fn_mut(&mut self, _: &mut syn::TypeBareFn) {}
}

/// Replaces elided lifetimes with a fixed one.
struct Elide(Lifetime);

impl VisitMut for Elide {
    fn visit_type_reference_mut(&mut self, reference: &mut syn::TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(self.0.clone());
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = self.0.clone();
        }
    }

    fn visit_type_bare_fn_mut(&mut self, _: &mut syn::TypeBareFn) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn lower(sig: Signature) -> Option<String> {
        fn_pointer(&sig).map(|ptr| ptr.ty.to_string().replace(' ', ""))
    }

    #[test]
    fn test_method_output_borrows_from_self() {
        let ty = lower(parse_quote!(fn get(&self, key: &str) -> &u8)).unwrap();
        assert_eq!(ty, "for<'__self>fn(&'__selfSelf,&str)->&'__selfu8");
    }

    #[test]
    fn test_named_receiver_lifetime_is_reused() {
        let ty = lower(parse_quote!(fn get<'a>(&'a mut self) -> Option<&u8>)).unwrap();
        assert_eq!(ty, "for<'a>fn(&'amutSelf)->Option<&'au8>");
    }

    #[test]
    fn test_associated_fn() {
        let ptr = fn_pointer(&parse_quote!(fn new(len: usize) -> Self)).unwrap();
        assert!(!ptr.has_receiver);
        assert_eq!(ptr.ty.to_string().replace(' ', ""), "fn(usize)->Self");
    }

    #[test]
    fn test_unrepresentable_signatures() {
        assert!(lower(parse_quote!(fn map<T>(&self, t: T))).is_none());
        assert!(lower(parse_quote!(async fn run(&self))).is_none());
        assert!(lower(parse_quote!(fn iter(&self) -> impl Iterator<Item = u8>)).is_none());
        assert!(lower(parse_quote!(fn pick(a: &str, b: &str) -> &str)).is_none());
        assert!(lower(parse_quote!(fn leak<'a>() -> &'a str)).is_none());
        assert!(lower(parse_quote!(fn bounded<'a>(&'a self) where Self: 'a)).is_none());
    }

    #[test]
    fn test_where_clause_on_self_is_kept() {
        let ptr = fn_pointer(&parse_quote!(fn size(&self) -> usize where Self: Sized)).unwrap();
        assert_eq!(ptr.ty.to_string().replace(' ', ""), "fn(&Self)->usize");
        assert_eq!(ptr.predicates.len(), 1);

        let ptr = fn_pointer(&parse_quote!(fn plain(&self))).unwrap();
        assert!(ptr.predicates.is_empty());
    }
}
