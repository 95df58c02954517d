//! Procedural macros for tola-tmpl
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `name!(ident)` | - | Type-level identifier |
//! | `#[derive(Members)]` | struct | Register fields and typedefs |
//! | `#[members]` | inherent impl | Register methods, associated fns and consts |
//! | `peano!(N, bounds = B)` | - | Internal: `U0..UN` and the const bridges |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Members)]
//! #[member(typedef(value_type = u8))]
//! struct Buffer {
//!     pub len: usize,
//!     #[member(skip)]
//!     pub scratch: Vec<u8>,
//!     #[member(include)]
//!     cursor: usize,
//! }
//!
//! #[members]
//! impl Buffer {
//!     pub fn push(&mut self, byte: u8) { ... }
//!     pub fn with_capacity(n: usize) -> Self { ... }
//!     pub const MAX: usize = 4096;
//! }
//!
//! assert!(has_member!(Buffer, len));
//! assert!(!has_member!(Buffer, scratch));
//! assert!(has_static_member_function!(Buffer, with_capacity));
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

/// Generate Peano aliases U0..Un, `ToPeano<k>` impls for `0..=n` and
/// `ToBound<k>` impls for `-b..=b`.
///
/// # Usage
/// ```ignore
/// peano!(64);                  // U0 = Z, U1 = S<U0>, ..., U64 = S<U63>
/// peano!(64, bounds = 1024);   // plus ToBound: <0 -> Z, 0..=64 -> Un, >64 -> Inf
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Spell an identifier as a type.
///
/// Accepts an identifier (keywords and raw identifiers included), a tuple
/// index or a string literal:
///
/// ```ignore
/// type A = name!(value_type);
/// type B = name!(r#type);   // same as name!(type)
/// type C = name!(0);        // first tuple field
/// type D = name!("len");
/// ```
#[proc_macro]
pub fn name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::name::NameInput);
    inner::name::name_type(&input.name).into()
}

/// Register the fields of a struct in the member registry.
///
/// Every `pub` field `f: U` gets `Member<name!(f)>` with
/// `Ptr = DataPtr<Self, U>`. Tuple fields are named `0`, `1`, ...
///
/// # Attributes
/// - `#[member(skip)]` on a field: leave it unregistered.
/// - `#[member(include)]` on a non-`pub` field: register it anyway.
/// - `#[member(typedef(value_type = T, ...))]` on the struct: register
///   nested types (`Typedef<name!(value_type)>` with `Type = T`).
///
/// # Usage
/// ```ignore
/// #[derive(Members)]
/// #[member(typedef(value_type = f32))]
/// struct Point { pub x: f32, pub y: f32 }
/// ```
#[proc_macro_derive(Members, attributes(member))]
pub fn derive_members(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_members(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Register the items of an inherent impl block in the member registry.
///
/// | Item | `Ptr` |
/// |------|-------|
/// | method with a receiver | `MethodPtr<Self, fn(Receiver, Args..) -> R>` |
/// | associated fn | `FnPtr<fn(Args..) -> R>` |
/// | associated const `C: U` | `StaticPtr<U>` |
///
/// Only `pub` items are registered; `#[member(include)]` registers a private
/// one and `#[member(skip)]` hides a public one. A method's own `where`
/// clause carries over to its registration.
///
/// Methods with type or const parameters, `async fn`s and signatures using
/// `impl Trait` have no single function type and are not registered.
///
/// # Usage
/// ```ignore
/// #[members]
/// impl Point {
///     pub fn norm(&self) -> f32 { ... }
///     pub fn origin() -> Self { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn members(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "#[members] takes no arguments")
            .to_compile_error()
            .into();
    }
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_members_impl(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
