//! Member registry and pointer decomposition.
//!
//! Rust has no member lookup by name on arbitrary types, so members are
//! registered under a type-level [`Name`](crate::value::Name):
//!
//! | Registered item | Impl | `Ptr` |
//! |-----------------|------|-------|
//! | field `a: U` | `Member<name!(a)>` | `DataPtr<Self, U>` |
//! | `fn foo(&self, A) -> R` | `Member<name!(foo)>` | `MethodPtr<Self, fn(&Self, A) -> R>` |
//! | `fn make(A) -> R` | `Member<name!(make)>` | `FnPtr<fn(A) -> R>` |
//! | `const MAX: U` | `Member<name!(MAX)>` | `StaticPtr<U>` |
//! | typedef `value_type = T` | `Typedef<name!(value_type)>` | (`Type = T`) |
//!
//! The impls are generated by `#[derive(Members)]` and `#[members]`, for
//! `pub` members and those marked `#[member(include)]`.
//!
//! ## Decomposition
//!
//! ```text
//!                  MemberPointee      RemovePointer
//! DataPtr<C, U>    U                  DataPtr<C, U>
//! MethodPtr<C, F>  Func<F>            MethodPtr<C, F>
//! FnPtr<F>         -                  Func<F>
//! StaticPtr<U>     -                  U
//! ```
//!
//! A member pointer only reaches a function type through `MemberPointee`, an
//! ordinary pointer only through `RemovePointer`. That asymmetry is what
//! separates instance methods from associated functions.

use core::fmt;
use core::marker::PhantomData;

// =============================================================================
// Registry
// =============================================================================

/// `Self` has a member named `N`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no registered member `{N}`",
    note = "`pub` fields are registered by `#[derive(Members)]`, `pub` methods by `#[members]` on an inherent impl."
)]
pub trait Member<N> {
    /// How the member is reached.
    type Ptr: Signature;
}

/// `Self` has a nested type named `N`.
pub trait Typedef<N> {
    type Type: ?Sized;
}

// =============================================================================
// Pointer Kinds
// =============================================================================

macro_rules! marker {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+>) => {
        $(#[$meta])*
        pub struct $name<$($param: ?Sized),+>($(PhantomData<$param>),+);

        impl<$($param: ?Sized),+> fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

marker! {
    /// Pointer to a data member `U` of `C`.
    DataPtr<C, U>
}

marker! {
    /// Pointer to an instance method of `C` with signature `F` (receiver first).
    MethodPtr<C, F>
}

marker! {
    /// Ordinary function pointer of signature `F`.
    FnPtr<F>
}

marker! {
    /// Pointer to an associated constant of type `U`.
    StaticPtr<U>
}

marker! {
    /// The function type `F`, as opposed to a value of type `F`.
    Func<F>
}

/// Which kind of member a pointer refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
    AssociatedFn,
    AssociatedConst,
}

/// Implemented by every pointer kind a registry entry can hold.
pub trait Signature {
    const KIND: MemberKind;
}

impl<C: ?Sized, U: ?Sized> Signature for DataPtr<C, U> {
    const KIND: MemberKind = MemberKind::Field;
}

impl<C: ?Sized, F: ?Sized> Signature for MethodPtr<C, F> {
    const KIND: MemberKind = MemberKind::Method;
}

impl<F: ?Sized> Signature for FnPtr<F> {
    const KIND: MemberKind = MemberKind::AssociatedFn;
}

impl<U: ?Sized> Signature for StaticPtr<U> {
    const KIND: MemberKind = MemberKind::AssociatedConst;
}

// =============================================================================
// Decomposition
// =============================================================================

/// A pointer-to-member: the class it belongs to and the type it points at.
pub trait MemberPointer {
    type Class: ?Sized;
    type Pointee: ?Sized;
}

impl<C: ?Sized, U: ?Sized> MemberPointer for DataPtr<C, U> {
    type Class = C;
    type Pointee = U;
}

impl<C: ?Sized, F: ?Sized> MemberPointer for MethodPtr<C, F> {
    type Class = C;
    type Pointee = Func<F>;
}

/// The type a member pointer points at.
pub type MemberPointee<P> = <P as MemberPointer>::Pointee;

/// Ordinary pointer decomposition. Member pointers are left unchanged.
pub trait RemovePointer {
    type Out: ?Sized;
}

impl<F: ?Sized> RemovePointer for FnPtr<F> {
    type Out = Func<F>;
}

impl<U: ?Sized> RemovePointer for StaticPtr<U> {
    type Out = U;
}

impl<C: ?Sized, U: ?Sized> RemovePointer for DataPtr<C, U> {
    type Out = Self;
}

impl<C: ?Sized, F: ?Sized> RemovePointer for MethodPtr<C, F> {
    type Out = Self;
}

impl<T: ?Sized> RemovePointer for *const T {
    type Out = T;
}

impl<T: ?Sized> RemovePointer for *mut T {
    type Out = T;
}

/// Function types.
pub trait IsFunction {}

impl<F: ?Sized> IsFunction for Func<F> {}
