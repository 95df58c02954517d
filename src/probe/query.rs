//! Member queries: ready-made probes over the member registry and the
//! `has_*!` macros wiring them into [`is_valid!`](crate::is_valid).

use core::marker::PhantomData;

use super::Probe;
use super::member::{IsFunction, Member, MemberPointee, MemberPointer, RemovePointer, Typedef};

macro_rules! name_probe {
    ($(#[$meta:meta])* $probe:ident) => {
        $(#[$meta])*
        pub struct $probe<N>(PhantomData<N>);

        impl<N> $probe<N> {
            pub const NEW: Self = $probe(PhantomData);
        }

        impl<N> Clone for $probe<N> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<N> Copy for $probe<N> {}
    };
}

name_probe! {
    /// Accepts types with a member named `N`, of any kind.
    MemberProbe
}

name_probe! {
    /// Accepts types with a nested type named `N`.
    TypedefProbe
}

name_probe! {
    /// Accepts types whose member `N` is an instance method.
    MemberFnProbe
}

name_probe! {
    /// Accepts types whose member `N` is an associated function.
    StaticFnProbe
}

impl<N, T: ?Sized + Member<N>> Probe<T> for MemberProbe<N> {}

impl<N, T: ?Sized + Typedef<N>> Probe<T> for TypedefProbe<N> {}

impl<N, T> Probe<T> for MemberFnProbe<N>
where
    T: ?Sized + Member<N>,
    T::Ptr: MemberPointer,
    MemberPointee<T::Ptr>: IsFunction,
{
}

impl<N, T> Probe<T> for StaticFnProbe<N>
where
    T: ?Sized + Member<N>,
    T::Ptr: RemovePointer,
    <T::Ptr as RemovePointer>::Out: IsFunction,
{
}

/// Whether `T` has a member (field, method, associated fn or const) named
/// `member`.
///
/// ```
/// use tola_tmpl::{has_member, Members};
///
/// #[derive(Members)]
/// struct Pixel { pub a: u8, b: u8 }
///
/// assert!(has_member!(Pixel, a));
/// // Private members are not registered
/// assert!(!has_member!(Pixel, b));
/// assert!(!has_member!(Pixel, c));
/// # let _ = Pixel { a: 0, b: 0 }.b;
/// ```
#[macro_export]
macro_rules! has_member {
    ($T:ty, $member:tt $(,)?) => {
        $crate::is_valid!(
            $crate::probe::MemberProbe<$crate::name!($member)>,
            $crate::type_list![$T]
        )
    };
}

/// Whether `T` has a nested `value_type`.
///
/// The typedef name is accepted but not consulted: the check is always for
/// `value_type`. Use [`TypedefProbe`] to probe for another name.
///
/// ```
/// use tola_tmpl::{has_typedef, Members};
///
/// #[derive(Members)]
/// #[member(typedef(value_type = u32))]
/// struct Bag;
///
/// assert!(has_typedef!(Bag, value_type));
/// assert!(has_typedef!(Bag, key_type));
/// ```
#[macro_export]
macro_rules! has_typedef {
    ($T:ty, $typedef:tt $(,)?) => {
        $crate::is_valid!(
            $crate::probe::TypedefProbe<$crate::name!(value_type)>,
            $crate::type_list![$T]
        )
    };
}

/// Whether `T` has an instance method named `member`.
///
/// A data member of the same name does not count.
#[macro_export]
macro_rules! has_nonstatic_member_function {
    ($T:ty, $member:tt $(,)?) => {
        $crate::is_valid!(
            $crate::probe::MemberFnProbe<$crate::name!($member)>,
            $crate::type_list![$T]
        )
    };
}

/// Whether `T` has an associated function (no receiver) named `member`.
///
/// An instance method of the same name does not count.
#[macro_export]
macro_rules! has_static_member_function {
    ($T:ty, $member:tt $(,)?) => {
        $crate::is_valid!(
            $crate::probe::StaticFnProbe<$crate::name!($member)>,
            $crate::type_list![$T]
        )
    };
}
