//! Functional transforms: `Map` and `Filter`.

use crate::primitives::bool::Bool;

use super::concat::{Concat, Concatenated};
use super::slice::Contribute;
use super::{TCons, TNil, TypeList};

// =============================================================================
// Map
// =============================================================================

/// A type-to-type function. Implement it for a marker type:
///
/// ```
/// use tola_tmpl::list::{Mapped, TypeFn};
/// use tola_tmpl::{assert_type_eq, type_list};
///
/// struct Boxed;
/// impl<T> TypeFn<T> for Boxed {
///     type Out = Box<T>;
/// }
///
/// assert_type_eq!(Mapped<type_list![u8, char], Boxed>, type_list![Box<u8>, Box<char>]);
/// ```
pub trait TypeFn<T: ?Sized> {
    type Out: ?Sized;
}

/// Apply `F` to every element.
pub trait Map<F> {
    type Out: TypeList;
}

impl<F> Map<F> for TNil {
    type Out = TNil;
}

impl<F, H: ?Sized, T> Map<F> for TCons<H, T>
where
    F: TypeFn<H>,
    T: Map<F>,
{
    type Out = TCons<<F as TypeFn<H>>::Out, <T as Map<F>>::Out>;
}

/// `L` with `F` applied to every element.
pub type Mapped<L, F> = <L as Map<F>>::Out;

// =============================================================================
// Filter
// =============================================================================

/// A type-level predicate: `Out` is `True` or `False`.
pub trait Predicate<T: ?Sized> {
    type Out: Bool;
}

/// Keep the elements satisfying `P`, in order.
///
/// Same fold as slicing, with the predicate in place of the window test.
pub trait Filter<P> {
    type Out: TypeList;
}

impl<P> Filter<P> for TNil {
    type Out = TNil;
}

impl<P, H: ?Sized, T> Filter<P> for TCons<H, T>
where
    P: Predicate<H>,
    <P as Predicate<H>>::Out: Contribute<H>,
    T: Filter<P>,
    <<P as Predicate<H>>::Out as Contribute<H>>::Out: Concat<<T as Filter<P>>::Out>,
{
    type Out = Concatenated<
        <<P as Predicate<H>>::Out as Contribute<H>>::Out,
        <T as Filter<P>>::Out,
    >;
}

/// The elements of `L` satisfying `P`.
pub type Filtered<L, P> = <L as Filter<P>>::Out;
