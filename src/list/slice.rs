//! Position-driven operations: slicing, indexing, index sequences.
//!
//! ## Slice as a fold
//!
//! Each element is paired with its position (a Peano counter threaded
//! through the recursion). The position is tested against `[Start, End)` and
//! the element contributes either `[H]` or `[]`; contributions are joined
//! with `Concat`:
//!
//! ```text
//! slice([A, B, C], 1, 3) = f(A, 0) ++ f(B, 1) ++ f(C, 2) ++ []
//!                        =   []    ++  [B]    ++  [C]    ++ []
//! ```
//!
//! Windows that are empty, inverted or past the end contribute nothing, so
//! the result degrades to a shorter or empty list instead of failing.
//! Negative bounds act as `0`; bounds past `64` act as unbounded.

use crate::primitives::bool::{False, True};
use crate::primitives::bridge::{BoundOf, Nat};
use crate::primitives::peano::{InRange, S, Z};

use super::concat::{Concat, Concatenated};
use super::{TCons, TNil, TypeList};

// =============================================================================
// Fold Step
// =============================================================================

/// Per-element contribution selected by a type-level boolean:
/// `True` keeps `[H]`, `False` contributes the empty list.
pub trait Contribute<H: ?Sized> {
    type Out: TypeList;
}

impl<H: ?Sized> Contribute<H> for True {
    type Out = TCons<H, TNil>;
}

impl<H: ?Sized> Contribute<H> for False {
    type Out = TNil;
}

// =============================================================================
// Slice
// =============================================================================

/// Slice fold starting at position `Idx`.
pub trait SliceAt<Idx, Start, End> {
    type Out: TypeList;
}

impl<Idx, Start, End> SliceAt<Idx, Start, End> for TNil {
    type Out = TNil;
}

impl<H: ?Sized, T, Idx, Start, End> SliceAt<Idx, Start, End> for TCons<H, T>
where
    Idx: InRange<Start, End>,
    <Idx as InRange<Start, End>>::Out: Contribute<H>,
    T: SliceAt<S<Idx>, Start, End>,
    <<Idx as InRange<Start, End>>::Out as Contribute<H>>::Out:
        Concat<<T as SliceAt<S<Idx>, Start, End>>::Out>,
{
    type Out = Concatenated<
        <<Idx as InRange<Start, End>>::Out as Contribute<H>>::Out,
        <T as SliceAt<S<Idx>, Start, End>>::Out,
    >;
}

/// Elements whose position lies in `[Start, End)` (Peano bounds).
pub trait SliceRange<Start, End> {
    type Out;
}

impl<Start, End> SliceRange<Start, End> for TNil {
    type Out = TNil;
}

impl<H: ?Sized, T, Start, End> SliceRange<Start, End> for TCons<H, T>
where
    Self: SliceAt<Z, Start, End>,
{
    type Out = <Self as SliceAt<Z, Start, End>>::Out;
}

/// Elements of `L` at positions `START..END`.
///
/// ```
/// use tola_tmpl::{assert_type_eq, type_list};
/// use tola_tmpl::list::Slice;
///
/// type L = type_list![i32, f64, char, f32];
/// assert_type_eq!(Slice<L, 1, 3>, type_list![f64, char]);
/// assert_type_eq!(Slice<L, 3, 9>, type_list![f32]);
/// assert_type_eq!(Slice<L, 2, 2>, type_list![]);
/// assert_type_eq!(Slice<L, -2, 2>, type_list![i32, f64]);
/// assert_type_eq!(Slice<L, 0, -1>, type_list![]);
/// ```
pub type Slice<L, const START: isize, const END: isize> =
    <L as SliceRange<BoundOf<START>, BoundOf<END>>>::Out;

// =============================================================================
// Indexing
// =============================================================================

/// The element at position `N`.
#[diagnostic::on_unimplemented(
    message = "position `{N}` is out of bounds for `{Self}`",
    label = "no element at this position",
    note = "Positions are 0-based and must be less than the list length."
)]
pub trait At<N> {
    type Out: ?Sized;
}

impl<H: ?Sized, T> At<Z> for TCons<H, T> {
    type Out = H;
}

impl<H: ?Sized, T, N> At<S<N>> for TCons<H, T>
where
    T: At<N>,
{
    type Out = <T as At<N>>::Out;
}

/// The element of `L` at position `N`.
pub type Nth<L, const N: usize> = <L as At<Nat<N>>>::Out;

/// Elements at the positions listed in `Idx` (a list of Peano naturals), in
/// the order `Idx` gives them. Positions may repeat.
pub trait Pick<Idx> {
    type Out: TypeList;
}

impl<L> Pick<TNil> for L {
    type Out = TNil;
}

impl<L, I, Rest> Pick<TCons<I, Rest>> for L
where
    L: At<I> + Pick<Rest>,
{
    type Out = TCons<<L as At<I>>::Out, <L as Pick<Rest>>::Out>;
}

/// `Pick` as an alias.
pub type Picked<L, Idx> = <L as Pick<Idx>>::Out;

// =============================================================================
// Index Sequences
// =============================================================================

/// Counts `Self` naturals upward from `I`: `[I, I + 1, ..., I + Self - 1]`.
pub trait CountFrom<I> {
    type Out: TypeList;
}

impl<I> CountFrom<I> for Z {
    type Out = TNil;
}

impl<N, I> CountFrom<I> for S<N>
where
    N: CountFrom<S<I>>,
{
    type Out = TCons<I, <N as CountFrom<S<I>>>::Out>;
}

/// `[U0, U1, ..., N - 1]`
pub type Naturals<N> = <N as CountFrom<Z>>::Out;

/// The positions of `L`: a list of the same length holding `U0, U1, ...`.
pub type IndicesOf<L> = Naturals<<L as TypeList>::Len>;
