//! Peano naturals for positions, lengths and slice bounds.

use core::marker::PhantomData;
use super::bool::{Bool, False, True};

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano: 'static {
    /// The number as a `usize`.
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, Default)]
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Greater than every natural: the bound of a window reaching past `U64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inf;

// Generate U0..U64 and the const bridges using proc-macro
macros::peano!(64, bounds = 1024);

// =============================================================================
// Comparison
// =============================================================================

/// Strict less-than: `Self < Rhs`.
pub trait PeanoLt<Rhs> {
    type Out: Bool;
}

impl PeanoLt<Z> for Z {
    type Out = False;
}

impl<N> PeanoLt<S<N>> for Z {
    type Out = True;
}

impl<N> PeanoLt<Z> for S<N> {
    type Out = False;
}

impl<A, B> PeanoLt<S<B>> for S<A>
where
    A: PeanoLt<B>,
{
    type Out = <A as PeanoLt<B>>::Out;
}

impl PeanoLt<Inf> for Z {
    type Out = True;
}

impl<N> PeanoLt<Inf> for S<N> {
    type Out = True;
}

/// `Start <= Self < End`, the window test used by slicing.
pub trait InRange<Start, End> {
    type Out: Bool;
}

impl<I, Start, End> InRange<Start, End> for I
where
    I: PeanoLt<Start> + PeanoLt<End>,
{
    type Out = <<<I as PeanoLt<Start>>::Out as Bool>::Not as Bool>::And<<I as PeanoLt<End>>::Out>;
}
