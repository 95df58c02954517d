//! Concatenation and the operations built directly on it.
//!
//! `Concat` is associative and `TNil` is its identity on both sides, which is
//! what lets slicing and filtering be written as a fold of singleton-or-empty
//! contributions.

use core::ops::BitOr;

use super::{TCons, TNil, TypeList};

/// Append `Rhs` after `Self`.
pub trait Concat<Rhs> {
    type Out: TypeList;
}

// Nil ++ R = R
impl<Rhs: TypeList> Concat<Rhs> for TNil {
    type Out = Rhs;
}

// (H :: T) ++ R = H :: (T ++ R)
impl<H: ?Sized, T, Rhs> Concat<Rhs> for TCons<H, T>
where
    T: Concat<Rhs>,
{
    type Out = TCons<H, <T as Concat<Rhs>>::Out>;
}

/// `A ++ B`
pub type Concatenated<A, B> = <A as Concat<B>>::Out;

/// `X :: L`
pub type PushFront<L, X> = TCons<X, L>;

/// `L ++ [X]`
pub type PushBack<L, X> = Concatenated<L, TCons<X, TNil>>;

// =============================================================================
// `|` on list values
// =============================================================================

impl<Rhs: TypeList> BitOr<Rhs> for TNil {
    type Output = Rhs;

    fn bitor(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H: ?Sized, T, Rhs> BitOr<Rhs> for TCons<H, T>
where
    Self: Concat<Rhs>,
{
    type Output = Concatenated<Self, Rhs>;

    fn bitor(self, _rhs: Rhs) -> Self::Output {
        <Self::Output as TypeList>::NEW
    }
}

// =============================================================================
// Reverse
// =============================================================================

/// Reverse `Self` onto the front of `Acc`.
pub trait ReverseOnto<Acc> {
    type Out: TypeList;
}

impl<Acc: TypeList> ReverseOnto<Acc> for TNil {
    type Out = Acc;
}

impl<H: ?Sized, T, Acc> ReverseOnto<Acc> for TCons<H, T>
where
    T: ReverseOnto<TCons<H, Acc>>,
{
    type Out = <T as ReverseOnto<TCons<H, Acc>>>::Out;
}

/// `L` in reverse order.
pub type Reversed<L> = <L as ReverseOnto<TNil>>::Out;
