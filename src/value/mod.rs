//! # Layer 1: Value-List Engine
//!
//! Compile-time sequences of *values* of one kind (`i32`, `bool`, a user
//! enum, ...).
//!
//! A value is carried by a zero-sized **const marker** implementing
//! [`ConstValue`], and a value list is a type list of markers tagged with its
//! kind:
//!
//! ```text
//! value_list![i32; 10, 20]  ==  Values<i32, type_list![ConstI32<10>, ConstI32<20>]>
//! ```
//!
//! Because the markers live in an ordinary type list, slicing and
//! concatenation are the Type-List Engine's fold; `Values` only keeps the
//! kind attached. The empty list of a kind is `Values<K, TNil>`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::BitOr;

use crate::list::{At, Concat, Concatenated, Naturals, SliceRange, TCons, TNil, TypeList};
use crate::primitives::bridge::Nat;
use crate::primitives::peano::{Peano, S, Z};

pub mod name;

pub use name::Name;

// =============================================================================
// Const Markers
// =============================================================================

/// A type standing for a single compile-time value.
pub trait ConstValue {
    /// The value kind.
    type Kind: Copy + 'static;

    const VALUE: Self::Kind;
}

/// Generate a const marker per primitive kind: `ConstI32<V>`, `ConstBool<V>`, ...
macro_rules! impl_const_kinds {
    ($($kind:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = concat!("Const marker for a `", stringify!($kind), "` value.")]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct [<Const $kind:camel>]<const V: $kind>;

                impl<const V: $kind> ConstValue for [<Const $kind:camel>]<V> {
                    type Kind = $kind;
                    const VALUE: $kind = V;
                }
            }
        )*
    };
}

impl_const_kinds!(
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
);

// Peano naturals are positions, so they double as `usize` constants.
impl ConstValue for Z {
    type Kind = usize;
    const VALUE: usize = 0;
}

impl<N: Peano> ConstValue for S<N> {
    type Kind = usize;
    const VALUE: usize = <S<N> as Peano>::VALUE;
}

/// Declare const markers for a user-defined kind.
///
/// ```
/// use tola_tmpl::const_value;
/// use tola_tmpl::value::ConstValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// pub enum Color { Red, Green }
///
/// const_value! {
///     pub RedValue: Color = Color::Red;
///     pub GreenValue: Color = Color::Green;
/// }
///
/// assert_eq!(GreenValue::VALUE, Color::Green);
/// ```
#[macro_export]
macro_rules! const_value {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $kind:ty = $value:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            $vis struct $name;

            impl $crate::value::ConstValue for $name {
                type Kind = $kind;
                const VALUE: $kind = $value;
            }
        )+
    };
}

// =============================================================================
// ValueList (on marker lists)
// =============================================================================

/// A type list whose elements are all const markers of kind `K`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of `{K}` constants",
    label = "every element must implement `ConstValue<Kind = {K}>`"
)]
pub trait ValueList<K>: TypeList {
    /// Calls `f` with each value, in order.
    fn for_each<F: FnMut(K)>(f: F);
}

impl<K> ValueList<K> for TNil {
    fn for_each<F: FnMut(K)>(_f: F) {}
}

impl<K, H, T> ValueList<K> for TCons<H, T>
where
    H: ConstValue<Kind = K>,
    T: ValueList<K>,
{
    fn for_each<F: FnMut(K)>(mut f: F) {
        f(H::VALUE);
        T::for_each(f);
    }
}

// =============================================================================
// Values
// =============================================================================

/// A value list of kind `K` over the marker list `L`.
pub struct Values<K, L>(PhantomData<fn() -> K>, PhantomData<L>);

impl<K, L> Clone for Values<K, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, L> Copy for Values<K, L> {}

impl<K, L: TypeList> Default for Values<K, L> {
    fn default() -> Self {
        Self::NEW
    }
}

impl<K: fmt::Debug, L: ValueList<K>> fmt::Debug for Values<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        L::for_each(|value| {
            list.entry(&value);
        });
        list.finish()
    }
}

impl<K, L: TypeList> TypeList for Values<K, L> {
    const LEN: usize = L::LEN;
    const NEW: Self = Values(PhantomData, PhantomData);
    type Len = L::Len;

    fn for_each_name<F: FnMut(&'static str)>(f: F) {
        L::for_each_name(f);
    }
}

impl<K: Copy, L: ValueList<K>> Values<K, L> {
    /// Calls `f` with each value, in order.
    pub fn for_each<F: FnMut(K)>(f: F) {
        L::for_each(f);
    }

    /// The value at `index`, or `None` past the end.
    pub fn get(index: usize) -> Option<K> {
        let mut found = None;
        let mut position = 0;
        L::for_each(|value| {
            if position == index {
                found = Some(value);
            }
            position += 1;
        });
        found
    }

    /// Whether `value` occurs in the list.
    pub fn contains(value: K) -> bool
    where
        K: PartialEq,
    {
        let mut found = false;
        L::for_each(|v| found |= v == value);
        found
    }

    /// All values, in order.
    #[cfg(feature = "alloc")]
    pub fn to_vec() -> alloc::vec::Vec<K> {
        let mut values = alloc::vec::Vec::with_capacity(L::LEN);
        L::for_each(|value| values.push(value));
        values
    }
}

// Same operations as the Type-List Engine, kind preserved.

impl<K, L, R> Concat<Values<K, R>> for Values<K, L>
where
    L: Concat<R>,
{
    type Out = Values<K, Concatenated<L, R>>;
}

impl<K, L, R> BitOr<Values<K, R>> for Values<K, L>
where
    L: Concat<R>,
{
    type Output = Values<K, Concatenated<L, R>>;

    fn bitor(self, _rhs: Values<K, R>) -> Self::Output {
        Values(PhantomData, PhantomData)
    }
}

impl<K, L, Start, End> SliceRange<Start, End> for Values<K, L>
where
    L: SliceRange<Start, End>,
{
    type Out = Values<K, <L as SliceRange<Start, End>>::Out>;
}

impl<K, L, N> At<N> for Values<K, L>
where
    L: At<N>,
{
    type Out = <L as At<N>>::Out;
}

/// `0, 1, ..., N - 1` as a `usize` value list.
///
/// ```
/// use tola_tmpl::value::IndexSequence;
///
/// assert_eq!(IndexSequence::<4>::to_vec(), vec![0, 1, 2, 3]);
/// ```
pub type IndexSequence<const N: usize> = Values<usize, Naturals<Nat<N>>>;

// =============================================================================
// Construction
// =============================================================================

/// Build a value list.
///
/// Primitive kinds take the values directly; any other kind takes const
/// markers declared with [`const_value!`](crate::const_value):
///
/// ```
/// use tola_tmpl::{const_value, value_list};
///
/// type Primes = value_list![u32; 2, 3, 5, 7];
/// assert_eq!(Primes::get(2), Some(5));
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Dir { Up, Down }
/// const_value! { UpV: Dir = Dir::Up; DownV: Dir = Dir::Down; }
///
/// type Moves = value_list![Dir => UpV, DownV, UpV];
/// assert_eq!(Moves::to_vec(), vec![Dir::Up, Dir::Down, Dir::Up]);
/// ```
#[macro_export]
macro_rules! value_list {
    ($kind:ident; $($value:expr),* $(,)?) => {
        $crate::paste::paste! {
            $crate::value::Values<
                $kind,
                $crate::type_list![$($crate::value::[<Const $kind:camel>]<{ $value }>),*]
            >
        }
    };
    ($kind:ty => $($marker:ty),* $(,)?) => {
        $crate::value::Values<$kind, $crate::type_list![$($marker),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Slice;
    use crate::{assert_type_eq, type_list};

    #[test]
    fn test_markers_carry_values() {
        assert_eq!(ConstI32::<-7>::VALUE, -7);
        assert!(ConstBool::<true>::VALUE);
        assert_eq!(ConstChar::<'x'>::VALUE, 'x');
        assert_eq!(<S<S<Z>> as ConstValue>::VALUE, 2);
    }

    #[test]
    fn test_slice_keeps_kind() {
        type V = crate::value_list![i64; 1, 2, 3];
        assert_type_eq!(Slice<V, 1, 2>, Values<i64, type_list![ConstI64<2>]>);
        assert_type_eq!(Slice<V, 3, 3>, Values<i64, TNil>);
    }

    #[test]
    fn test_get_past_end() {
        type V = crate::value_list![u8; 9];
        assert_eq!(V::get(0), Some(9));
        assert_eq!(V::get(1), None);
    }
}
