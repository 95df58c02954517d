//! # Layer 1: Type-List Engine
//!
//! Ordered, immutable, compile-time sequences of types.
//!
//! ```text
//! type_list![A, B, C]  ==  TCons<A, TCons<B, TCons<C, TNil>>>
//! ```
//!
//! Every operation is a trait with an `Out` associated type plus a type alias
//! that reads like a function call:
//!
//! | Operation | Trait | Alias |
//! |-----------|-------|-------|
//! | concatenate | `Concat<Rhs>` | `Concatenated<A, B>` |
//! | slice `[START, END)` | `SliceRange<Start, End>` | `Slice<L, START, END>` |
//! | element at | `At<N>` | `Nth<L, N>` |
//! | select by indices | `Pick<Idx>` | `Picked<L, Idx>` |
//! | map | `Map<F>` | `Mapped<L, F>` |
//! | filter | `Filter<P>` | `Filtered<L, P>` |
//! | reverse | `ReverseOnto<Acc>` | `Reversed<L>` |
//!
//! List values are zero-sized; `a | b` concatenates them like the type-level
//! `Concat` does.

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::peano::{Peano, S, Z};

pub mod concat;
pub mod slice;
pub mod transform;

pub use concat::{Concat, Concatenated, PushBack, PushFront, ReverseOnto, Reversed};
pub use slice::{
    At, Contribute, CountFrom, IndicesOf, Naturals, Nth, Pick, Picked, Slice, SliceAt, SliceRange,
};
pub use transform::{Filter, Filtered, Map, Mapped, Predicate, TypeFn};

// =============================================================================
// List Nodes
// =============================================================================

/// The empty type list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TNil;

/// Type list cons cell: `H` followed by the list `T`.
///
/// `H` may be unsized (`str`, `[u8]`, `dyn Trait`).
pub struct TCons<H: ?Sized, T>(PhantomData<H>, PhantomData<T>);

// Manual impls: don't require H or T to implement anything
impl<H: ?Sized, T> Clone for TCons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized, T> Copy for TCons<H, T> {}

impl<H: ?Sized, T: TypeList> Default for TCons<H, T> {
    fn default() -> Self {
        Self::NEW
    }
}

impl<H: ?Sized, T: TypeList> fmt::Debug for TCons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        Self::for_each_name(|name| {
            list.entry(&name);
        });
        list.finish()
    }
}

// =============================================================================
// TypeList
// =============================================================================

/// A compile-time sequence of types.
pub trait TypeList: Sized {
    /// Number of elements.
    const LEN: usize;

    /// The (zero-sized) value of this list.
    const NEW: Self;

    /// Length as a Peano natural.
    type Len: Peano;

    /// Calls `f` with the type name of each element, in order.
    ///
    /// Names come from `core::any::type_name` and are meant for debugging.
    fn for_each_name<F: FnMut(&'static str)>(f: F);

    /// Type names of all elements, in order.
    #[cfg(feature = "alloc")]
    fn names() -> alloc::vec::Vec<&'static str> {
        let mut names = alloc::vec::Vec::with_capacity(Self::LEN);
        Self::for_each_name(|name| names.push(name));
        names
    }
}

impl TypeList for TNil {
    const LEN: usize = 0;
    const NEW: Self = TNil;
    type Len = Z;

    fn for_each_name<F: FnMut(&'static str)>(_f: F) {}
}

impl<H: ?Sized, T: TypeList> TypeList for TCons<H, T> {
    const LEN: usize = T::LEN + 1;
    const NEW: Self = TCons(PhantomData, PhantomData);
    type Len = S<T::Len>;

    fn for_each_name<F: FnMut(&'static str)>(mut f: F) {
        f(core::any::type_name::<H>());
        T::for_each_name(f);
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Build a type list from its elements.
///
/// ```
/// use tola_tmpl::{assert_type_eq, type_list};
/// use tola_tmpl::list::{TCons, TNil};
///
/// assert_type_eq!(type_list![], TNil);
/// assert_type_eq!(type_list![u8, str], TCons<u8, TCons<str, TNil>>);
/// ```
#[macro_export]
macro_rules! type_list {
    () => { $crate::list::TNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::TCons<$head, $crate::type_list![$($tail),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(TNil::LEN, 0);
        assert_eq!(<crate::type_list![u8, str, [u16]]>::LEN, 3);
        assert_eq!(<<crate::type_list![u8, u8] as TypeList>::Len as Peano>::VALUE, 2);
    }

    #[test]
    fn test_lists_are_zero_sized() {
        assert_eq!(core::mem::size_of::<crate::type_list![u64, [u8; 1024]]>(), 0);
    }

    #[test]
    fn test_for_each_name_visits_in_order() {
        let mut seen = [""; 3];
        let mut i = 0;
        <crate::type_list![u8, bool, char]>::for_each_name(|name| {
            seen[i] = name;
            i += 1;
        });
        assert_eq!(seen, ["u8", "bool", "char"]);
    }
}
