#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: materializing helpers (`names`, `to_vec`, `Name::to_string`) in no_std
// - probe: default, enables the validity-probe layer

//! # tola-tmpl
//!
//! Compile-time type lists, value lists and validity probes.
//!
//! **Everything here is resolved by the type checker.** Lists are zero-sized,
//! operations are traits with an `Out` associated type, and a probe answers
//! with a `const bool`.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - True/False, Peano naturals (Z, S<N>, U0..U64), const bridge    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: List Engines                                            |
//! |  - TNil/TCons: Concat, Slice, At, Pick, Map, Filter, Reverse      |
//! |  - Values<K, L>: the same operations over const markers           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Validity Probes                                         |
//! |  - is_valid / Detector, member registry, has_* queries            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Slice is a fold
//! Every element is tested against the window and contributes itself or the
//! empty list; the contributions are concatenated. Out-of-range windows give
//! a shorter or empty list, never an error.
//!
//! ### Detection
//! A probe is a type implementing `Probe<T>` for the types it accepts.
//! `is_valid!` resolves to `true` when that impl exists and to `false`
//! otherwise, using an inherent-const-over-trait-const fallback.
//!
//! ## Quick Start
//!
//! ```
//! use tola_tmpl::prelude::*;
//! use tola_tmpl::{assert_type_eq, has_member, has_nonstatic_member_function, type_list, value_list};
//!
//! type L = type_list![i32, f64, char, f32];
//! assert_type_eq!(Slice<L, 1, 3>, type_list![f64, char]);
//!
//! type V = value_list![i32; 10, 20, 30, 40, 50];
//! assert_eq!(<Slice<V, 2, 5>>::to_vec(), vec![30, 40, 50]);
//!
//! #[derive(Members)]
//! struct Counter { pub count: u32 }
//!
//! #[members]
//! impl Counter {
//!     pub fn bump(&mut self) { self.count += 1; }
//! }
//!
//! assert!(has_member!(Counter, count));
//! assert!(has_nonstatic_member_function!(Counter, bump));
//! assert!(!has_nonstatic_member_function!(Counter, count));
//! ```

// Allow `::tola_tmpl` to work inside the crate itself
extern crate self as tola_tmpl;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for value_list!
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: List Engines
// =============================================================================
pub mod list;
pub mod value;

// =============================================================================
// Layer 2: Validity Probes
// =============================================================================
#[cfg(feature = "probe")]
pub mod probe;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use list::{TCons, TNil, TypeList};
pub use primitives::bool::{Bool, False, True};
pub use primitives::peano::{Peano, S, Z};
pub use value::{ConstValue, Name, ValueList, Values};

// Re-export proc-macros
pub use macros::name;
#[cfg(feature = "probe")]
pub use macros::{Members, members};

/// Assert at compile time that two types are the same.
///
/// ```
/// use tola_tmpl::assert_type_eq;
///
/// type Byte = u8;
/// assert_type_eq!(Byte, u8);
/// ```
///
/// ```compile_fail
/// use tola_tmpl::assert_type_eq;
///
/// assert_type_eq!(u8, i8);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($left:ty, $right:ty $(,)?) => {
        const _: () = {
            let _: ::core::marker::PhantomData<$left> = ::core::marker::PhantomData::<$right>;
        };
    };
}

/// Common items for list manipulation and member detection.
pub mod prelude {
    pub use crate::list::{
        // Nodes
        TCons, TNil, TypeList,
        // Operations
        Concat, Concatenated, Filter, Filtered, Map, Mapped, Nth, Picked, Predicate, Reversed,
        Slice, TypeFn,
    };
    pub use crate::primitives::bool::{Bool, False, True};
    pub use crate::value::{ConstValue, IndexSequence, ValueList, Values};
    #[cfg(feature = "probe")]
    pub use crate::probe::{Detector, Member, Probe, Typedef, is_valid};
    #[cfg(feature = "probe")]
    pub use macros::{Members, members};
    // Note: type_list!, value_list!, is_valid!, has_member!, ... are #[macro_export]
    // so they're at crate root
}
