//! # Layer 2: Validity Probes
//!
//! Answers "does this capability hold for `T`?" at compile time, reporting
//! `false` instead of failing to compile when it does not.
//!
//! ## Probes
//!
//! A **probe** is a type `P` that implements [`Probe<T>`] exactly for the
//! types `T` it accepts. The capability is written as the impl's bounds:
//!
//! ```
//! use tola_tmpl::probe::Probe;
//!
//! struct Printable;
//! impl<T: ?Sized + core::fmt::Display> Probe<T> for Printable {}
//! ```
//!
//! or in one line with [`probe!`](crate::probe!).
//!
//! ## Detectors
//!
//! [`is_valid`] wraps a probe into a [`Detector`]. A detector is applied to a
//! single-element type list, unboxes the candidate type and picks one of two
//! candidates:
//!
//! ```text
//! P: Probe<T> holds   -> "valid" candidate   -> true
//! otherwise           -> "invalid" fallback  -> false
//! ```
//!
//! | Form | Result | Usable in |
//! |------|--------|-----------|
//! | `is_valid!(P, type_list![T])` | `const bool` | `const` items, `const {}` |
//! | `detect!(detector, type_list![T])` | `bool` | expressions |
//!
//! ## Limitation
//!
//! Like every stable trait-detection idiom, the choice is made where `T` is a
//! **concrete type**. Inside `fn foo<T>()` the fallback is always taken.

use core::marker::PhantomData;

use crate::list::{TCons, TNil};

pub mod member;
pub mod query;

pub use member::{
    DataPtr, FnPtr, Func, IsFunction, Member, MemberKind, MemberPointee, MemberPointer, MethodPtr,
    RemovePointer, Signature, StaticPtr, Typedef,
};
pub use query::{MemberFnProbe, MemberProbe, StaticFnProbe, TypedefProbe};

// =============================================================================
// Probe / Detector
// =============================================================================

/// Implemented by a probe for every type it accepts.
pub trait Probe<T: ?Sized> {}

/// A reusable predicate keyed by the probe type `P`.
pub struct Detector<P>(PhantomData<P>);

impl<P> Clone for Detector<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Detector<P> {}

impl<P> core::fmt::Debug for Detector<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Detector<{}>", core::any::type_name::<P>())
    }
}

impl<P> Detector<P> {
    pub const NEW: Self = Detector(PhantomData);

    /// Bind the detector to a candidate list. Used by `detect!`.
    #[doc(hidden)]
    pub const fn bind<L: Unbox + ?Sized>(&self) -> Probing<P, L::Inner> {
        Probing(PhantomData, PhantomData)
    }
}

/// Wrap a probe into a detector.
///
/// ```
/// use tola_tmpl::{detect, probe, type_list};
/// use tola_tmpl::probe::is_valid;
///
/// probe!(Summable: core::iter::Sum);
///
/// let summable = is_valid(Summable);
/// assert!(detect!(summable, type_list![u32]));
/// assert!(!detect!(summable, type_list![String]));
/// ```
pub const fn is_valid<P>(probe: P) -> Detector<P> {
    // Probes are stateless; `P` may not be droppable in const context.
    core::mem::forget(probe);
    Detector(PhantomData)
}

/// Unwraps the single element of a type list.
#[diagnostic::on_unimplemented(
    message = "detectors are applied to a single-element type list",
    label = "`{Self}` is not of the form `type_list![T]`",
    note = "Wrap exactly one candidate type: `type_list![MyType]`."
)]
pub trait Unbox {
    type Inner: ?Sized;
}

impl<T: ?Sized> Unbox for TCons<T, TNil> {
    type Inner = T;
}

// =============================================================================
// Const resolution (inherent const shadows the trait const)
// =============================================================================

#[doc(hidden)]
pub struct Check<P, T: ?Sized>(PhantomData<P>, PhantomData<T>);

#[doc(hidden)]
pub trait InvalidFallback {
    const VALID: bool = false;
}

impl<P, T: ?Sized> InvalidFallback for Check<P, T> {}

impl<P: Probe<T>, T: ?Sized> Check<P, T> {
    #[allow(dead_code)]
    pub const VALID: bool = true;
}

/// Whether probe `P` accepts the type in the singleton list `L`, as a
/// `const bool`.
///
/// ```
/// use tola_tmpl::{is_valid, probe, type_list};
///
/// probe!(Hashable: core::hash::Hash);
///
/// const STR_HASHABLE: bool = is_valid!(Hashable, type_list![str]);
/// const F32_HASHABLE: bool = is_valid!(Hashable, type_list![f32]);
///
/// assert!(STR_HASHABLE);
/// assert!(!F32_HASHABLE);
/// ```
///
/// Anything but a singleton list is a compile error:
///
/// ```compile_fail
/// use tola_tmpl::{is_valid, probe, type_list};
///
/// probe!(Hashable: core::hash::Hash);
/// let _ = is_valid!(Hashable, type_list![u8, u16]);
/// ```
#[macro_export]
macro_rules! is_valid {
    ($probe:ty, $list:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::InvalidFallback as _;
        $crate::probe::Check::<$probe, <$list as $crate::probe::Unbox>::Inner>::VALID
    }};
}

// =============================================================================
// Value resolution (autoref)
// =============================================================================

#[doc(hidden)]
pub struct Probing<P, T: ?Sized>(PhantomData<P>, PhantomData<T>);

#[doc(hidden)]
pub trait ViaValid {
    fn resolve(&self) -> bool {
        true
    }
}

impl<P: Probe<T>, T: ?Sized> ViaValid for Probing<P, T> {}

#[doc(hidden)]
pub trait ViaInvalid {
    fn resolve(&self) -> bool {
        false
    }
}

impl<P, T: ?Sized> ViaInvalid for &Probing<P, T> {}

/// Apply a detector value to a singleton type list.
///
/// The `Probe` impl is looked up on `&Probing` first and on `&&Probing`
/// second, so the valid candidate wins whenever it exists.
#[macro_export]
macro_rules! detect {
    ($detector:expr, $list:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{ViaInvalid as _, ViaValid as _};
        let probing = $crate::probe::Detector::bind::<$list>(&$detector);
        (&probing).resolve()
    }};
}

// =============================================================================
// probe! - declare a bound-based probe
// =============================================================================

/// Declare a probe accepting every type that satisfies the given bounds.
///
/// ```
/// use tola_tmpl::{is_valid, probe, type_list};
///
/// probe!(pub Orderable: Ord + Clone);
///
/// assert!(is_valid!(Orderable, type_list![String]));
/// assert!(!is_valid!(Orderable, type_list![f64]));
/// ```
#[macro_export]
macro_rules! probe {
    ($(#[$meta:meta])* $vis:vis $name:ident : $($bound:tt)+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl<__T: ?Sized + $($bound)+> $crate::probe::Probe<__T> for $name {}
    };
}
