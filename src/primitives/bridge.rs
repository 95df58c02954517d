//! Const-to-Type Bridge
//!
//! Converts compile-time constants to Peano naturals so that slice bounds and
//! positions can be written as ordinary integers.

/// Converts a const `usize` (0-64) to a Peano type.
///
/// Usage in type position:
/// ```ignore
/// type Three = <() as ToPeano<3>>::Out;
/// ```
#[diagnostic::on_unimplemented(
    message = "constant is outside the supported range of type-level naturals",
    label = "no Peano natural for this constant",
    note = "Positions are supported from 0 to 64."
)]
pub trait ToPeano<const N: usize> {
    type Out: super::peano::Peano;
}

/// The Peano natural for a const `usize`.
pub type Nat<const N: usize> = <() as ToPeano<N>>::Out;

/// Converts a window bound to a type the slice fold can compare positions
/// against.
///
/// | `N` | `Out` |
/// |-----|-------|
/// | `N < 0` | `Z` |
/// | `0..=64` | the natural `N` |
/// | `N > 64` | [`Inf`](super::peano::Inf) |
///
/// Positions are never negative, so every negative bound behaves as `0`.
#[diagnostic::on_unimplemented(
    message = "window bound is outside the supported range",
    label = "no type-level bound for this constant",
    note = "Slice bounds are supported from -1024 to 1024."
)]
pub trait ToBound<const N: isize> {
    type Out;
}

/// The clamped bound for a const `isize`.
pub type BoundOf<const N: isize> = <() as ToBound<N>>::Out;

// The `ToPeano` and `ToBound` tables are generated next to U0..U64 by `peano!`.
