//! # Layer 0: Primitives
//!
//! Basic building blocks for the list engines:
//! - `bool.rs`: Type-level booleans (`True`/`False`) with `If`/`And`/`Or`/`Not`.
//! - `peano.rs`: Type-level naturals (`Z`, `S<N>`, `U0`..`U64`) and ordering.
//! - `bridge.rs`: `const N: usize` to Peano conversion, clamped `isize` window bounds.

pub mod bool;
pub mod bridge;
pub mod peano;

pub use bool::{Bool, BoolOf, False, If, SelectBool, True};
pub use bridge::{BoundOf, Nat, ToBound, ToPeano};
pub use peano::{InRange, Inf, Peano, PeanoLt, S, Z};
