// Common utilities shared between the registry macros
//
// This module contains:
// - parse_utils: `#[member(...)]` helper-attribute parsing
// - signature: function signatures as function pointer types

mod parse_utils;
mod signature;

pub use parse_utils::*;
pub use signature::*;
