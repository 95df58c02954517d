// Internal macro implementations
//
// These generate the crate's own building blocks and the type-level names
// shared by the user-facing macros.

pub mod name;
pub mod peano;
