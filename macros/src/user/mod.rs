//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Members)]` | on struct | Register fields and typedefs |
//! | `#[members]` | on inherent impl | Register methods, associated fns and consts |

mod members;

pub use members::{expand_derive_members, expand_members_impl};
