//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then: ?Sized, Else: ?Sized> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then: ?Sized, Else: ?Sized> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// `const bool` lifted to a type.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolOf<C> as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(<<True as Bool>::And<True> as Bool>::VALUE);
        assert!(!<<True as Bool>::And<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Or<True> as Bool>::VALUE);
        assert!(!<<False as Bool>::Or<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_if_selects_branch() {
        let _: If<true, u8, u16> = 1u8;
        let _: If<false, u8, u16> = 1u16;
    }
}
