//! Type-level identifiers.
//!
//! `name!(value_type)` expands to a `Name` over the characters of the
//! identifier, each a `ConstChar` marker:
//!
//! ```text
//! name!(ab)  ==  Name<type_list![ConstChar<'a'>, ConstChar<'b'>]>
//! ```
//!
//! Two names are the same type exactly when they spell the same identifier,
//! so a name can key trait impls (`Member<name!(len)>`) without any hashing.

use core::fmt;
use core::marker::PhantomData;

use super::ValueList;

/// An identifier spelled by the `char` value list `L`.
pub struct Name<L>(PhantomData<L>);

impl<L: ValueList<char>> Name<L> {
    /// Number of characters.
    pub const LEN: usize = L::LEN;

    /// The (zero-sized) value of this name.
    pub const NEW: Self = Name(PhantomData);

    /// Calls `f` with each character, in order.
    pub fn for_each_char<F: FnMut(char)>(f: F) {
        L::for_each(f);
    }

    /// Whether this name spells `s`.
    pub fn matches(s: &str) -> bool {
        let mut chars = s.chars();
        let mut same = true;
        L::for_each(|c| same &= chars.next() == Some(c));
        same && chars.next().is_none()
    }
}

impl<L: ValueList<char>> fmt::Display for Name<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        L::for_each(|c| {
            if result.is_ok() {
                result = fmt::Write::write_char(&mut *f, c);
            }
        });
        result
    }
}

impl<L: ValueList<char>> fmt::Debug for Name<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name!({self})")
    }
}

#[cfg(test)]
mod tests {
    use crate::name;

    #[test]
    fn test_name_spelling() {
        assert_eq!(<name!(value_type)>::LEN, 10);
        assert!(<name!(value_type)>::matches("value_type"));
        assert!(!<name!(value_type)>::matches("value"));
        assert!(!<name!(value)>::matches("value_type"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_name_display() {
        use alloc::string::ToString;

        assert_eq!(<name!(len)>::NEW.to_string(), "len");
        assert_eq!(alloc::format!("{:?}", <name!(len)>::NEW), "name!(len)");
    }
}
