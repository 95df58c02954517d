//! Value-List Engine: primitive and user kinds, slicing, concatenation and
//! materialization.

use tola_tmpl::prelude::*;
use tola_tmpl::value::{ConstBool, ConstI32, ConstU8};
use tola_tmpl::{assert_type_eq, const_value, type_list, value_list};

type Tens = value_list![i32; 10, 20, 30, 40, 50];

// ============================================================================
// SLICE
// ============================================================================

#[test]
fn test_slice_tail() {
    type Tail = Slice<Tens, 2, 5>;
    assert_eq!(Tail::to_vec(), vec![30, 40, 50]);
    assert_type_eq!(Tail, value_list![i32; 30, 40, 50]);
}

#[test]
fn test_slice_empty_window_keeps_kind() {
    assert_type_eq!(Slice<Tens, 5, 5>, Values<i32, TNil>);
    assert!(<Slice<Tens, 5, 5>>::to_vec().is_empty());
    assert_eq!(<Slice<Tens, 4, 2>>::LEN, 0);
}

#[test]
fn test_slice_past_end_is_clamped() {
    assert_eq!(<Slice<Tens, 3, 40>>::to_vec(), vec![40, 50]);
    assert_eq!(<Slice<Tens, 0, 5>>::to_vec(), Tens::to_vec());
    assert_eq!(<Slice<Tens, 1, 500>>::to_vec(), vec![20, 30, 40, 50]);
}

#[test]
fn test_slice_negative_bounds() {
    assert_eq!(<Slice<Tens, -3, 2>>::to_vec(), vec![10, 20]);
    assert_type_eq!(Slice<Tens, 0, -1>, Values<i32, TNil>);
}

// ============================================================================
// CONCAT
// ============================================================================

#[test]
fn test_concat_values() {
    type Joined = Concatenated<value_list![u8; 1, 2], value_list![u8; 3]>;
    assert_eq!(Joined::to_vec(), vec![1, 2, 3]);
    assert_type_eq!(Concatenated<Values<u8, TNil>, value_list![u8; 7]>, value_list![u8; 7]);
    assert_type_eq!(Concatenated<value_list![u8; 7], Values<u8, TNil>>, value_list![u8; 7]);
}

#[test]
fn test_bitor_values() {
    let joined = <value_list![bool; true]>::NEW | <value_list![bool; false, true]>::NEW;
    let _: Values<bool, type_list![ConstBool<true>, ConstBool<false>, ConstBool<true>]> = joined;
}

// ============================================================================
// ACCESS
// ============================================================================

#[test]
fn test_value_access() {
    assert_eq!(Tens::LEN, 5);
    assert_eq!(Tens::get(0), Some(10));
    assert_eq!(Tens::get(4), Some(50));
    assert_eq!(Tens::get(5), None);
    assert!(Tens::contains(30));
    assert!(!Tens::contains(35));
    assert_eq!(<Nth<Tens, 1> as ConstValue>::VALUE, 20);
}

#[test]
fn test_for_each_in_order() {
    let mut sum = 0;
    let mut seen = Vec::new();
    Tens::for_each(|v| {
        sum += v;
        seen.push(v);
    });
    assert_eq!(sum, 150);
    assert_eq!(seen, [10, 20, 30, 40, 50]);
}

#[test]
fn test_debug_prints_values() {
    assert_eq!(format!("{:?}", Tens::NEW), "[10, 20, 30, 40, 50]");
    assert_eq!(format!("{:?}", <value_list![u8;]>::NEW), "[]");
}

#[test]
fn test_negative_and_wide_kinds() {
    type Mixed = value_list![i64; -3, 0, i64::MAX];
    assert_eq!(Mixed::to_vec(), vec![-3, 0, i64::MAX]);
    type Letters = value_list![char; 'x', 'y'];
    assert_eq!(Letters::to_vec(), vec!['x', 'y']);
    assert_type_eq!(value_list![u8; 5], Values<u8, type_list![ConstU8<5>]>);
    assert_type_eq!(value_list![i32; 1], Values<i32, type_list![ConstI32<1>]>);
}

// ============================================================================
// USER KINDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Suit {
    Hearts,
    Spades,
    Clubs,
}

const_value! {
    HeartsV: Suit = Suit::Hearts;
    SpadesV: Suit = Suit::Spades;
    ClubsV: Suit = Suit::Clubs;
}

type Hand = value_list![Suit => SpadesV, HeartsV, ClubsV, HeartsV];

#[test]
fn test_user_kind_list() {
    assert_eq!(
        Hand::to_vec(),
        vec![Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Hearts]
    );
    assert_eq!(<Slice<Hand, 1, 3>>::to_vec(), vec![Suit::Hearts, Suit::Clubs]);
    assert!(!<Slice<Hand, 0, 1>>::contains(Suit::Clubs));
}

mod palette {
    use tola_tmpl::const_value;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Color {
        Red,
        Green,
    }

    const_value! {
        pub RedValue: Color = Color::Red;
        pub GreenValue: Color = Color::Green;
    }
}

#[test]
fn test_public_markers_from_another_module() {
    use palette::{Color, GreenValue, RedValue};

    assert_eq!(GreenValue::VALUE, Color::Green);
    type Flag = value_list![Color => RedValue, GreenValue];
    assert_eq!(Flag::to_vec(), vec![Color::Red, Color::Green]);
}

// ============================================================================
// INDEX SEQUENCE
// ============================================================================

#[test]
fn test_index_sequence() {
    use tola_tmpl::list::IndicesOf;
    use tola_tmpl::value::IndexSequence;

    assert_eq!(IndexSequence::<5>::to_vec(), vec![0, 1, 2, 3, 4]);
    assert!(IndexSequence::<0>::to_vec().is_empty());
    assert_eq!(<Values<usize, IndicesOf<Hand>>>::to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(<Slice<IndexSequence<8>, 6, 10>>::to_vec(), vec![6, 7]);
}
