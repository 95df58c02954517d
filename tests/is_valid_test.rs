//! Validity probes: `is_valid`, detectors and the two resolution forms.

use std::fmt::Display;

use tola_tmpl::probe::{Detector, Probe, is_valid};
use tola_tmpl::{detect, is_valid, probe, type_list};

// ============================================================================
// PROBES
// ============================================================================

probe!(Cloneable: Clone);
probe!(Printable: Display);
probe!(Numeric: Copy + PartialOrd + Default);

/// Hand-written probe: accepts types that can be built from a `&str`.
struct FromStrProbe;
impl<T: core::str::FromStr> Probe<T> for FromStrProbe {}

/// Accepts types with a field `a` (expressed through a trait the types opt into).
trait HasA {
    fn a(&self) -> u32;
}

struct WithA {
    a: u32,
}

impl HasA for WithA {
    fn a(&self) -> u32 {
        self.a
    }
}

struct WithB {
    #[allow(dead_code)]
    b: u32,
}

struct MemberA;
impl<T: HasA> Probe<T> for MemberA {}

// ============================================================================
// CONST FORM
// ============================================================================

const STRING_CLONES: bool = is_valid!(Cloneable, type_list![String]);
const STR_CLONES: bool = is_valid!(Cloneable, type_list![str]);

#[test]
fn test_const_form_in_items() {
    assert!(STRING_CLONES);
    assert!(!STR_CLONES);
}

#[test]
fn test_const_form_true_and_false() {
    assert!(is_valid!(Printable, type_list![u8]));
    assert!(!is_valid!(Printable, type_list![Vec<u8>]));
    assert!(is_valid!(Numeric, type_list![f32]));
    assert!(!is_valid!(Numeric, type_list![String]));
    assert!(is_valid!(FromStrProbe, type_list![std::net::IpAddr]));
    assert!(!is_valid!(FromStrProbe, type_list![&str]));
}

#[test]
fn test_member_probe() {
    assert!(is_valid!(MemberA, type_list![WithA]));
    assert!(!is_valid!(MemberA, type_list![WithB]));
    assert_eq!(WithA { a: 3 }.a(), 3);
}

#[test]
fn test_const_block() {
    const { assert!(is_valid!(Cloneable, type_list![Vec<u8>])) };
    const { assert!(!is_valid!(Cloneable, type_list![dyn Display])) };
}

// ============================================================================
// DETECTOR FORM
// ============================================================================

#[test]
fn test_detector_value() {
    let cloneable = is_valid(Cloneable);
    assert!(detect!(cloneable, type_list![u64]));
    assert!(!detect!(cloneable, type_list![str]));

    // Same detector, same answer
    assert_eq!(detect!(cloneable, type_list![u64]), detect!(cloneable, type_list![u64]));
}

#[test]
fn test_detector_from_const() {
    const PRINTABLE: Detector<Printable> = Detector::NEW;
    assert!(detect!(PRINTABLE, type_list![char]));
    assert!(!detect!(PRINTABLE, type_list![()]));
}

#[test]
fn test_forms_agree() {
    let member_a = is_valid(MemberA);
    assert_eq!(detect!(member_a, type_list![WithA]), is_valid!(MemberA, type_list![WithA]));
    assert_eq!(detect!(member_a, type_list![WithB]), is_valid!(MemberA, type_list![WithB]));
}

// ============================================================================
// LIMITATION: GENERIC CONTEXTS
// ============================================================================

// Inside a generic function the candidate is not concrete, so the fallback
// is taken even when the eventual type satisfies the probe.
fn cloneable_in_generic<T>() -> bool {
    is_valid!(Cloneable, type_list![T])
}

#[test]
fn test_generic_context_falls_back() {
    assert!(is_valid!(Cloneable, type_list![String]));
    assert!(!cloneable_in_generic::<String>());
}
