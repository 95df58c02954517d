//! Member detection walkthrough.
//!
//! Run with `cargo run --example member_detection`.

use tola_tmpl::prelude::*;
use tola_tmpl::probe::{MemberKind, Signature};
use tola_tmpl::{
    has_member, has_nonstatic_member_function, has_static_member_function, has_typedef, name,
    probe, type_list, value_list,
};

#[derive(Members)]
#[member(typedef(value_type = f32))]
struct Samples {
    pub rate: u32,
    data: Vec<f32>,
}

#[members]
impl Samples {
    pub const MAX_RATE: u32 = 192_000;

    pub fn new(rate: u32) -> Self {
        Samples { rate, data: Vec::new() }
    }

    pub fn push(&mut self, sample: f32) {
        self.data.push(sample);
    }

    pub fn peak(&self) -> Option<&f32> {
        self.data.iter().max_by(|a, b| a.total_cmp(b))
    }
}

#[derive(Members)]
struct Label {
    pub text: String,
}

probe!(Summable: core::iter::Sum + Copy);

fn kind_of<T: Member<N>, N>() -> MemberKind {
    <T::Ptr as Signature>::KIND
}

fn main() {
    let mut samples = Samples::new(48_000);
    samples.push(0.25);
    samples.push(0.75);
    println!("rate {} peak {:?}", samples.rate, samples.peak());

    println!("-- has_member");
    println!("Samples.rate     {}", has_member!(Samples, rate));
    println!("Label.rate       {}", has_member!(Label, rate));
    println!("Label.text       {}", has_member!(Label, text));
    println!("Samples.data     {} (private)", has_member!(Samples, data));

    println!("-- member functions");
    println!("Samples::push    instance={} static={}",
        has_nonstatic_member_function!(Samples, push),
        has_static_member_function!(Samples, push));
    println!("Samples::new     instance={} static={}",
        has_nonstatic_member_function!(Samples, new),
        has_static_member_function!(Samples, new));
    println!("Samples.rate     instance={} static={}",
        has_nonstatic_member_function!(Samples, rate),
        has_static_member_function!(Samples, rate));

    println!("-- kinds");
    println!("MAX_RATE         {:?}", kind_of::<Samples, name!(MAX_RATE)>());
    println!("peak             {:?}", kind_of::<Samples, name!(peak)>());

    println!("-- typedefs");
    println!("Samples          {}", has_typedef!(Samples, value_type));
    println!("Label            {}", has_typedef!(Label, value_type));

    println!("-- custom probe");
    let summable = is_valid(Summable);
    println!("f32 summable     {}", tola_tmpl::detect!(summable, type_list![f32]));
    println!("Label summable   {}", tola_tmpl::detect!(summable, type_list![Label]));

    println!("-- lists");
    type Rates = value_list![u32; 8_000, 16_000, 44_100, 48_000, 96_000];
    println!("common rates     {:?}", <Slice<Rates, 2, 4>>::to_vec());
    println!("label text       {}", Label { text: "ok".into() }.text);
    println!("max rate         {}", Samples::MAX_RATE);
}
