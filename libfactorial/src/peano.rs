//! Type-level naturals.
//!
//! `StaticFactorial` has one impl for `Zero` and one for `Succ<P>`. They cannot
//! overlap, so resolving `<T as StaticFactorial>::VALUE` walks `Succ` down to the
//! `Zero` impl and stops there.

use std::marker::PhantomData;

pub trait Nat {
  const N: u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

#[derive(Debug, Clone, Copy, Default)]
pub struct Succ<P>(PhantomData<P>);

impl Nat for Zero {
  const N: u32 = 0;
}

impl<P: Nat> Nat for Succ<P> {
  const N: u32 = P::N + 1;
}

pub trait StaticFactorial: Nat {
  const VALUE: u128;
}

impl StaticFactorial for Zero {
  const VALUE: u128 = 1;
}

impl<P: StaticFactorial> StaticFactorial for Succ<P> {
  const VALUE: u128 = match P::VALUE.checked_mul(Self::N as u128) {
    Some(value) => value,
    None => panic!("factorial overflows u128"),
  };
}

pub const fn value<T: StaticFactorial>() -> u128 {
  T::VALUE
}

pub type N0 = Zero;
pub type N1 = Succ<N0>;
pub type N2 = Succ<N1>;
pub type N3 = Succ<N2>;
pub type N4 = Succ<N3>;
pub type N5 = Succ<N4>;
pub type N6 = Succ<N5>;
pub type N7 = Succ<N6>;
pub type N8 = Succ<N7>;
pub type N9 = Succ<N8>;
pub type N10 = Succ<N9>;
