extern crate factorial;

use factorial::peano::*;
use factorial::Factorial;

type N20 = Succ<Succ<Succ<Succ<Succ<Succ<Succ<Succ<Succ<Succ<N10>>>>>>>>>>;

#[test]
fn zero_resolves_to_the_zero_impl() {
  assert_eq!(<Zero as Nat>::N, 0);
  assert_eq!(<Zero as StaticFactorial>::VALUE, 1);
}

#[test]
fn concrete_values() {
  assert_eq!(value::<N0>(), 1);
  assert_eq!(value::<N1>(), 1);
  assert_eq!(value::<N5>(), 120);
  assert_eq!(value::<N10>(), 3_628_800);
}

#[test]
fn succ_is_n_times_the_predecessor() {
  assert_eq!(value::<N4>(), <N4 as Nat>::N as u128 * value::<N3>());
  assert_eq!(value::<N9>(), 9 * value::<N8>());
}

#[test]
fn agrees_with_the_const_generic_form() {
  assert_eq!(value::<N6>(), Factorial::<6>::VALUE);
  assert_eq!(<N20 as Nat>::N, 20);
  assert_eq!(value::<N20>(), Factorial::<20>::VALUE);
}
