use factorial::peano::{value, N5};
use factorial::{factorial, Factorial};

const CONST_GENERIC: u128 = Factorial::<10>::VALUE;
const TYPE_LEVEL: u128 = value::<N5>();
const LITERAL: u64 = factorial!(20u64);

fn main() {
  assert_eq!(CONST_GENERIC, 3_628_800);
  assert_eq!(TYPE_LEVEL, 120);
  assert_eq!(LITERAL, 2_432_902_008_176_640_000);
}
