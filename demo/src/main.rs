//! Prints factorials resolved at build time next to ones computed at run time.
//! Set `RUST_LOG=debug` to watch the runtime memo table grow.

use factorial::peano::{self, N5};
use factorial::{factorial, Factorial, MAX_N};

const FIVE: u128 = Factorial::<5>::VALUE;
const TEN: u32 = factorial!(10u32);

pub fn main() {
  env_logger::init();

  println!("5!  = {} (const generic)", FIVE);
  println!("5!  = {} (type level)", peano::value::<N5>());
  println!("10! = {} (literal)", TEN);

  for n in [20, MAX_N as i64, 50, -3] {
    match factorial(n) {
      Ok(value) => println!("{}! = {}", n, value),
      Err(err) => log::error!("{}", err),
    }
  }
}
