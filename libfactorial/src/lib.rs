//! Factorials computed while the program is built.
//!
//! Three forms share one contract, `value(0) = 1` and `value(n) = n * value(n - 1)`:
//! the const-generic [`Factorial`], the type-level naturals in [`peano`], and the
//! `factorial!` literal macro. [`factorial`] and [`Memo`] cover `n` only known at run
//! time.

pub use factorial_macros::*;
pub use num_bigint::BigInt;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod fixed;
pub use fixed::*;

mod memo;
pub use memo::*;

pub mod peano;
