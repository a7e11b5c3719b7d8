mod implementation;
mod width;

use implementation::*;

use proc_macro::TokenStream;

/// `factorial!(n)` expands to the integer literal `n!`.
///
/// `n` is an integer literal, optionally negated and optionally suffixed. The
/// literal produced carries the same suffix (`u128` when none is given). A
/// negative `n`, or a result that does not fit the suffix type, is a build
/// error.
#[proc_macro]
pub fn factorial(input: TokenStream) -> TokenStream {
  expand_factorial(input.into()).into()
}
