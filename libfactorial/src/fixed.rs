/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_N: u32 = 34;

/// `n!`, or `None` once the product no longer fits in a `u128`.
///
/// Usable in const contexts. The `n == 0` guard is checked before the recursive
/// branch, so `0` always resolves to `1` without consulting `n - 1`. Anything
/// above `MAX_N` is rejected before recursing, which bounds the depth.
pub const fn checked_factorial(n: u32) -> Option<u128> {
  if n == 0 {
    return Some(1);
  }
  if n > MAX_N {
    return None;
  }
  match checked_factorial(n - 1) {
    Some(prev) => prev.checked_mul(n as u128),
    None => None,
  }
}

/// The factorial of `N`, fixed when the program is built.
///
/// `N` is unsigned, so `Factorial<-1>` does not type-check. Reading `VALUE` for
/// `N > MAX_N` aborts const evaluation and the build fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Factorial<const N: u32>;

impl<const N: u32> Factorial<N> {
  pub const VALUE: u128 = match checked_factorial(N) {
    Some(value) => value,
    None => panic!("factorial overflows u128"),
  };

  pub const fn n() -> u32 {
    N
  }

  pub const fn value() -> u128 {
    Self::VALUE
  }
}
