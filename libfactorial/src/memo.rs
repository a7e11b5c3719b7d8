use std::sync::RwLock;

use im::Vector;
use lazy_static::lazy_static;
use num_bigint::BigInt;

use super::{checked_factorial, Config, Error, Result, MAX_N};

const TABLE_LEN: usize = MAX_N as usize + 1;

/// Every factorial that fits in a `u128`, built at compile time.
const U128_TABLE: [u128; TABLE_LEN] = {
  let mut table = [0; TABLE_LEN];
  let mut n = 0;
  while n < TABLE_LEN {
    table[n] = match checked_factorial(n as u32) {
      Some(value) => value,
      None => panic!("MAX_N is out of range"),
    };
    n += 1;
  }
  table
};

/// A memo table of factorials for `n` known only at run time.
///
/// Entry `i` holds `i!`. Entries are appended in increasing order and never
/// change afterwards. The backing vector is persistent, so cloning a `Memo` is
/// a cheap snapshot.
#[derive(Debug, Clone)]
pub struct Memo {
  config: Config,
  table: Vector<BigInt>,
}

impl Default for Memo {
  fn default() -> Self {
    Self::with_config(Config::default())
  }
}

impl Memo {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: Config) -> Self {
    Self {
      config,
      table: Vector::new(),
    }
  }

  pub fn config(&self) -> Config {
    self.config
  }

  /// Number of entries computed so far.
  pub fn len(&self) -> usize {
    self.table.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }

  /// The stored value for `n`, without computing anything.
  pub fn cached(&self, n: i64) -> Option<&BigInt> {
    usize::try_from(n).ok().and_then(|i| self.table.get(i))
  }

  /// `n!`, computed on first request and read from the table afterwards.
  pub fn get(&mut self, n: i64) -> Result<BigInt> {
    let index = self.validate(n)?;
    if let Some(value) = self.table.get(index) {
      return Ok(value.clone());
    }
    Ok(self.extend_to(index))
  }

  pub fn snapshot(&self) -> Memo {
    self.clone()
  }

  fn validate(&self, n: i64) -> Result<usize> {
    if n < 0 {
      return Err(Error::UnsupportedDomain { n });
    }
    let limit = self.config.limit;
    if n as u64 > limit {
      return Err(Error::LimitExceeded { n, limit });
    }
    usize::try_from(n).map_err(|_| Error::LimitExceeded { n, limit })
  }

  fn extend_to(&mut self, index: usize) -> BigInt {
    log::debug!(
      "extending factorial memo from {} to {} entries",
      self.table.len(),
      index + 1
    );
    let start = self.table.len();
    let mut value = match self.table.last() {
      Some(prev) => prev.clone(),
      None => BigInt::from(1),
    };
    for n in start..=index {
      if n > 0 {
        value = value * BigInt::from(n);
      }
      log::trace!("{}! = {}", n, value);
      self.table.push_back(value.clone());
    }
    value
  }
}

lazy_static! {
  static ref GLOBAL: RwLock<Memo> = RwLock::new(Memo::with_config(Config::from_env()));
}

/// `n!` at arbitrary precision, memoized process-wide.
///
/// The global table is limited by [`Config::from_env`] and is never freed, so
/// after `factorial(n)` every entry from `0!` to `n!` stays resident. Use a
/// local [`Memo`] when that memory should be released.
pub fn factorial(n: i64) -> Result<BigInt> {
  if let Some(value) = GLOBAL.read().map_err(|_| Error::Poisoned)?.cached(n) {
    return Ok(value.clone());
  }
  GLOBAL.write().map_err(|_| Error::Poisoned)?.get(n)
}

/// `n!` as a `u128`, read from a table built at compile time.
pub fn factorial_u128(n: i64) -> Result<u128> {
  if n < 0 {
    return Err(Error::UnsupportedDomain { n });
  }
  usize::try_from(n)
    .ok()
    .and_then(|i| U128_TABLE.get(i).copied())
    .ok_or(Error::Overflow { n, width: 128 })
}
