use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The factorial chain of a negative integer never reaches `0`.
  #[error("unsupported domain: factorial of negative integer {n}")]
  UnsupportedDomain { n: i64 },

  #[error("factorial of {n} overflows a {width}-bit integer")]
  Overflow { n: i64, width: u32 },

  #[error("factorial of {n} exceeds the memo limit of {limit}")]
  LimitExceeded { n: i64, limit: u64 },

  #[error("memo table lock was poisoned")]
  Poisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
