use std::env;

/// Environment variable read by [`Config::from_env`].
pub const LIMIT_VAR: &str = "FACTORIAL_MEMO_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Largest `n` a runtime memo table will compute. A table keeps every entry
  /// up to the largest `n` requested, so memory grows roughly with
  /// `limit² · log₂(limit) / 2` bits: about 0.6 MB at the default of 1 000 and
  /// about 70 MB at 10 000.
  pub limit: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self { limit: 1_000 }
  }
}

impl Config {
  pub fn from_env() -> Self {
    match env::var(LIMIT_VAR) {
      Ok(raw) => Self::parse_limit(&raw),
      Err(_) => Self::default(),
    }
  }

  fn parse_limit(raw: &str) -> Self {
    match raw.trim().parse() {
      Ok(limit) => Self { limit },
      Err(_) => {
        log::warn!(
          "ignoring {}={:?}, expected an unsigned integer",
          LIMIT_VAR,
          raw
        );
        Self::default()
      }
    }
  }
}
