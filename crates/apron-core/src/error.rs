//! Error types for `apron-core`.
//!
//! Only validation failures are errors. Admission conflicts and lookup
//! misses are ordinary outcomes ([`crate::flight::Admission`],
//! [`crate::airline::Registration`], `Option`); they never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("name too short (minimum 3 characters): {name:?}")]
  NameTooShort { name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
