//! Aircraft: a descriptive label and a fixed seating capacity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static aircraft data. Immutable; capacity bounds the combined
/// passenger+crew occupancy of the flight it is assigned to.
///
/// Zero capacity is representable; the auditor must cope with it, so
/// construction does not reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
  pub model:    String,
  pub capacity: u32,
}

impl Aircraft {
  pub fn new(model: impl Into<String>, capacity: u32) -> Self {
    Self { model: model.into(), capacity }
  }
}

impl fmt::Display for Aircraft {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} (capacity {})", self.model, self.capacity)
  }
}
