//! Identity capability: injectable unique-id generation.
//!
//! Entities that carry a unique identity (crew members, flights, the
//! auditor) draw it from an [`IdSource`] passed to their constructor.
//! Production code wires in [`UuidIds`]; tests use [`SequentialIds`] so
//! ids are stable across runs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── UniqueId ────────────────────────────────────────────────────────────────

/// An opaque unique identifier, assigned once at creation and never
/// reused.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UniqueId(Uuid);

impl UniqueId {
  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl std::fmt::Display for UniqueId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

// ─── Sources ─────────────────────────────────────────────────────────────────

/// Capability: produce a fresh, globally unique identifier.
pub trait IdSource: std::fmt::Debug {
  fn new_id(&self) -> UniqueId;
}

/// Production source, random UUID v4.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
  fn new_id(&self) -> UniqueId { UniqueId(Uuid::new_v4()) }
}

/// Deterministic source for tests: ids 1, 2, 3, … encoded as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIds {
  next: AtomicU64,
}

impl IdSource for SequentialIds {
  fn new_id(&self) -> UniqueId {
    let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
    UniqueId(Uuid::from_u128(u128::from(n)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sequential_ids_are_distinct_and_stable() {
    let ids = SequentialIds::default();
    let a = ids.new_id();
    let b = ids.new_id();
    assert_ne!(a, b);
    assert_eq!(a, UniqueId(Uuid::from_u128(1)));
    assert_eq!(b, UniqueId(Uuid::from_u128(2)));
  }

  #[test]
  fn uuid_ids_are_distinct() {
    let ids = UuidIds;
    assert_ne!(ids.new_id(), ids.new_id());
  }
}
