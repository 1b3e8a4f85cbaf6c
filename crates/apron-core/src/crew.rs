//! Crew members: identity, role, and login events.
//!
//! Capabilities are plain fields, not a type hierarchy: a crew member
//! *has* a generated [`UniqueId`] and *has* an event sink.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{
  ident::{IdSource, UniqueId},
  log::{EventSink, Loggable},
  person::PersonRecord,
};

/// A crew member assigned to flights.
#[derive(Debug, Clone)]
pub struct CrewMember {
  record:     PersonRecord,
  role:       String,
  badge:      String,
  id:         UniqueId,
  created_at: DateTime<Utc>,
  sink:       Arc<dyn EventSink>,
}

impl CrewMember {
  /// The id is drawn from `ids` exactly once, here; it is never reused.
  pub fn new(
    record: PersonRecord,
    role: impl Into<String>,
    badge: impl Into<String>,
    ids: &dyn IdSource,
    sink: Arc<dyn EventSink>,
  ) -> Self {
    Self {
      record,
      role: role.into(),
      badge: badge.into(),
      id: ids.new_id(),
      created_at: Utc::now(),
      sink,
    }
  }

  pub fn record(&self) -> &PersonRecord { &self.record }

  pub fn name(&self) -> &str { &self.record.name }

  pub fn identifier(&self) -> &str { &self.record.identifier }

  pub fn role(&self) -> &str { &self.role }

  pub fn badge(&self) -> &str { &self.badge }

  pub fn id(&self) -> UniqueId { self.id }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

impl Loggable for CrewMember {
  fn log_entry(&self) {
    self.sink.record(&format!(
      "crew member {} ({}) logged in",
      self.record.name, self.role
    ));
  }
}

impl fmt::Display for CrewMember {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} - {} (badge {}, id {})",
      self.record, self.role, self.badge, self.id
    )
  }
}
