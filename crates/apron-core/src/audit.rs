//! Compliance auditing: read-only policy evaluation of a flight.
//!
//! The auditor is stateless with respect to flights: it holds only its
//! own identity and sink, and every call produces a fresh
//! [`AuditReport`]. Both rules are always evaluated; a failing capacity
//! rule never hides the staffing result.

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{
  flight::Flight,
  ident::{IdSource, UniqueId},
  log::{EventSink, Loggable},
};

// ─── AuditReport ─────────────────────────────────────────────────────────────

/// The result of one audit. Immutable; produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
  pub flight_number: String,
  pub capacity_ok:   bool,
  pub crew_present:  bool,
  /// One human-readable finding per rule, in rule order (capacity,
  /// then staffing).
  pub findings:      Vec<String>,
}

impl AuditReport {
  pub fn compliant(&self) -> bool {
    self.capacity_ok && self.crew_present
  }
}

impl fmt::Display for AuditReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "flight {}: {} ({})",
      self.flight_number,
      if self.compliant() { "compliant" } else { "NOT compliant" },
      self.findings.join("; ")
    )
  }
}

// ─── ComplianceAuditor ───────────────────────────────────────────────────────

/// Evaluates flights against the two operating rules: combined
/// occupancy within aircraft capacity, and at least one crew member on
/// board.
#[derive(Debug, Clone)]
pub struct ComplianceAuditor {
  name: String,
  id:   UniqueId,
  sink: Arc<dyn EventSink>,
}

impl ComplianceAuditor {
  pub fn new(
    name: impl Into<String>,
    ids: &dyn IdSource,
    sink: Arc<dyn EventSink>,
  ) -> Self {
    Self { name: name.into(), id: ids.new_id(), sink }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn id(&self) -> UniqueId { self.id }

  /// Audit one flight. Never panics, never mutates the flight, never
  /// skips a rule: both findings are always present, whatever the
  /// flags. A zero-capacity or zero-crew flight simply reports `false`.
  pub fn audit_flight(&self, flight: &Flight) -> AuditReport {
    self.sink.record(&format!(
      "auditor {} auditing flight {}",
      self.name,
      flight.number()
    ));

    let occupancy = flight.occupancy();
    let capacity = flight.aircraft().capacity as usize;
    let crew_count = flight.crew().len();

    let capacity_ok = occupancy <= capacity;
    let crew_present = crew_count >= 1;

    let findings = vec![
      if capacity_ok {
        format!("occupancy {occupancy} within capacity {capacity}")
      } else {
        format!("occupancy {occupancy} exceeds capacity {capacity}")
      },
      if crew_present {
        format!("{crew_count} crew member(s) on board")
      } else {
        "no crew on board".to_string()
      },
    ];

    AuditReport {
      flight_number: flight.number().to_string(),
      capacity_ok,
      crew_present,
      findings,
    }
  }
}

impl Loggable for ComplianceAuditor {
  fn log_entry(&self) {
    self.sink.record(&format!("auditor {} logged in", self.name));
  }
}

impl fmt::Display for ComplianceAuditor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Auditor {} (ID: {})", self.name, self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    aircraft::Aircraft,
    crew::CrewMember,
    ident::SequentialIds,
    log::MemorySink,
    person::{Passenger, PersonRecord},
  };

  fn auditor(sink: Arc<MemorySink>, ids: &SequentialIds) -> ComplianceAuditor {
    ComplianceAuditor::new("Morgan", ids, sink)
  }

  #[test]
  fn both_rules_are_reported_independently() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let mut flight = Flight::new(
      "AP101",
      "GRU",
      "GIG",
      Arc::new(Aircraft::new("E195-E2", 2)),
      &ids,
    );
    flight.add_passenger(Passenger::new(PersonRecord::new("A", "1")));
    flight.add_passenger(Passenger::new(PersonRecord::new("B", "2")));

    let report = auditor(sink, &ids).audit_flight(&flight);
    assert!(report.capacity_ok);
    assert!(!report.crew_present);
    assert!(!report.compliant());
    // One finding per rule, even though only one rule failed.
    assert_eq!(report.findings.len(), 2);
  }

  #[test]
  fn fully_staffed_flight_is_compliant() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let mut flight = Flight::new(
      "AP102",
      "GIG",
      "BSB",
      Arc::new(Aircraft::new("E195-E2", 4)),
      &ids,
    );
    flight.add_crew(CrewMember::new(
      PersonRecord::new("Mara", "9"),
      "pilot",
      "b-9",
      &ids,
      sink.clone(),
    ));

    let report = auditor(sink, &ids).audit_flight(&flight);
    assert!(report.compliant());
  }

  #[test]
  fn audit_is_idempotent_on_an_unchanged_flight() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let flight = Flight::new(
      "AP103",
      "BSB",
      "REC",
      Arc::new(Aircraft::new("A320neo", 0)),
      &ids,
    );

    let a = auditor(sink, &ids);
    assert_eq!(a.audit_flight(&flight), a.audit_flight(&flight));
  }

  #[test]
  fn zero_capacity_never_panics() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let flight = Flight::new(
      "AP104",
      "REC",
      "FOR",
      Arc::new(Aircraft::new("A320neo", 0)),
      &ids,
    );

    let report = auditor(sink, &ids).audit_flight(&flight);
    // 0 <= 0: within capacity, but unstaffed.
    assert!(report.capacity_ok);
    assert!(!report.crew_present);
  }

  #[test]
  fn entry_and_audit_events_reach_the_sink() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let flight = Flight::new(
      "AP105",
      "FOR",
      "GRU",
      Arc::new(Aircraft::new("A320neo", 10)),
      &ids,
    );

    let a = auditor(sink.clone(), &ids);
    a.log_entry();
    a.audit_flight(&flight);
    assert_eq!(
      sink.events(),
      vec![
        "auditor Morgan logged in",
        "auditor Morgan auditing flight AP105"
      ]
    );
  }

  #[test]
  fn display_includes_name_and_id() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let a = auditor(sink, &ids);
    let shown = a.to_string();
    assert!(shown.starts_with("Auditor Morgan (ID: "));
  }
}
