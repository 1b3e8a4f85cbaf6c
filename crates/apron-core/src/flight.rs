//! Flights and the boarding roster.
//!
//! A flight owns its passenger and crew lists and admits into both
//! against the one shared aircraft capacity. Admission is a
//! check-then-append sequence; `&mut self` exclusivity keeps the
//! capacity check and the append atomic together, so no occupancy state
//! is ever observable mid-admission.

use std::sync::Arc;

use crate::{
  aircraft::Aircraft,
  crew::CrewMember,
  ident::{IdSource, UniqueId},
  person::Passenger,
};

// ─── Admission ───────────────────────────────────────────────────────────────

/// Outcome of a boarding attempt.
///
/// These are ordinary operating conditions, not errors. On
/// `AlreadyBoarded` and `CapacityReached` the roster is guaranteed
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
  Boarded,
  AlreadyBoarded,
  CapacityReached,
}

impl Admission {
  pub fn is_boarded(&self) -> bool { matches!(self, Self::Boarded) }
}

// ─── Flight ──────────────────────────────────────────────────────────────────

/// A scheduled trip: a route, one aircraft, and the boarded rosters.
///
/// The per-instance [`UniqueId`] is the registry dedupe key: a clone is
/// the same flight, a distinct flight sharing a number is not. The
/// aircraft is shared read-only.
#[derive(Debug, Clone)]
pub struct Flight {
  number:      String,
  origin:      String,
  destination: String,
  aircraft:    Arc<Aircraft>,
  passengers:  Vec<Passenger>,
  crew:        Vec<CrewMember>,
  id:          UniqueId,
}

impl Flight {
  pub fn new(
    number: impl Into<String>,
    origin: impl Into<String>,
    destination: impl Into<String>,
    aircraft: Arc<Aircraft>,
    ids: &dyn IdSource,
  ) -> Self {
    Self {
      number: number.into(),
      origin: origin.into(),
      destination: destination.into(),
      aircraft,
      passengers: Vec::new(),
      crew: Vec::new(),
      id: ids.new_id(),
    }
  }

  pub fn number(&self) -> &str { &self.number }

  pub fn origin(&self) -> &str { &self.origin }

  pub fn destination(&self) -> &str { &self.destination }

  pub fn aircraft(&self) -> &Aircraft { &self.aircraft }

  pub fn id(&self) -> UniqueId { self.id }

  /// Combined passenger and crew count.
  pub fn occupancy(&self) -> usize {
    self.passengers.len() + self.crew.len()
  }

  /// Board a passenger. Duplicate check first, then capacity; both
  /// rejections leave the roster untouched.
  pub fn add_passenger(&mut self, passenger: Passenger) -> Admission {
    if self
      .passengers
      .iter()
      .any(|p| p.identifier() == passenger.identifier())
    {
      return Admission::AlreadyBoarded;
    }
    if !self.has_room() {
      return Admission::CapacityReached;
    }
    self.passengers.push(passenger);
    Admission::Boarded
  }

  /// Board a crew member. Same admission algorithm as
  /// [`add_passenger`](Self::add_passenger), evaluated against the same
  /// shared capacity.
  pub fn add_crew(&mut self, member: CrewMember) -> Admission {
    if self
      .crew
      .iter()
      .any(|c| c.identifier() == member.identifier())
    {
      return Admission::AlreadyBoarded;
    }
    if !self.has_room() {
      return Admission::CapacityReached;
    }
    self.crew.push(member);
    Admission::Boarded
  }

  /// Boarded passengers in admission order.
  pub fn passengers(&self) -> &[Passenger] { &self.passengers }

  /// Boarded crew in admission order.
  pub fn crew(&self) -> &[CrewMember] { &self.crew }

  fn has_room(&self) -> bool {
    self.occupancy() < self.aircraft.capacity as usize
  }
}
