//! The airline registry: a named operator and its flights.

use std::fmt;

use serde::Serialize;

use crate::{
  error::{Error, Result},
  flight::Flight,
};

/// Minimum length of an operator name, in characters.
const MIN_NAME_CHARS: usize = 3;

// ─── Registration ────────────────────────────────────────────────────────────

/// Outcome of [`Airline::register_flight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
  Registered,
  /// The same flight (by identity, not by number) is already
  /// registered; the collection is unchanged.
  AlreadyRegistered,
}

// ─── FlightSummary ───────────────────────────────────────────────────────────

/// One row of [`Airline::list_flights`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightSummary {
  pub number:      String,
  pub origin:      String,
  pub destination: String,
  pub aircraft:    String,
  pub occupancy:   usize,
  pub capacity:    u32,
}

impl fmt::Display for FlightSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} -> {} [{}] {}/{}",
      self.number,
      self.origin,
      self.destination,
      self.aircraft,
      self.occupancy,
      self.capacity
    )
  }
}

// ─── Airline ─────────────────────────────────────────────────────────────────

/// A named operator owning its flights for their lifetime.
///
/// Flight numbers are not required to be unique within an operator.
/// Registration dedupes by flight identity only, and lookups return the
/// first match in registration order.
#[derive(Debug, Clone)]
pub struct Airline {
  name:    String,
  flights: Vec<Flight>,
}

impl Airline {
  /// Fails with [`Error::NameTooShort`] for names under 3 characters;
  /// nothing is constructed on failure.
  pub fn new(name: impl Into<String>) -> Result<Self> {
    let name = name.into();
    validate_name(&name)?;
    Ok(Self { name, flights: Vec::new() })
  }

  pub fn name(&self) -> &str { &self.name }

  /// Rename the operator. On rejection the old name is kept.
  pub fn rename(&mut self, new_name: impl Into<String>) -> Result<()> {
    let new_name = new_name.into();
    validate_name(&new_name)?;
    self.name = new_name;
    Ok(())
  }

  pub fn register_flight(&mut self, flight: Flight) -> Registration {
    if self.flights.iter().any(|f| f.id() == flight.id()) {
      return Registration::AlreadyRegistered;
    }
    self.flights.push(flight);
    Registration::Registered
  }

  /// First flight with this number, in registration order. `None` on a
  /// miss; an unknown number is not an error.
  pub fn find_flight(&self, number: &str) -> Option<&Flight> {
    self.flights.iter().find(|f| f.number() == number)
  }

  /// Mutable lookup, so boarding can continue after registration.
  pub fn find_flight_mut(&mut self, number: &str) -> Option<&mut Flight> {
    self.flights.iter_mut().find(|f| f.number() == number)
  }

  /// Registered flights in registration order.
  pub fn flights(&self) -> &[Flight] { &self.flights }

  /// Lazy listing of flight summaries in registration order.
  /// Restartable: every call yields a fresh iterator over current state.
  pub fn list_flights(&self) -> impl Iterator<Item = FlightSummary> + '_ {
    self.flights.iter().map(|f| FlightSummary {
      number:      f.number().to_string(),
      origin:      f.origin().to_string(),
      destination: f.destination().to_string(),
      aircraft:    f.aircraft().model.clone(),
      occupancy:   f.occupancy(),
      capacity:    f.aircraft().capacity,
    })
  }
}

fn validate_name(name: &str) -> Result<()> {
  if name.chars().count() < MIN_NAME_CHARS {
    return Err(Error::NameTooShort { name: name.to_string() });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::{
    aircraft::Aircraft,
    ident::SequentialIds,
  };

  fn flight(number: &str, ids: &SequentialIds) -> Flight {
    Flight::new(
      number,
      "GRU",
      "SSA",
      Arc::new(Aircraft::new("A320neo", 180)),
      ids,
    )
  }

  #[test]
  fn name_must_have_three_characters() {
    assert!(matches!(
      Airline::new("AB"),
      Err(Error::NameTooShort { .. })
    ));
    assert!(Airline::new("ABC").is_ok());
  }

  #[test]
  fn rejected_rename_keeps_the_old_name() {
    let mut airline = Airline::new("Altaris").unwrap();
    assert!(airline.rename("XY").is_err());
    assert_eq!(airline.name(), "Altaris");

    airline.rename("Meridian").unwrap();
    assert_eq!(airline.name(), "Meridian");
  }

  #[test]
  fn registering_the_same_flight_twice_is_a_no_op() {
    let ids = SequentialIds::default();
    let mut airline = Airline::new("Altaris").unwrap();
    let f = flight("AP200", &ids);

    assert_eq!(airline.register_flight(f.clone()), Registration::Registered);
    assert_eq!(
      airline.register_flight(f),
      Registration::AlreadyRegistered
    );
    assert_eq!(airline.list_flights().count(), 1);
  }

  #[test]
  fn duplicate_numbers_are_distinct_flights() {
    let ids = SequentialIds::default();
    let mut airline = Airline::new("Altaris").unwrap();

    assert_eq!(
      airline.register_flight(flight("AP200", &ids)),
      Registration::Registered
    );
    assert_eq!(
      airline.register_flight(flight("AP200", &ids)),
      Registration::Registered
    );
    assert_eq!(airline.flights().len(), 2);
  }

  #[test]
  fn find_flight_misses_return_none() {
    let ids = SequentialIds::default();
    let mut airline = Airline::new("Altaris").unwrap();
    assert!(airline.find_flight("AP999").is_none());

    airline.register_flight(flight("AP200", &ids));
    assert!(airline.find_flight("AP999").is_none());
    assert_eq!(
      airline.find_flight("AP200").map(Flight::number),
      Some("AP200")
    );
  }

  #[test]
  fn listing_is_restartable() {
    let ids = SequentialIds::default();
    let mut airline = Airline::new("Altaris").unwrap();
    airline.register_flight(flight("AP200", &ids));
    airline.register_flight(flight("AP201", &ids));

    let first: Vec<_> = airline.list_flights().collect();
    let second: Vec<_> = airline.list_flights().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].number, "AP200");
  }

  #[test]
  fn summary_display_is_one_line() {
    let ids = SequentialIds::default();
    let mut airline = Airline::new("Altaris").unwrap();
    airline.register_flight(flight("AP200", &ids));

    let row = airline.list_flights().next().unwrap();
    assert_eq!(row.to_string(), "AP200 GRU -> SSA [A320neo] 0/180");
  }
}
