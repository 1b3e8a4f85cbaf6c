//! TOML scenario files and the built-in sample fleet.
//!
//! A scenario is pure data: airlines, each with flights, passengers
//! (with bags), and crew. [`Scenario::build`] turns it into live domain
//! structures, boarding every listed occupant and logging each
//! admission outcome.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use apron_core::{
  aircraft::Aircraft,
  airline::Airline,
  crew::CrewMember,
  flight::Flight,
  ident::IdSource,
  log::{EventSink, Loggable as _},
  person::{Baggage, Passenger, PersonRecord},
};
use serde::Deserialize;

// ─── File format ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Scenario {
  pub airlines: Vec<AirlineEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirlineEntry {
  pub name:    String,
  #[serde(default)]
  pub flights: Vec<FlightEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FlightEntry {
  pub number:      String,
  pub origin:      String,
  pub destination: String,
  pub aircraft:    AircraftEntry,
  #[serde(default)]
  pub passengers:  Vec<PassengerEntry>,
  #[serde(default)]
  pub crew:        Vec<CrewEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AircraftEntry {
  pub model:    String,
  pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct PassengerEntry {
  pub name:       String,
  pub identifier: String,
  #[serde(default)]
  pub bags:       Vec<BagEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BagEntry {
  pub description: String,
  pub weight_kg:   f64,
}

#[derive(Debug, Deserialize)]
pub struct CrewEntry {
  pub name:       String,
  pub identifier: String,
  pub role:       String,
  pub badge:      String,
}

// ─── Building ────────────────────────────────────────────────────────────────

impl Scenario {
  /// Materialise the scenario: construct airlines and flights, then
  /// board every listed occupant. Admission outcomes are logged, not
  /// errors; an over-full scenario still builds.
  pub fn build(
    &self,
    ids: &dyn IdSource,
    sink: Arc<dyn EventSink>,
  ) -> Result<Vec<Airline>> {
    let mut airlines = Vec::new();

    for airline_entry in &self.airlines {
      let mut airline = Airline::new(airline_entry.name.clone())
        .with_context(|| format!("invalid airline name {:?}", airline_entry.name))?;

      for fe in &airline_entry.flights {
        let aircraft = Arc::new(Aircraft::new(
          fe.aircraft.model.clone(),
          fe.aircraft.capacity,
        ));
        let mut flight = Flight::new(
          fe.number.clone(),
          fe.origin.clone(),
          fe.destination.clone(),
          aircraft,
          ids,
        );

        // Crew boards before passengers.
        for ce in &fe.crew {
          let member = CrewMember::new(
            PersonRecord::new(&ce.name, &ce.identifier),
            &ce.role,
            &ce.badge,
            ids,
            sink.clone(),
          );
          member.log_entry();
          let outcome = flight.add_crew(member);
          tracing::info!(
            flight = %fe.number,
            crew = %ce.name,
            ?outcome,
            "crew boarding"
          );
        }

        for pe in &fe.passengers {
          let mut passenger =
            Passenger::new(PersonRecord::new(&pe.name, &pe.identifier));
          for be in &pe.bags {
            let checked =
              passenger.add_bag(Baggage::new(&be.description, be.weight_kg));
            tracing::debug!(bag = %be.description, ?checked, "bag check");
          }
          let outcome = flight.add_passenger(passenger);
          tracing::info!(
            flight = %fe.number,
            passenger = %pe.name,
            ?outcome,
            "passenger boarding"
          );
        }

        airline.register_flight(flight);
      }

      airlines.push(airline);
    }

    Ok(airlines)
  }

  /// The built-in demo fleet: two airlines, two flights each. One
  /// flight is deliberately unstaffed and one is over-booked so the
  /// audits have something to say.
  pub fn sample() -> Self {
    Self {
      airlines: vec![
        AirlineEntry {
          name:    "Altaris".into(),
          flights: vec![
            FlightEntry {
              number:      "AP101".into(),
              origin:      "GRU".into(),
              destination: "GIG".into(),
              aircraft:    AircraftEntry {
                model:    "E195-E2".into(),
                capacity: 3,
              },
              passengers:  vec![
                PassengerEntry {
                  name:       "Alice Monteiro".into(),
                  identifier: "111.222.333-44".into(),
                  bags:       vec![
                    BagEntry {
                      description: "black suitcase".into(),
                      weight_kg:   18.0,
                    },
                    BagEntry {
                      description: "carry-on".into(),
                      weight_kg:   7.5,
                    },
                  ],
                },
                PassengerEntry {
                  name:       "Bruno Paz".into(),
                  identifier: "222.333.444-55".into(),
                  bags:       vec![],
                },
              ],
              crew:        vec![CrewEntry {
                name:       "Mara Lins".into(),
                identifier: "555.666.777-88".into(),
                role:       "first officer".into(),
                badge:      "2024-017".into(),
              }],
            },
            // Unstaffed: the audit reports crew_present = false.
            FlightEntry {
              number:      "AP102".into(),
              origin:      "GIG".into(),
              destination: "BSB".into(),
              aircraft:    AircraftEntry {
                model:    "E195-E2".into(),
                capacity: 2,
              },
              passengers:  vec![
                PassengerEntry {
                  name:       "Carla Dias".into(),
                  identifier: "333.444.555-66".into(),
                  bags:       vec![],
                },
                PassengerEntry {
                  name:       "Davi Rocha".into(),
                  identifier: "444.555.666-77".into(),
                  bags:       vec![],
                },
              ],
              crew:        vec![],
            },
          ],
        },
        AirlineEntry {
          name:    "Meridian Air".into(),
          flights: vec![
            // Over-booked: the third passenger is turned away at the
            // gate, which shows up in the boarding log.
            FlightEntry {
              number:      "MA710".into(),
              origin:      "BSB".into(),
              destination: "REC".into(),
              aircraft:    AircraftEntry {
                model:    "A320neo".into(),
                capacity: 3,
              },
              passengers:  vec![
                PassengerEntry {
                  name:       "Edu Farias".into(),
                  identifier: "555.111.222-33".into(),
                  bags:       vec![BagEntry {
                    description: "surfboard case".into(),
                    weight_kg:   12.0,
                  }],
                },
                PassengerEntry {
                  name:       "Fabiana Luz".into(),
                  identifier: "666.222.333-44".into(),
                  bags:       vec![],
                },
                PassengerEntry {
                  name:       "Gil Nunes".into(),
                  identifier: "777.333.444-55".into(),
                  bags:       vec![],
                },
              ],
              crew:        vec![CrewEntry {
                name:       "Heitor Sales".into(),
                identifier: "888.444.555-66".into(),
                role:       "captain".into(),
                badge:      "2019-003".into(),
              }],
            },
            FlightEntry {
              number:      "MA711".into(),
              origin:      "REC".into(),
              destination: "FOR".into(),
              aircraft:    AircraftEntry {
                model:    "A320neo".into(),
                capacity: 4,
              },
              passengers:  vec![PassengerEntry {
                name:       "Iara Teles".into(),
                identifier: "999.555.666-77".into(),
                bags:       vec![],
              }],
              crew:        vec![
                CrewEntry {
                  name:       "Jonas Prado".into(),
                  identifier: "101.666.777-88".into(),
                  role:       "captain".into(),
                  badge:      "2017-011".into(),
                },
                CrewEntry {
                  name:       "Keila Buarque".into(),
                  identifier: "121.777.888-99".into(),
                  role:       "attendant".into(),
                  badge:      "2022-040".into(),
                },
              ],
            },
          ],
        },
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use apron_core::{ident::SequentialIds, log::MemorySink};

  use super::*;

  #[test]
  fn sample_fleet_builds_and_boards() {
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());

    let airlines = Scenario::sample().build(&ids, sink).unwrap();
    assert_eq!(airlines.len(), 2);
    assert_eq!(airlines[0].name(), "Altaris");
    assert_eq!(airlines[0].flights().len(), 2);

    // The over-booked MA710 turned its third passenger away.
    let ma710 = airlines[1].find_flight("MA710").unwrap();
    assert_eq!(ma710.occupancy(), 3);
    assert_eq!(ma710.passengers().len(), 2);
    assert_eq!(ma710.crew().len(), 1);
  }

  #[test]
  fn scenario_parses_from_toml() {
    let raw = r#"
      [[airlines]]
      name = "Altaris"

      [[airlines.flights]]
      number      = "AP900"
      origin      = "GRU"
      destination = "SSA"

      [airlines.flights.aircraft]
      model    = "ATR 72"
      capacity = 2

      [[airlines.flights.passengers]]
      name       = "Alice"
      identifier = "111"

      [[airlines.flights.crew]]
      name       = "Mara"
      identifier = "555"
      role       = "captain"
      badge      = "2020-001"
    "#;

    let scenario: Scenario = toml::from_str(raw).unwrap();
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    let airlines = scenario.build(&ids, sink.clone()).unwrap();

    let flight = airlines[0].find_flight("AP900").unwrap();
    assert_eq!(flight.occupancy(), 2);
    // Crew login events flowed through the injected sink.
    assert_eq!(sink.events(), vec!["crew member Mara (captain) logged in"]);
  }

  #[test]
  fn short_airline_name_fails_the_build() {
    let scenario = Scenario {
      airlines: vec![AirlineEntry { name: "AB".into(), flights: vec![] }],
    };
    let ids = SequentialIds::default();
    let sink = Arc::new(MemorySink::default());
    assert!(scenario.build(&ids, sink).is_err());
  }
}
