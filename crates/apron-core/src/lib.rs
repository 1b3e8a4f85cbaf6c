//! Core types for the apron airline-operations model.
//!
//! Flights admit passengers and crew against one shared aircraft
//! capacity, airlines group flights under a validated operator name, and
//! the compliance auditor evaluates a flight read-only against the two
//! operating rules. Everything is synchronous and in-memory; callers own
//! all state (see `apron-cli` for a driver).
//!
//! Identity generation and event logging are injected capabilities
//! ([`ident::IdSource`], [`log::EventSink`]) rather than globals, which
//! keeps the core deterministic under test.

pub mod aircraft;
pub mod airline;
pub mod audit;
pub mod crew;
pub mod error;
pub mod flight;
pub mod ident;
pub mod log;
pub mod person;


pub use error::{Error, Result};
