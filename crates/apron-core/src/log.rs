//! Logging capabilities: event sinks and the `Loggable` contract.
//!
//! The core never depends on where events end up. Production wires in
//! [`TracingSink`]; tests hand out a shared [`MemorySink`] and assert on
//! its contents.

use std::sync::Mutex;

/// Capability: accept one formatted event line.
///
/// `Debug + Send + Sync` so holders stay derivable and an
/// `Arc<dyn EventSink>` can be shared freely.
pub trait EventSink: std::fmt::Debug + Send + Sync {
  fn record(&self, event: &str);
}

/// Forwards events to the `tracing` pipeline at INFO.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
  fn record(&self, event: &str) {
    tracing::info!(target: "apron::event", "{event}");
  }
}

/// Accumulates events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
  events: Mutex<Vec<String>>,
}

impl MemorySink {
  /// Snapshot of everything recorded so far.
  pub fn events(&self) -> Vec<String> {
    self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
  }
}

impl EventSink for MemorySink {
  fn record(&self, event: &str) {
    self
      .events
      .lock()
      .unwrap_or_else(|e| e.into_inner())
      .push(event.to_string());
  }
}

/// Capability: an entity that can announce its own login/entry event.
///
/// Implementors write through their own sink; there is no shared base
/// behavior beyond this contract.
pub trait Loggable {
  fn log_entry(&self);
}
