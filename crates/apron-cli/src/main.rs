//! `apron`: demo driver for the apron airline-operations core.
//!
//! Builds a sample fleet (or loads one from a TOML scenario file),
//! boards passengers and crew, prints each airline's flight listing,
//! and runs a compliance audit over every flight.
//!
//! # Usage
//!
//! ```
//! apron
//! apron --scenario fleet.toml
//! apron --json
//! ```

mod scenario;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context as _, Result};
use apron_core::{
  audit::ComplianceAuditor,
  ident::UuidIds,
  log::{Loggable as _, TracingSink},
};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "apron", about = "Airline roster and compliance demo")]
struct Args {
  /// Path to a TOML scenario file; without it the built-in sample
  /// fleet is used.
  #[arg(short, long, value_name = "FILE")]
  scenario: Option<PathBuf>,

  /// Print audit reports as JSON instead of prose.
  #[arg(long)]
  json: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let scenario = match &args.scenario {
    Some(path) => {
      let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
      toml::from_str(&raw).context("parsing scenario file")?
    }
    None => Scenario::sample(),
  };

  let ids = UuidIds;
  let sink = Arc::new(TracingSink);

  let airlines = scenario.build(&ids, sink.clone())?;

  let auditor = ComplianceAuditor::new("Morgan", &ids, sink);
  auditor.log_entry();

  let mut reports = Vec::new();
  for airline in &airlines {
    println!("{}:", airline.name());
    for summary in airline.list_flights() {
      println!("  {summary}");
    }
    for flight in airline.flights() {
      for passenger in flight.passengers() {
        println!(
          "    {} on {} with {} bag(s), {:.1} kg",
          passenger.record(),
          flight.number(),
          passenger.bags().len(),
          passenger.total_bag_weight()
        );
      }
      reports.push(auditor.audit_flight(flight));
    }
  }

  if args.json {
    let rendered = serde_json::to_string_pretty(&reports)
      .context("serialising audit reports")?;
    println!("{rendered}");
  } else {
    for report in &reports {
      println!("{report}");
    }
  }

  Ok(())
}
