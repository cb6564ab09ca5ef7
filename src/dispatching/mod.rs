//! Landing order policies.
//!
//! A [`LandingRule`] maps a flight to an [`OrderingKey`]; the queue always
//! releases the flight with the smallest key. Rules are plain values,
//! independent of `Flight`.
//!
//! # Usage
//!
//! ```
//! use runway_schedule::dispatching::{rules, LandingRule};
//! use runway_schedule::models::FlightIssuer;
//!
//! let mut issuer = FlightIssuer::new();
//! let cargo = issuer.create_flight(5, 20, "Cargo").unwrap();
//! let medical = issuer.create_flight(2, 10, "Medical").unwrap();
//!
//! let rule = rules::PriorityFcfs;
//! assert!(rule.key(&medical) < rule.key(&cargo));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{ArrivalSequence, Flight};

/// Composite sort key. Lower keys land first.
///
/// Every key ends with the arrival sequence, so two distinct flights never
/// compare equal and ties fall back to first-come-first-served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderingKey {
    /// Rule-specific primary criterion.
    pub primary: i64,
    /// Arrival tie-break.
    pub arrival: ArrivalSequence,
}

impl OrderingKey {
    pub fn new(primary: i64, arrival: ArrivalSequence) -> Self {
        Self { primary, arrival }
    }
}

/// A policy deciding which pending flight lands next.
///
/// # Key Convention
/// **Lower key = lands earlier.** Implementations must keep the flight's
/// arrival sequence as the final component of the key.
pub trait LandingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY_FCFS").
    fn name(&self) -> &'static str;

    /// Computes the ordering key of a flight. Must be pure.
    fn key(&self, flight: &Flight) -> OrderingKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The default `(priority, arrival_sequence)` key.
pub fn ordering_key(flight: &Flight) -> OrderingKey {
    OrderingKey::new(i64::from(flight.priority()), flight.arrival_sequence())
}
