//! Built-in landing rules.
//!
//! - **PRIORITY_FCFS**: priority tier, then arrival (default)
//! - **FCFS**: arrival only
//! - **SPT**: shortest landing first, then arrival
//!
//! # Key Convention
//! All rules return lower keys for flights that should land first.

use super::{ordering_key, LandingRule, OrderingKey};
use crate::models::Flight;

/// Priority scheduling with first-come-first-served tie-breaking.
///
/// Lower priority value lands first; equal priorities land in the order
/// the flights were issued.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFcfs;

impl LandingRule for PriorityFcfs {
    fn name(&self) -> &'static str {
        "PRIORITY_FCFS"
    }

    fn key(&self, flight: &Flight) -> OrderingKey {
        ordering_key(flight)
    }

    fn description(&self) -> &'static str {
        "Priority, then First Come First Served"
    }
}

/// First Come First Served.
///
/// Ignores priority entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl LandingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, flight: &Flight) -> OrderingKey {
        OrderingKey::new(0, flight.arrival_sequence())
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Processing Time.
///
/// Shortest landing first. Minimizes mean completion time on a single
/// runway.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl LandingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn key(&self, flight: &Flight) -> OrderingKey {
        OrderingKey::new(flight.service_duration(), flight.arrival_sequence())
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightIssuer;

    fn sample() -> Vec<Flight> {
        let mut issuer = FlightIssuer::new();
        vec![
            issuer.create_flight(1, 10, "Emergency").unwrap(),
            issuer.create_flight(5, 5, "Cargo").unwrap(),
            issuer.create_flight(1, 3, "Emergency").unwrap(),
        ]
    }

    fn sorted_ids(rule: &dyn LandingRule, flights: &[Flight]) -> Vec<u64> {
        let mut sorted: Vec<&Flight> = flights.iter().collect();
        sorted.sort_by_key(|f| rule.key(f));
        sorted.iter().map(|f| f.id().0).collect()
    }

    #[test]
    fn test_priority_fcfs_ordering() {
        assert_eq!(sorted_ids(&PriorityFcfs, &sample()), vec![1, 3, 2]);
    }

    #[test]
    fn test_fcfs_ignores_priority() {
        assert_eq!(sorted_ids(&Fcfs, &sample()), vec![1, 2, 3]);
    }

    #[test]
    fn test_spt_ordering() {
        assert_eq!(sorted_ids(&Spt, &sample()), vec![3, 2, 1]);
    }

    #[test]
    fn test_keys_are_distinct_for_equal_primary() {
        let flights = sample();
        let a = PriorityFcfs.key(&flights[0]);
        let b = PriorityFcfs.key(&flights[2]);
        assert_eq!(a.primary, b.primary);
        assert!(a < b);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(PriorityFcfs.name(), "PRIORITY_FCFS");
        assert_eq!(Fcfs.description(), "First Come First Served");
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }
}
