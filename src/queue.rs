//! Pending-flight queue.
//!
//! A binary min-heap over the active [`LandingRule`]'s ordering key
//! (by default `(priority, arrival_sequence)`).
//!
//! # Complexity
//! `insert` and `extract_min` are O(log n); `peek_all` is O(n).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use crate::dispatching::rules::PriorityFcfs;
use crate::dispatching::{LandingRule, OrderingKey};
use crate::error::{Result, ScheduleError};
use crate::models::{ArrivalSequence, Flight, FlightId};
use crate::validation;

/// Heap entry. Ordered by key alone; the key is computed once on insertion.
#[derive(Debug, Clone)]
struct QueuedFlight {
    key: OrderingKey,
    flight: Flight,
}

impl PartialEq for QueuedFlight {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for QueuedFlight {}

impl Ord for QueuedFlight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for QueuedFlight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered collection of flights waiting for the runway.
///
/// Every id and arrival sequence ever inserted is remembered, so a flight
/// cannot be queued twice even after it has been extracted, and no two
/// members ever share an ordering key.
///
/// # Example
/// ```
/// use runway_schedule::models::FlightIssuer;
/// use runway_schedule::queue::FlightQueue;
///
/// let mut issuer = FlightIssuer::new();
/// let mut queue = FlightQueue::new();
/// queue.insert(issuer.create_flight(4, 10, "Commercial").unwrap()).unwrap();
/// queue.insert(issuer.create_flight(1, 5, "Emergency").unwrap()).unwrap();
///
/// assert_eq!(queue.extract_min().unwrap().priority(), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FlightQueue {
    heap: BinaryHeap<Reverse<QueuedFlight>>,
    rule: Arc<dyn LandingRule>,
    known_ids: HashSet<FlightId>,
    known_arrivals: HashSet<ArrivalSequence>,
}

impl FlightQueue {
    /// Creates an empty queue ordered by priority, then arrival.
    pub fn new() -> Self {
        Self::with_shared_rule(Arc::new(PriorityFcfs))
    }

    /// Creates an empty queue ordered by `rule`.
    pub fn with_rule<R: LandingRule + 'static>(rule: R) -> Self {
        Self::with_shared_rule(Arc::new(rule))
    }

    pub fn with_shared_rule(rule: Arc<dyn LandingRule>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            rule,
            known_ids: HashSet::new(),
            known_arrivals: HashSet::new(),
        }
    }

    /// Name of the active landing rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Adds a flight.
    ///
    /// # Errors
    /// `InvalidFlightInput` for a duplicate id or arrival sequence, a
    /// non-positive duration or priority, or an already scheduled flight.
    /// The queue is unchanged.
    pub fn insert(&mut self, flight: Flight) -> Result<()> {
        let checked = validation::validate_flight(&flight, &self.known_ids, &self.known_arrivals);
        if let Err(e) = checked {
            tracing::warn!(flight_id = %flight.id(), error = %e, "flight rejected");
            return Err(e);
        }

        let key = self.rule.key(&flight);
        self.known_ids.insert(flight.id());
        self.known_arrivals.insert(flight.arrival_sequence());
        tracing::debug!(
            flight_id = %flight.id(),
            priority = flight.priority(),
            pending = self.heap.len() + 1,
            "flight queued"
        );
        self.heap.push(Reverse(QueuedFlight { key, flight }));
        Ok(())
    }

    /// Removes and returns the flight with the smallest key.
    ///
    /// # Errors
    /// `EmptyQueue` if nothing is pending. Check [`is_empty`](Self::is_empty)
    /// first, or use the scheduler's drain which never triggers this.
    pub fn extract_min(&mut self) -> Result<Flight> {
        let Reverse(entry) = self.heap.pop().ok_or(ScheduleError::EmptyQueue)?;
        tracing::debug!(
            flight_id = %entry.flight.id(),
            remaining = self.heap.len(),
            "flight extracted"
        );
        Ok(entry.flight)
    }

    /// The flight that would be extracted next.
    pub fn peek(&self) -> Option<&Flight> {
        self.heap.peek().map(|Reverse(entry)| &entry.flight)
    }

    /// Read-only snapshot of the pending flights, in no particular order.
    pub fn peek_all(&self) -> Vec<&Flight> {
        self.heap.iter().map(|Reverse(entry)| &entry.flight).collect()
    }

    /// Pending flights in the order they would land.
    pub fn sorted_snapshot(&self) -> Vec<&Flight> {
        let mut entries: Vec<&QueuedFlight> =
            self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort_by_key(|e| e.key);
        entries.into_iter().map(|e| &e.flight).collect()
    }

    /// Whether a flight with this id was ever inserted.
    pub fn has_seen(&self, flight_id: FlightId) -> bool {
        self.known_ids.contains(&flight_id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for FlightQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::Spt;
    use crate::error::InvalidInput;
    use crate::models::FlightIssuer;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn ids(flights: &[&Flight]) -> Vec<u64> {
        flights.iter().map(|f| f.id().0).collect()
    }

    #[test]
    fn test_extract_priority_then_arrival() {
        let mut issuer = FlightIssuer::new();
        let mut queue = FlightQueue::new();
        queue.insert(issuer.create_flight(1, 10, "Emergency").unwrap()).unwrap();
        queue.insert(issuer.create_flight(5, 5, "Cargo").unwrap()).unwrap();
        queue.insert(issuer.create_flight(1, 3, "Emergency").unwrap()).unwrap();

        let order: Vec<u64> = std::iter::from_fn(|| queue.extract_min().ok())
            .map(|f| f.id().0)
            .collect();
        assert_eq!(order, vec![1, 3, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extract_empty() {
        let mut queue = FlightQueue::new();
        assert_eq!(queue.extract_min(), Err(ScheduleError::EmptyQueue));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut issuer = FlightIssuer::new();
        let mut queue = FlightQueue::new();
        let f = issuer.create_flight(2, 10, "Medical").unwrap();
        queue.insert(f.clone()).unwrap();

        let err = queue.insert(f.clone()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidFlightInput(InvalidInput::DuplicateId(f.id()))
        );
        assert_eq!(queue.len(), 1);

        // Still rejected after the original has left the queue.
        queue.extract_min().unwrap();
        assert!(queue.insert(f).is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_insert_rejects_invalid_fields() {
        let mut queue = FlightQueue::new();
        let err = queue.insert(Flight::unchecked(1, 1, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidFlightInput(InvalidInput::NonPositiveDuration(0))
        );
        assert!(queue.insert(Flight::unchecked(2, -3, 10, 1)).is_err());
        assert!(queue.is_empty());
        assert!(!queue.has_seen(FlightId(1)));
    }

    #[test]
    fn test_insert_rejects_scheduled_flight() {
        let mut queue = FlightQueue::new();
        let mut f = Flight::unchecked(1, 1, 10, 0);
        f.assign_slot(0).unwrap();
        let err = queue.insert(f).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidFlightInput(InvalidInput::AlreadyScheduled(FlightId(1)))
        );
    }

    #[test]
    fn test_insert_rejects_repeated_arrival_sequence() {
        let mut queue = FlightQueue::new();
        let mut west = FlightIssuer::starting_at(100);
        for _ in 0..3 {
            queue.insert(west.create_flight(1, 10, "West").unwrap()).unwrap();
        }

        // A separate issuer restarts its arrival count at zero.
        let mut east = FlightIssuer::new();
        let late = east.create_flight(1, 10, "East").unwrap();
        let err = queue.insert(late).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidFlightInput(InvalidInput::DuplicateArrival(
                FlightId(1),
                ArrivalSequence(0)
            ))
        );
        assert_eq!(queue.len(), 3);
        assert!(!queue.has_seen(FlightId(1)));

        let order: Vec<u64> = std::iter::from_fn(|| queue.extract_min().ok())
            .map(|f| f.id().0)
            .collect();
        assert_eq!(order, vec![100, 101, 102]);
    }

    #[test]
    fn test_members_never_share_a_key() {
        let mut queue = FlightQueue::new();
        queue.insert(Flight::unchecked(1, 2, 10, 5)).unwrap();
        assert!(queue.insert(Flight::unchecked(2, 2, 10, 5)).is_err());
        assert!(queue.insert(Flight::unchecked(3, 2, 30, 5)).is_err());
        queue.insert(Flight::unchecked(4, 2, 10, 6)).unwrap();

        let keys: Vec<OrderingKey> = queue
            .peek_all()
            .iter()
            .map(|f| crate::dispatching::ordering_key(f))
            .collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn test_shared_clock_extracts_in_creation_order() {
        let mut west = FlightIssuer::starting_at(100);
        let mut east = FlightIssuer::with_clock(1, west.clock());
        let mut queue = FlightQueue::new();

        let created = vec![
            west.create_flight(1, 10, "West").unwrap(),
            west.create_flight(1, 10, "West").unwrap(),
            east.create_flight(1, 10, "East").unwrap(),
            west.create_flight(1, 10, "West").unwrap(),
            east.create_flight(1, 10, "East").unwrap(),
        ];
        // Inserted out of creation order; arrival sequence still decides.
        for idx in [4, 2, 0, 3, 1] {
            queue.insert(created[idx].clone()).unwrap();
        }

        let order: Vec<u64> = std::iter::from_fn(|| queue.extract_min().ok())
            .map(|f| f.id().0)
            .collect();
        assert_eq!(order, vec![100, 101, 1, 102, 2]);
    }

    #[test]
    fn test_peek_all_does_not_mutate() {
        let mut issuer = FlightIssuer::new();
        let mut queue = FlightQueue::new();
        for p in [3, 1, 2] {
            queue.insert(issuer.create_flight(p, 10, "x").unwrap()).unwrap();
        }

        let mut snapshot = ids(&queue.peek_all());
        snapshot.sort();
        assert_eq!(snapshot, vec![1, 2, 3]);
        assert_eq!(queue.len(), 3);
        assert_eq!(ids(&queue.sorted_snapshot()), vec![2, 3, 1]);
        assert_eq!(queue.peek().unwrap().id(), FlightId(2));
        assert_eq!(queue.extract_min().unwrap().id(), FlightId(2));
    }

    #[test]
    fn test_custom_rule() {
        let mut issuer = FlightIssuer::new();
        let mut queue = FlightQueue::with_rule(Spt);
        queue.insert(issuer.create_flight(1, 30, "Emergency").unwrap()).unwrap();
        queue.insert(issuer.create_flight(5, 5, "Cargo").unwrap()).unwrap();

        assert_eq!(queue.rule_name(), "SPT");
        assert_eq!(queue.extract_min().unwrap().id(), FlightId(2));
    }

    #[test]
    fn test_random_insertions_extract_in_key_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut issuer = FlightIssuer::new();
        let mut queue = FlightQueue::new();

        for _ in 0..200 {
            let priority = rng.random_range(1..=5);
            let duration = rng.random_range(1..=60);
            queue.insert(issuer.create_flight(priority, duration, "x").unwrap()).unwrap();
        }

        let mut previous: Option<Flight> = None;
        while let Ok(f) = queue.extract_min() {
            if let Some(prev) = &previous {
                assert!(prev.priority() <= f.priority());
                if prev.priority() == f.priority() {
                    assert!(prev.arrival_sequence() < f.arrival_sequence());
                }
            }
            previous = Some(f);
        }
    }
}
