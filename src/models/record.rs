//! Execution history (landing timeline) model.
//!
//! Every landed flight leaves one [`ExecutionRecord`]. The
//! [`ExecutionHistory`] keeps them in landing order and is append-only:
//! records are never edited or removed.

use serde::{Deserialize, Serialize};

use super::{format_clock, Flight, FlightId, LandingSlot, Minutes, SimTime};

/// Snapshot of a landed flight's runway interval `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Landed flight.
    pub flight_id: FlightId,
    /// Priority tier the flight landed under.
    pub priority: i32,
    /// Touchdown start (minutes since epoch).
    pub start_time: SimTime,
    /// Runway release (minutes since epoch).
    pub end_time: SimTime,
    /// Plane type label, carried for display.
    pub category_label: String,
}

impl ExecutionRecord {
    pub(crate) fn landed(flight: &Flight, slot: LandingSlot) -> Self {
        Self {
            flight_id: flight.id(),
            priority: flight.priority(),
            start_time: slot.start,
            end_time: slot.end,
            category_label: flight.category_label().to_string(),
        }
    }

    /// Runway occupancy (end - start) in minutes.
    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end_time - self.start_time
    }

    /// Start as `HH:MM`.
    pub fn start_clock(&self) -> String {
        format_clock(self.start_time)
    }

    /// End as `HH:MM`.
    pub fn end_clock(&self) -> String {
        format_clock(self.end_time)
    }
}

/// Append-only landing timeline, in the order flights were scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionHistory {
    records: Vec<ExecutionRecord>,
}

impl ExecutionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: ExecutionRecord) {
        self.records.push(record);
    }

    /// All records in landing order.
    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently landed flight.
    pub fn last(&self) -> Option<&ExecutionRecord> {
        self.records.last()
    }

    /// Latest runway release time, or `None` if nothing has landed.
    pub fn makespan(&self) -> Option<SimTime> {
        self.records.iter().map(|r| r.end_time).max()
    }

    /// Finds the record for a given flight.
    pub fn record_for_flight(&self, flight_id: FlightId) -> Option<&ExecutionRecord> {
        self.records.iter().find(|r| r.flight_id == flight_id)
    }

    /// Returns all records for a given priority tier, in landing order.
    pub fn records_for_priority(&self, priority: i32) -> Vec<&ExecutionRecord> {
        self.records
            .iter()
            .filter(|r| r.priority == priority)
            .collect()
    }

    /// Flight ids in landing order.
    pub fn landing_order(&self) -> Vec<FlightId> {
        self.records.iter().map(|r| r.flight_id).collect()
    }

    /// Total runway occupancy across all records (minutes).
    pub fn busy_minutes(&self) -> Minutes {
        self.records.iter().map(ExecutionRecord::duration).sum()
    }
}

impl<'a> IntoIterator for &'a ExecutionHistory {
    type Item = &'a ExecutionRecord;
    type IntoIter = std::slice::Iter<'a, ExecutionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
