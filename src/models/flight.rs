//! Flight (landing request) model.
//!
//! A flight is a single request for exclusive use of the runway. Its
//! ordering key `(priority, arrival_sequence)` is fixed when it is issued
//! and never recomputed.
//!
//! # Lifecycle
//! `Created → Queued → Scheduled`. The landing slot is written exactly once,
//! when the scheduler extracts the flight.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Minutes, SimTime};
use crate::error::{InvalidInput, Result};
use crate::validation;

/// Unique flight identifier, increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub u64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic arrival counter used only for first-come-first-served ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrivalSequence(pub u64);

impl fmt::Display for ArrivalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of arrival sequences.
///
/// Issuers that share one clock produce sequences that order consistently
/// with creation order across all of them.
#[derive(Debug, Default)]
pub struct ArrivalClock {
    next: AtomicU64,
}

impl ArrivalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next sequence. Never repeats.
    pub fn tick(&self) -> ArrivalSequence {
        ArrivalSequence(self.next.fetch_add(1, AtomicOrdering::SeqCst))
    }

    /// Number of sequences handed out so far.
    pub fn ticks(&self) -> u64 {
        self.next.load(AtomicOrdering::SeqCst)
    }
}

/// The half-open runway interval `[start, end)` held by a landed flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingSlot {
    pub start: SimTime,
    pub end: SimTime,
}

impl LandingSlot {
    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }
}

/// Plane categories with their conventional priority tiers.
///
/// Lower tier lands first. These are a convenience for callers; the
/// scheduler accepts any positive priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneType {
    Emergency,
    Medical,
    Military,
    Commercial,
    Cargo,
}

impl PlaneType {
    /// All plane types, most urgent first.
    pub const ALL: [PlaneType; 5] = [
        PlaneType::Emergency,
        PlaneType::Medical,
        PlaneType::Military,
        PlaneType::Commercial,
        PlaneType::Cargo,
    ];

    /// Priority tier (1 = highest).
    pub fn priority(self) -> i32 {
        match self {
            PlaneType::Emergency => 1,
            PlaneType::Medical => 2,
            PlaneType::Military => 3,
            PlaneType::Commercial => 4,
            PlaneType::Cargo => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaneType::Emergency => "Emergency",
            PlaneType::Medical => "Medical",
            PlaneType::Military => "Military",
            PlaneType::Commercial => "Commercial",
            PlaneType::Cargo => "Cargo",
        }
    }

    /// Looks up the plane type for a priority tier.
    pub fn from_priority(priority: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.priority() == priority)
    }
}

impl fmt::Display for PlaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Priority {})", self.label(), self.priority())
    }
}

/// A request to land on the runway.
///
/// Fields are read-only once issued. Flights are created through
/// [`FlightIssuer`], which assigns the id and arrival sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    id: FlightId,
    priority: i32,
    service_duration: Minutes,
    category_label: String,
    arrival_sequence: ArrivalSequence,
    ready_time: Option<SimTime>,
    slot: Option<LandingSlot>,
}

impl Flight {
    /// Builds a flight without validation, for exercising rejection paths.
    #[cfg(test)]
    pub(crate) fn unchecked(
        id: u64,
        priority: i32,
        service_duration: Minutes,
        sequence: u64,
    ) -> Self {
        Self {
            id: FlightId(id),
            priority,
            service_duration,
            category_label: String::new(),
            arrival_sequence: ArrivalSequence(sequence),
            ready_time: None,
            slot: None,
        }
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    /// Priority tier (lower = lands earlier).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Runway occupancy in minutes.
    pub fn service_duration(&self) -> Minutes {
        self.service_duration
    }

    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    pub fn arrival_sequence(&self) -> ArrivalSequence {
        self.arrival_sequence
    }

    /// Earliest time this flight may touch down. `None` = immediately.
    pub fn ready_time(&self) -> Option<SimTime> {
        self.ready_time
    }

    /// Sets the earliest landing time. Only meaningful before queueing.
    pub fn with_ready_time(mut self, ready_time: SimTime) -> Self {
        self.ready_time = Some(ready_time);
        self
    }

    pub fn slot(&self) -> Option<LandingSlot> {
        self.slot
    }

    pub fn start_time(&self) -> Option<SimTime> {
        self.slot.map(|s| s.start)
    }

    pub fn end_time(&self) -> Option<SimTime> {
        self.slot.map(|s| s.end)
    }

    pub fn is_scheduled(&self) -> bool {
        self.slot.is_some()
    }

    /// The slot this flight would hold if it started at `start`.
    ///
    /// # Errors
    /// `AlreadyScheduled` if a slot is already written, `SlotOverflow` if
    /// the end time does not fit on the clock.
    pub fn slot_starting_at(&self, start: SimTime) -> Result<LandingSlot> {
        validation::ensure_unscheduled(self)?;
        let end = start
            .checked_add(self.service_duration)
            .ok_or(InvalidInput::SlotOverflow(self.id))?;
        Ok(LandingSlot { start, end })
    }

    /// Writes the landing slot starting at `start`. A slot is written once.
    pub(crate) fn assign_slot(&mut self, start: SimTime) -> Result<LandingSlot> {
        let slot = self.slot_starting_at(start)?;
        self.slot = Some(slot);
        Ok(slot)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight(ID: {}, Type: {}, Priority: {}, Landing Time: {} minutes)",
            self.id, self.category_label, self.priority, self.service_duration
        )
    }
}

/// Issues flights with monotonically increasing ids and arrival sequences.
///
/// Owned by the caller; there is no process-wide counter. Issuers feeding
/// the same queue must share an [`ArrivalClock`] (see
/// [`with_clock`](Self::with_clock)); the queue rejects repeated arrival
/// sequences. Clones share the clock. Rejected inputs do not consume an id.
#[derive(Debug, Clone)]
pub struct FlightIssuer {
    next_id: u64,
    issued: u64,
    clock: Arc<ArrivalClock>,
}

impl FlightIssuer {
    /// Creates an issuer with its own clock whose first flight gets id 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an issuer with its own clock whose first flight gets `first_id`.
    pub fn starting_at(first_id: u64) -> Self {
        Self::with_clock(first_id, Arc::new(ArrivalClock::new()))
    }

    /// Creates an issuer drawing arrival sequences from a shared clock.
    pub fn with_clock(first_id: u64, clock: Arc<ArrivalClock>) -> Self {
        Self {
            next_id: first_id,
            issued: 0,
            clock,
        }
    }

    /// The clock this issuer draws arrival sequences from.
    pub fn clock(&self) -> Arc<ArrivalClock> {
        Arc::clone(&self.clock)
    }

    /// Creates an unscheduled flight.
    ///
    /// # Errors
    /// `InvalidFlightInput` if `priority` or `service_duration` is not positive.
    pub fn create_flight(
        &mut self,
        priority: i32,
        service_duration: Minutes,
        category_label: impl Into<String>,
    ) -> Result<Flight> {
        validation::check_fields(priority, service_duration)?;

        let flight = Flight {
            id: FlightId(self.next_id),
            priority,
            service_duration,
            category_label: category_label.into(),
            arrival_sequence: self.clock.tick(),
            ready_time: None,
            slot: None,
        };
        self.next_id += 1;
        self.issued += 1;

        tracing::debug!(flight_id = %flight.id, priority, service_duration, "flight created");
        Ok(flight)
    }

    /// Creates a flight whose priority and label come from the plane type.
    pub fn create_flight_for(
        &mut self,
        plane_type: PlaneType,
        service_duration: Minutes,
    ) -> Result<Flight> {
        self.create_flight(plane_type.priority(), service_duration, plane_type.label())
    }

    /// Number of flights issued so far by this issuer.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl Default for FlightIssuer {
    fn default() -> Self {
        Self::new()
    }
}
