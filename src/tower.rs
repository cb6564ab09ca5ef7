//! Caller-owned runway session.
//!
//! [`ControlTower`] bundles the flight issuer, pending queue, runway cursor,
//! and landing history of one simulation run. Nothing is process-global:
//! two towers never share state.
//!
//! Every mutator takes `&mut self`, so extraction and cursor advancement
//! always happen inside one exclusive borrow. Callers that share a tower
//! across threads wrap the whole tower in a single `Mutex`.

use std::sync::Arc;

use crate::config::RunwayConfig;
use crate::error::Result;
use crate::models::{
    ArrivalClock, ExecutionHistory, ExecutionRecord, Flight, FlightId, FlightIssuer, Minutes,
    PlaneType,
};
use crate::queue::FlightQueue;
use crate::scheduler::{LandingKpi, LandingScheduler, RunwayCursor};

/// One runway simulation session.
///
/// # Example
/// ```
/// use runway_schedule::models::PlaneType;
/// use runway_schedule::tower::ControlTower;
///
/// let mut tower = ControlTower::new();
/// tower.add_flight(PlaneType::Cargo, 5).unwrap();
/// tower.add_flight(PlaneType::Emergency, 10).unwrap();
///
/// let landed = tower.schedule_all();
/// assert_eq!(landed[0].category_label, "Emergency");
/// assert_eq!(tower.history().len(), 2);
/// assert!(tower.queue_snapshot().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ControlTower {
    issuer: FlightIssuer,
    queue: FlightQueue,
    cursor: RunwayCursor,
    history: ExecutionHistory,
    scheduler: LandingScheduler,
}

impl ControlTower {
    /// Creates a session with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&RunwayConfig::default())
    }

    pub fn from_config(config: &RunwayConfig) -> Self {
        tracing::debug!(epoch = config.epoch, rule = ?config.rule, "control tower opened");
        Self {
            issuer: FlightIssuer::starting_at(config.first_flight_id),
            queue: FlightQueue::with_shared_rule(config.rule.build()),
            cursor: RunwayCursor::new(config.epoch),
            history: ExecutionHistory::new(),
            scheduler: LandingScheduler::new(),
        }
    }

    /// Issues a new, unqueued flight.
    pub fn create_flight(
        &mut self,
        priority: i32,
        service_duration: Minutes,
        category_label: impl Into<String>,
    ) -> Result<Flight> {
        self.issuer
            .create_flight(priority, service_duration, category_label)
    }

    /// The tower's arrival clock. Issuers outside the tower that submit
    /// flights here must be built on it.
    pub fn arrival_clock(&self) -> Arc<ArrivalClock> {
        self.issuer.clock()
    }

    /// Queues a flight.
    pub fn submit(&mut self, flight: Flight) -> Result<FlightId> {
        let id = flight.id();
        self.queue.insert(flight)?;
        Ok(id)
    }

    /// Issues and queues a flight for a plane type.
    pub fn add_flight(
        &mut self,
        plane_type: PlaneType,
        service_duration: Minutes,
    ) -> Result<FlightId> {
        let flight = self.issuer.create_flight_for(plane_type, service_duration)?;
        let id = self.submit(flight)?;
        tracing::info!(flight_id = %id, plane_type = %plane_type, "flight added to the queue");
        Ok(id)
    }

    /// Lands every pending flight. Returns the records added by this call.
    pub fn schedule_all(&mut self) -> &[ExecutionRecord] {
        if self.queue.is_empty() {
            tracing::warn!("no flights to schedule");
        }
        self.scheduler
            .drain_and_schedule(&mut self.queue, &mut self.cursor, &mut self.history)
    }

    /// Lands only the next pending flight.
    pub fn schedule_next(&mut self) -> Result<Option<ExecutionRecord>> {
        self.scheduler
            .schedule_next(&mut self.queue, &mut self.cursor, &mut self.history)
    }

    /// Landing history so far.
    pub fn history(&self) -> &ExecutionHistory {
        &self.history
    }

    /// Pending flights in the order they would land.
    pub fn queue_snapshot(&self) -> Vec<&Flight> {
        self.queue.sorted_snapshot()
    }

    pub fn queue(&self) -> &FlightQueue {
        &self.queue
    }

    pub fn cursor(&self) -> RunwayCursor {
        self.cursor
    }

    /// Metrics over the landing history.
    pub fn kpi(&self) -> LandingKpi {
        LandingKpi::calculate(&self.history, self.cursor.epoch())
    }
}

impl Default for ControlTower {
    fn default() -> Self {
        Self::new()
    }
}
