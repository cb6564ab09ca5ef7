//! Single-runway landing scheduler.
//!
//! # Algorithm
//!
//! 1. Peek the pending flight with the smallest ordering key.
//! 2. Start it at `max(cursor, ready_time)`; end it `service_duration` later.
//!    If the end time does not fit on the clock, stop with the flight still
//!    queued.
//! 3. Extract it, append an execution record, move the cursor to the end time.
//! 4. Repeat until the queue is empty.
//!
//! Service is sequential and non-preemptive, so the only scheduling freedom
//! is extraction order, which belongs entirely to the queue's landing rule.
//! This scheduler only does the time bookkeeping.
//!
//! # Complexity
//! O(n log n) for n pending flights.

use crate::error::{Result, ScheduleError};
use crate::models::{ExecutionHistory, ExecutionRecord};
use crate::queue::FlightQueue;

use super::RunwayCursor;

/// Drains a [`FlightQueue`] onto the runway timeline.
///
/// Holds no state of its own: the queue, cursor, and history are owned by
/// the caller and passed in on every call.
///
/// # Example
///
/// ```
/// use runway_schedule::models::{ExecutionHistory, FlightIssuer};
/// use runway_schedule::queue::FlightQueue;
/// use runway_schedule::scheduler::{LandingScheduler, RunwayCursor};
///
/// let mut issuer = FlightIssuer::new();
/// let mut queue = FlightQueue::new();
/// queue.insert(issuer.create_flight(1, 10, "Emergency").unwrap()).unwrap();
/// queue.insert(issuer.create_flight(5, 5, "Cargo").unwrap()).unwrap();
///
/// let mut cursor = RunwayCursor::new(0);
/// let mut history = ExecutionHistory::new();
/// let scheduler = LandingScheduler::new();
/// let landed = scheduler.drain_and_schedule(&mut queue, &mut cursor, &mut history);
///
/// assert_eq!(landed.len(), 2);
/// assert_eq!(cursor.next_available_time(), 15);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingScheduler;

impl LandingScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Lands every pending flight, in queue order.
    ///
    /// Returns the records appended by this call. An empty queue is a no-op
    /// that returns an empty slice and leaves cursor and history untouched.
    ///
    /// A flight whose landing would end past the end of the clock halts the
    /// drain: it and everything behind it stay queued, unmodified.
    pub fn drain_and_schedule<'h>(
        &self,
        queue: &mut FlightQueue,
        cursor: &mut RunwayCursor,
        history: &'h mut ExecutionHistory,
    ) -> &'h [ExecutionRecord] {
        let first_new = history.len();

        if queue.is_empty() {
            tracing::debug!("no flights to schedule");
            return &history.records()[first_new..];
        }

        let pending = queue.len();
        while !queue.is_empty() {
            if let Err(e) = self.land_next(queue, cursor, history) {
                tracing::warn!(error = %e, remaining = queue.len(), "landing halted");
                break;
            }
        }

        let landed = &history.records()[first_new..];
        if queue.is_empty() {
            tracing::info!(
                landed = landed.len(),
                pending,
                runway_free_at = cursor.next_available_time(),
                "all flights landed"
            );
        }
        landed
    }

    /// Lands only the next pending flight.
    ///
    /// Returns `Ok(None)` when the queue is empty.
    ///
    /// # Errors
    /// `SlotOverflow` if the landing would end past the end of the clock.
    /// The flight stays queued and cursor and history are unchanged.
    pub fn schedule_next(
        &self,
        queue: &mut FlightQueue,
        cursor: &mut RunwayCursor,
        history: &mut ExecutionHistory,
    ) -> Result<Option<ExecutionRecord>> {
        if queue.is_empty() {
            return Ok(None);
        }
        self.land_next(queue, cursor, history)?;
        Ok(history.last().cloned())
    }

    fn land_next(
        &self,
        queue: &mut FlightQueue,
        cursor: &mut RunwayCursor,
        history: &mut ExecutionHistory,
    ) -> Result<()> {
        let next = queue.peek().ok_or(ScheduleError::EmptyQueue)?;
        let free_at = cursor.next_available_time();
        let start = next.ready_time().map_or(free_at, |ready| ready.max(free_at));
        next.slot_starting_at(start)?;

        let mut flight = queue.extract_min()?;
        let slot = flight.assign_slot(start)?;

        history.push(ExecutionRecord::landed(&flight, slot));
        cursor.advance_to(slot.end);

        tracing::info!(
            flight_id = %flight.id(),
            priority = flight.priority(),
            start = slot.start,
            end = slot.end,
            "flight landed"
        );
        Ok(())
    }
}
