//! Error types for flight intake and queue extraction.

use thiserror::Error;

use crate::models::{ArrivalSequence, FlightId};

/// Reasons a flight is refused at the creation or insertion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Landing duration must be at least one minute.
    #[error("service duration must be positive, got {0} minutes")]
    NonPositiveDuration(i64),
    /// Priority tiers start at 1.
    #[error("priority must be positive, got {0}")]
    NonPositivePriority(i32),
    /// A flight with this id was already submitted.
    #[error("duplicate flight id {0}")]
    DuplicateId(FlightId),
    /// Another submitted flight carries the same arrival sequence.
    #[error("flight {0} repeats arrival sequence {1}")]
    DuplicateArrival(FlightId, ArrivalSequence),
    /// The flight already holds a landing slot.
    #[error("flight {0} is already scheduled")]
    AlreadyScheduled(FlightId),
    /// The landing would end past the last representable time.
    #[error("flight {0} would end past the end of the clock")]
    SlotOverflow(FlightId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid flight input: {0}")]
    InvalidFlightInput(#[from] InvalidInput),

    /// Raised only by the unguarded `extract_min`; draining never hits it.
    #[error("flight queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
