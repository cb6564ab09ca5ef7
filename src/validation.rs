//! Input validation for landing requests.
//!
//! Flights are checked at the creation and insertion boundary so that
//! nothing invalid ever reaches the queue. Detects:
//! - Non-positive service durations
//! - Non-positive priorities
//! - Duplicate flight IDs
//! - Duplicate arrival sequences (ambiguous tie-break)
//! - Flights that already hold a landing slot

use std::collections::HashSet;

use crate::error::{InvalidInput, Result};
use crate::models::{ArrivalSequence, Flight, FlightId, Minutes};

/// Batch validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two flights share the same ID.
    DuplicateId,
    /// Two flights share the same arrival sequence.
    DuplicateArrival,
    /// Service duration is zero or negative.
    NonPositiveDuration,
    /// Priority is zero or negative.
    NonPositivePriority,
    /// Flight already has a landing slot.
    AlreadyScheduled,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the caller-supplied fields of a new flight.
pub(crate) fn check_fields(priority: i32, service_duration: Minutes) -> Result<()> {
    if service_duration <= 0 {
        return Err(InvalidInput::NonPositiveDuration(service_duration).into());
    }
    if priority <= 0 {
        return Err(InvalidInput::NonPositivePriority(priority).into());
    }
    Ok(())
}

pub(crate) fn ensure_unscheduled(flight: &Flight) -> Result<()> {
    if flight.is_scheduled() {
        return Err(InvalidInput::AlreadyScheduled(flight.id()).into());
    }
    Ok(())
}

/// Validates a single flight against the ids and arrival sequences already
/// submitted.
///
/// Used by the queue before a flight enters the heap.
pub fn validate_flight(
    flight: &Flight,
    known_ids: &HashSet<FlightId>,
    known_arrivals: &HashSet<ArrivalSequence>,
) -> Result<()> {
    check_fields(flight.priority(), flight.service_duration())?;
    ensure_unscheduled(flight)?;
    if known_ids.contains(&flight.id()) {
        return Err(InvalidInput::DuplicateId(flight.id()).into());
    }
    if known_arrivals.contains(&flight.arrival_sequence()) {
        return Err(InvalidInput::DuplicateArrival(flight.id(), flight.arrival_sequence()).into());
    }
    Ok(())
}

/// Validates a batch of flights, e.g. one loaded from an external source.
///
/// Checks:
/// 1. No duplicate flight IDs
/// 2. No duplicate arrival sequences
/// 3. All service durations positive
/// 4. All priorities positive
/// 5. No flight already scheduled
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_flights(flights: &[Flight]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut sequences = HashSet::new();

    for flight in flights {
        if !ids.insert(flight.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate flight ID: {}", flight.id()),
            ));
        }

        if !sequences.insert(flight.arrival_sequence()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateArrival,
                format!(
                    "Flight {} shares arrival sequence {}",
                    flight.id(),
                    flight.arrival_sequence().0
                ),
            ));
        }

        if flight.service_duration() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Flight {} has service duration {}",
                    flight.id(),
                    flight.service_duration()
                ),
            ));
        }

        if flight.priority() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositivePriority,
                format!("Flight {} has priority {}", flight.id(), flight.priority()),
            ));
        }

        if flight.is_scheduled() {
            errors.push(ValidationError::new(
                ValidationErrorKind::AlreadyScheduled,
                format!("Flight {} is already scheduled", flight.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[test]
    fn test_valid_batch() {
        let flights = vec![Flight::unchecked(1, 1, 10, 0), Flight::unchecked(2, 5, 5, 1)];
        assert!(validate_flights(&flights).is_ok());
    }

    #[test]
    fn test_duplicate_ids_and_sequences() {
        let flights = vec![Flight::unchecked(1, 1, 10, 0), Flight::unchecked(1, 2, 5, 0)];
        let errors = validate_flights(&flights).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateArrival));
    }

    #[test]
    fn test_collects_all_field_errors() {
        let flights = vec![Flight::unchecked(1, 0, 0, 0), Flight::unchecked(2, 1, -5, 1)];
        let errors = validate_flights(&flights).unwrap_err();
        let durations = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveDuration)
            .count();
        assert_eq!(durations, 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositivePriority));
    }

    #[test]
    fn test_scheduled_flight_flagged() {
        let mut f = Flight::unchecked(1, 1, 10, 0);
        f.assign_slot(0).unwrap();
        let errors = validate_flights(&[f]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::AlreadyScheduled);
    }

    #[test]
    fn test_validate_single_flight() {
        let mut known = HashSet::new();
        let arrivals = HashSet::new();
        let f = Flight::unchecked(7, 2, 10, 0);
        assert!(validate_flight(&f, &known, &arrivals).is_ok());

        known.insert(FlightId(7));
        assert_eq!(
            validate_flight(&f, &known, &arrivals),
            Err(ScheduleError::InvalidFlightInput(InvalidInput::DuplicateId(
                FlightId(7)
            )))
        );

        let negative = Flight::unchecked(8, 2, -1, 1);
        assert_eq!(
            validate_flight(&negative, &known, &arrivals),
            Err(ScheduleError::InvalidFlightInput(
                InvalidInput::NonPositiveDuration(-1)
            ))
        );
    }

    #[test]
    fn test_validate_single_flight_repeated_arrival() {
        let known = HashSet::new();
        let mut arrivals = HashSet::new();
        arrivals.insert(ArrivalSequence(3));

        let f = Flight::unchecked(9, 1, 10, 3);
        assert_eq!(
            validate_flight(&f, &known, &arrivals),
            Err(ScheduleError::InvalidFlightInput(
                InvalidInput::DuplicateArrival(FlightId(9), ArrivalSequence(3))
            ))
        );
    }
}
