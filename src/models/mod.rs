//! Landing domain models.
//!
//! Provides the data types for a single-runway landing simulation: the
//! requests (flights), the logical clock, and the landing timeline.
//!
//! # Domain Mappings
//!
//! | runway-schedule | Generic scheduling |
//! |-----------------|--------------------|
//! | Flight | Job / request |
//! | Runway | Single exclusive server |
//! | ExecutionRecord | Assignment |
//! | ExecutionHistory | Schedule |

mod flight;
mod record;
mod time;

pub use flight::{
    ArrivalClock, ArrivalSequence, Flight, FlightId, FlightIssuer, LandingSlot, PlaneType,
};
pub use record::{ExecutionHistory, ExecutionRecord};
pub use time::{format_clock, Minutes, SimTime};
