//! Single-runway landing scheduler.
//!
//! Simulates sequential allocation of one exclusive, non-preemptive runway
//! among competing flights. Pending flights are ordered by priority tier
//! (lower lands first) with first-come-first-served tie-breaking; the
//! scheduler drains them back to back onto a logical timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Flight`, `FlightIssuer`, `PlaneType`,
//!   `ExecutionRecord`, `ExecutionHistory`, logical clock
//! - **`dispatching`**: Landing order policies (`PriorityFcfs`, `Fcfs`, `Spt`)
//! - **`queue`**: `FlightQueue`, a min-heap over the active policy's key
//! - **`scheduler`**: `LandingScheduler`, `RunwayCursor`, `LandingKpi`
//! - **`tower`**: `ControlTower`, a caller-owned session tying it all together
//! - **`config`**: Serde-loadable session settings
//! - **`validation`**: Input integrity checks (ids, durations, priorities)
//!
//! # Architecture
//!
//! Scheduling policy (which flight next) lives entirely in the queue's
//! landing rule; scheduling mechanics (time accumulation on one server)
//! live in the scheduler. The crate holds no global state.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kleinrock (1976), "Queueing Systems, Vol. 2", Ch. 3 (priority queueing)

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod tower;
pub mod validation;

pub use error::{InvalidInput, Result, ScheduleError};
