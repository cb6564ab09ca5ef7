//! Runway scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `LandingScheduler` drains the flight queue onto a single, exclusive,
//! non-preemptive runway. Flights land back to back in queue order; the
//! cursor records when the runway next becomes free.
//!
//! # KPI
//!
//! `LandingKpi` computes makespan, idle time, utilization, and mean
//! completion time per priority tier.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod cursor;
mod kpi;
mod landing;

pub use cursor::RunwayCursor;
pub use kpi::LandingKpi;
pub use landing::LandingScheduler;
