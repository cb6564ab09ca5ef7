//! Landing timeline metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Last runway release minus epoch |
//! | Busy | Sum of landing durations |
//! | Idle | Makespan minus busy |
//! | Utilization | Busy / makespan |
//! | Avg Completion | Mean(end - epoch), overall and per priority tier |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionHistory, Minutes, SimTime};

/// Runway performance indicators. All times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingKpi {
    /// Number of landed flights.
    pub landed: usize,
    /// Time from epoch to the last runway release.
    pub makespan: Minutes,
    /// Total runway occupancy.
    pub busy: Minutes,
    /// Time the runway stood empty within the makespan.
    pub idle: Minutes,
    /// Busy fraction of the makespan (0.0..1.0).
    pub utilization: f64,
    /// Mean completion time measured from the epoch.
    pub avg_completion: f64,
    /// Mean completion time per priority tier.
    pub avg_completion_by_priority: BTreeMap<i32, f64>,
}

impl LandingKpi {
    /// Computes KPIs from a landing history.
    ///
    /// # Arguments
    /// * `history` - Landed flights.
    /// * `epoch` - Time the runway opened (the cursor's starting point).
    pub fn calculate(history: &ExecutionHistory, epoch: SimTime) -> Self {
        let makespan = history.makespan().map_or(0, |end| (end - epoch).max(0));
        let busy = history.busy_minutes();

        let mut by_priority: BTreeMap<i32, (i64, usize)> = BTreeMap::new();
        let mut total_completion: i64 = 0;
        for record in history {
            let completion = record.end_time - epoch;
            total_completion += completion;
            let entry = by_priority.entry(record.priority).or_insert((0, 0));
            entry.0 += completion;
            entry.1 += 1;
        }

        let landed = history.len();
        Self {
            landed,
            makespan,
            busy,
            idle: (makespan - busy).max(0),
            utilization: if makespan > 0 {
                busy as f64 / makespan as f64
            } else {
                0.0
            },
            avg_completion: if landed > 0 {
                total_completion as f64 / landed as f64
            } else {
                0.0
            },
            avg_completion_by_priority: by_priority
                .into_iter()
                .map(|(p, (sum, n))| (p, sum as f64 / n as f64))
                .collect(),
        }
    }
}
