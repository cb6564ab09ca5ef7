//! Runway session configuration.
//!
//! Deserializable so callers can load it from JSON or any serde format.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dispatching::rules::{Fcfs, PriorityFcfs, Spt};
use crate::dispatching::LandingRule;
use crate::models::SimTime;

/// Selects a built-in landing rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    #[default]
    PriorityFcfs,
    Fcfs,
    Spt,
}

impl RuleKind {
    pub fn build(self) -> Arc<dyn LandingRule> {
        match self {
            RuleKind::PriorityFcfs => Arc::new(PriorityFcfs),
            RuleKind::Fcfs => Arc::new(Fcfs),
            RuleKind::Spt => Arc::new(Spt),
        }
    }
}

/// Settings for a [`ControlTower`](crate::tower::ControlTower) session.
///
/// # Example
/// ```
/// use runway_schedule::config::{RuleKind, RunwayConfig};
///
/// let config = RunwayConfig::new().with_epoch(6 * 60).with_rule(RuleKind::Spt);
/// assert_eq!(config.epoch, 360);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayConfig {
    /// Time the runway opens (minutes since the simulation epoch).
    pub epoch: SimTime,
    /// Landing order policy.
    pub rule: RuleKind,
    /// Id given to the first issued flight.
    pub first_flight_id: u64,
}

impl RunwayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runway opening time.
    pub fn with_epoch(mut self, epoch: SimTime) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the landing rule.
    pub fn with_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the first flight id.
    pub fn with_first_flight_id(mut self, id: u64) -> Self {
        self.first_flight_id = id;
        self
    }
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            epoch: 0,
            rule: RuleKind::default(),
            first_flight_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RunwayConfig::default();
        assert_eq!(config.epoch, 0);
        assert_eq!(config.rule, RuleKind::PriorityFcfs);
        assert_eq!(config.first_flight_id, 1);
    }

    #[test]
    fn test_config_from_json() {
        let config: RunwayConfig =
            serde_json::from_str(r#"{"epoch": 480, "rule": "spt"}"#).unwrap();
        assert_eq!(config.epoch, 480);
        assert_eq!(config.rule, RuleKind::Spt);
        assert_eq!(config.first_flight_id, 1);

        let empty: RunwayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RunwayConfig::default());
    }

    #[test]
    fn test_rule_kind_builds_rule() {
        assert_eq!(RuleKind::PriorityFcfs.build().name(), "PRIORITY_FCFS");
        assert_eq!(RuleKind::Fcfs.build().name(), "FCFS");
        assert_eq!(RuleKind::Spt.build().name(), "SPT");
    }
}
