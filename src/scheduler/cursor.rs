//! Runway availability cursor.

use serde::{Deserialize, Serialize};

use crate::models::SimTime;

/// Tracks when the runway next becomes free.
///
/// Starts at the scheduling epoch and only moves forward, each time a
/// flight is landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayCursor {
    epoch: SimTime,
    next_available_time: SimTime,
}

impl RunwayCursor {
    /// Creates a cursor with the runway free from `epoch`.
    pub fn new(epoch: SimTime) -> Self {
        Self {
            epoch,
            next_available_time: epoch,
        }
    }

    pub fn epoch(&self) -> SimTime {
        self.epoch
    }

    pub fn next_available_time(&self) -> SimTime {
        self.next_available_time
    }

    pub(crate) fn advance_to(&mut self, time: SimTime) {
        debug_assert!(time >= self.next_available_time);
        self.next_available_time = time;
    }
}

impl Default for RunwayCursor {
    fn default() -> Self {
        Self::new(0)
    }
}
