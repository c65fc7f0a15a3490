use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the target tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// How long the operator gets to re-aim the device at the chosen
    /// candidate before the offsets are committed.
    pub realign_wait: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            realign_wait: Duration::from_secs(10),
        }
    }
}
