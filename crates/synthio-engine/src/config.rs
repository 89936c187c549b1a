//! Session configuration

use serde::{Deserialize, Serialize};

use crate::core::ZeroDivision;
use crate::history::History;

/// Knobs for a [`Session`](crate::session::Session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// What division by zero produces
    pub zero_division: ZeroDivision,
    /// Most evaluations kept on the tape
    pub history_capacity: usize,
    /// Whether evaluations are recorded at all
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zero_division: ZeroDivision::Zero,
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-division policy
    #[must_use]
    pub const fn with_zero_division(mut self, policy: ZeroDivision) -> Self {
        self.zero_division = policy;
        self
    }

    /// Set the history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Enable or disable history recording
    #[must_use]
    pub const fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
