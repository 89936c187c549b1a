//! Evaluation tape
//!
//! Every evaluated operation (`=`, or an operator that chains a pending
//! one) can be recorded here so a front end can show recent results.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::{format_result, Evaluation};

/// A single evaluated operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `lhs op rhs` as the display showed the operands
    pub expression: String,
    /// Unformatted result
    pub result: f64,
    /// Unix epoch millis
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with a specific timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(expression: String, result: f64, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    /// Creates an entry from an engine evaluation
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self::new(evaluation.expression(), evaluation.result)
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns `expression = result` using display formatting
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_result(self.result))
    }
}

/// Bounded tape of evaluations, oldest evicted first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an evaluation
    pub fn record(&mut self, evaluation: &Evaluation) {
        self.push(HistoryEntry::from_evaluation(evaluation));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no evaluations are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the last n entries (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the entries (oldest first) to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes history from JSON, keeping the default capacity
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// One `expression = result` line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
