//! Session tape: a bounded, in-memory record of completed calculations.
//!
//! Nothing here touches disk. The tape exists so the frontend can show
//! what led to the current result; JSON export is provided for
//! programmatic consumers.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single resolved calculation, e.g. `5 + 3 = 8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The left operand, operator, and right operand as entered.
    pub expression: String,
    /// The computed result.
    pub result: f64,
}

impl TapeEntry {
    /// Creates a new tape entry.
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// Returns the `expression = result` display form.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, crate::core::format_value(self.result))
    }
}

/// Bounded queue of completed calculations, oldest first.
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an empty tape with a custom maximum length.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest once full.
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a resolved calculation.
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(TapeEntry::new(expression.to_string(), result));
    }

    /// Number of recorded calculations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Serialises the tape to JSON, oldest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Rebuilds a tape from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }
}
