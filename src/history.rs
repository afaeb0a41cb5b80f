//! Rolling log of committed latency values.
//!
//! The log keeps insertion order and holds at most `capacity` entries; when a
//! push would exceed that, the oldest entry is dropped. It is persisted as a
//! JSON array of `{ "timestamp", "value" }` objects.

use crate::config::MAX_HISTORY_POINTS;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 instant the value was committed.
    #[serde(alias = "ts")]
    pub timestamp: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_POINTS)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a log from already ordered entries, keeping the newest ones.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        let skip = entries.len().saturating_sub(capacity);
        history.entries.extend(entries.into_iter().skip(skip));
        history
    }

    /// Append a value, evicting the oldest entry when full.
    pub fn push(&mut self, timestamp: impl Into<String>, value: f64) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            timestamp: timestamp.into(),
            value,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Decode a stored array entry by entry. Entries that do not parse or
    /// carry a non-finite value (`null` in JSON) are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let total = raw.len();
        let entries: Vec<HistoryEntry> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value::<HistoryEntry>(value).ok())
            .filter(|entry| entry.value.is_finite())
            .collect();
        if entries.len() < total {
            warn!("Skipped {} unreadable history entries", total - entries.len());
        }
        Ok(Self::from_entries(entries, MAX_HISTORY_POINTS))
    }

    /// Decode a stored value; missing or unreadable data yields an empty log.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                warn!("Discarding unreadable history: {}", e);
                Self::default()
            }),
        }
    }
}
