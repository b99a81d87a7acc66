//! Request Diagnostics
//!
//! In-memory record of fire-and-forget request outcomes (info loads,
//! login attempts). Entries land here and in the log; no section
//! rendering reads from this buffer.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

const MAX_ENTRIES: usize = 50;

#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub at: DateTime<Utc>,
    pub source: String,
    pub outcome: String,
}

static ENTRIES: Lazy<RwLock<Vec<DiagnosticEntry>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// Record a request outcome
pub fn record(source: &str, outcome: &str) {
    let mut entries = ENTRIES.write();
    entries.push(DiagnosticEntry {
        at: Utc::now(),
        source: source.to_string(),
        outcome: outcome.to_string(),
    });
    if entries.len() > MAX_ENTRIES {
        let excess = entries.len() - MAX_ENTRIES;
        entries.drain(..excess);
    }
}

/// Most recent entries, newest first
pub fn recent(limit: usize) -> Vec<DiagnosticEntry> {
    ENTRIES.read().iter().rev().take(limit).cloned().collect()
}
