//! The mood journal.
//!
//! An append-only, newest-first log of mood samples with derived
//! read-only views. The in-memory log is the source of truth for the
//! session; durable storage is a best-effort mirror consulted only at
//! load time. Guest journals never touch storage except on `clear`.

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, warn};

use mindease_storage::KeyValueStore;

use crate::clock::{Clock, SystemClock};
use crate::error::{JournalError, JournalResult};
use crate::types::MoodEntry;

/// Valid mood samples
pub const MOOD_RANGE: RangeInclusive<u8> = 1..=5;

/// Trailing window used by the dashboard views
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How far back the streak walk examines unless configured otherwise
pub const STREAK_HORIZON_DAYS: u32 = 30;

/// Dashboard statistics derived from the log
#[derive(Debug, Clone, PartialEq)]
pub struct JournalSummary {
    pub streak_days: u32,
    pub average_mood: Option<f64>,
    pub check_ins: usize,
    pub achievements: u32,
}

/// Append-only mood log with derived statistics.
pub struct MoodJournal<C: Clock = SystemClock> {
    /// Newest first; entries are never edited or reordered
    entries: Vec<MoodEntry>,
    store: Arc<dyn KeyValueStore>,
    key: String,
    guest: bool,
    streak_horizon_days: u32,
    clock: C,
}

impl MoodJournal<SystemClock> {
    /// Load the journal from storage under `key`. Guest journals start
    /// empty and skip the read entirely.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, guest: bool) -> Self {
        Self::load_with_clock(store, key, guest, SystemClock).await
    }
}

impl<C: Clock> MoodJournal<C> {
    /// Load with an explicit clock. Missing, unavailable, or unparsable
    /// stored data degrades to an empty log rather than failing.
    pub async fn load_with_clock(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        guest: bool,
        clock: C,
    ) -> Self {
        let key = key.into();
        let entries = if guest {
            Vec::new()
        } else {
            match store.get(&key).await {
                Ok(Some(raw)) => match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
                    Ok(entries) => {
                        debug!(key = %key, count = entries.len(), "loaded mood log");
                        entries
                    }
                    Err(err) => {
                        warn!(key = %key, error = %err, "stored mood log is unreadable, starting empty");
                        Vec::new()
                    }
                },
                Ok(None) => Vec::new(),
                Err(err) => {
                    warn!(key = %key, error = %err, "mood log unavailable, starting empty");
                    Vec::new()
                }
            }
        };

        Self {
            entries,
            store,
            key,
            guest,
            streak_horizon_days: STREAK_HORIZON_DAYS,
            clock,
        }
    }

    /// Override how far back [`current_streak`](Self::current_streak)
    /// walks. Zero leaves the default in place.
    pub fn with_streak_horizon(mut self, days: u32) -> Self {
        if days > 0 {
            self.streak_horizon_days = days;
        }
        self
    }

    /// Full log, newest first
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn is_guest(&self) -> bool {
        self.guest
    }

    /// Record a mood sample stamped with the current instant. Registered
    /// journals mirror the full log to storage; a failed write is
    /// non-fatal and only logged.
    pub async fn add_entry(
        &mut self,
        mood: u8,
        notes: impl Into<String>,
    ) -> JournalResult<MoodEntry> {
        if !MOOD_RANGE.contains(&mood) {
            return Err(JournalError::MoodOutOfRange { mood });
        }

        let entry = MoodEntry::new(mood, notes, self.clock.now());
        self.entries.insert(0, entry.clone());

        if !self.guest {
            self.persist().await;
        }
        Ok(entry)
    }

    async fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(key = %self.key, error = %err, "could not serialize mood log");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &serialized).await {
            warn!(key = %self.key, error = %err, "failed to mirror mood log, in-memory entries kept");
        }
    }

    /// Entries whose timestamp falls within the trailing window,
    /// order preserved (newest first). `window_days` of zero means
    /// "since this instant".
    pub fn recent_entries(&self, window_days: u32) -> Vec<&MoodEntry> {
        let cutoff = self.clock.now() - Duration::days(window_days as i64);
        self.entries
            .iter()
            .filter(|entry| entry.timestamp >= cutoff)
            .collect()
    }

    /// Mean mood over the trailing window; `None` when the window holds
    /// no samples.
    pub fn average_mood(&self, window_days: u32) -> Option<f64> {
        let recent = self.recent_entries(window_days);
        if recent.is_empty() {
            return None;
        }
        let sum: u32 = recent.iter().map(|entry| u32::from(entry.mood)).sum();
        Some(f64::from(sum) / recent.len() as f64)
    }

    /// Consecutive local calendar days with at least one entry, walking
    /// back from today over at most the configured horizon (default
    /// [`STREAK_HORIZON_DAYS`]). A missing entry for today does not
    /// break a streak built on earlier days; the first gap on any
    /// earlier day ends the walk.
    pub fn current_streak(&self) -> u32 {
        if self.entries.is_empty() {
            return 0;
        }

        let today = self.clock.today();
        let mut streak = 0;
        for offset in 0..self.streak_horizon_days {
            let check = today - Duration::days(i64::from(offset));
            let has_entry = self
                .entries
                .iter()
                .any(|entry| self.clock.local_day(entry.timestamp) == check);
            if has_entry {
                streak += 1;
            } else if offset > 0 {
                break;
            }
        }
        streak
    }

    /// Dashboard statistics over the given trailing window.
    pub fn summary(&self, window_days: u32) -> JournalSummary {
        JournalSummary {
            streak_days: self.current_streak(),
            average_mood: self.average_mood(window_days),
            check_ins: self.entries.len(),
            achievements: u32::from(!self.entries.is_empty()),
        }
    }

    /// Empty the log and erase the durable record, guest or not.
    /// A failed erase is logged; the in-memory clear always wins.
    pub async fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.store.delete(&self.key).await {
            warn!(key = %self.key, error = %err, "failed to erase stored mood log");
        }
    }
}
