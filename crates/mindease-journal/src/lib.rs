//! # MindEase Journal
//!
//! Timestamped mood samples with derived dashboard statistics: trailing
//! rolling average and a consecutive-day streak. Registered users get a
//! write-through mirror to the persistence adapter; guest journals live
//! only for the process.

pub mod clock;
pub mod error;
pub mod journal;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{JournalError, JournalResult};
pub use journal::{
    JournalSummary, MoodJournal, DEFAULT_WINDOW_DAYS, MOOD_RANGE, STREAK_HORIZON_DAYS,
};
pub use types::MoodEntry;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
