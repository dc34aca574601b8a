//! Dashboard greeting and the rotating daily wellness tip.

use chrono::{Datelike, NaiveDate};

/// Tips rotate by weekday, one per day.
pub const DAILY_TIPS: [&str; 5] = [
    "Take a few deep breaths. Inhale for 4 counts, hold for 4, exhale for 4.",
    "Remember: Your thoughts are not facts. They're just thoughts.",
    "Small steps count. Celebrate every little victory today.",
    "It's okay to not be okay. You're doing your best.",
    "Try to notice one good thing that happens today, no matter how small.",
];

/// Time-of-day greeting; boundaries at noon and 18:00.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// The wellness tip for a given calendar date (Sunday is day zero).
pub fn daily_tip(date: NaiveDate) -> &'static str {
    let day = date.weekday().num_days_from_sunday() as usize;
    DAILY_TIPS[day % DAILY_TIPS.len()]
}
