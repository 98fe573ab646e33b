//! Pages
//!
//! One component per route, grouped by portal. Each page seeds its own
//! signals from `school_core::seed` on mount and drops them on unmount.

pub mod admin;
pub mod staff;
pub mod student;
pub mod teacher;

mod login;
mod not_found;

pub use login::Login;
pub use not_found::NotFound;

use chrono::NaiveDate;

/// Local calendar date
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Text colour for a percentage score: 90+, 80+, 70+, below
pub(crate) fn score_tone(score: f64) -> &'static str {
    if score >= 90.0 {
        "tone-success"
    } else if score >= 80.0 {
        "tone-info"
    } else if score >= 70.0 {
        "tone-warning"
    } else {
        "tone-destructive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tone_bands() {
        assert_eq!(score_tone(96.0), "tone-success");
        assert_eq!(score_tone(88.4), "tone-info");
        assert_eq!(score_tone(74.6), "tone-warning");
        assert_eq!(score_tone(59.9), "tone-destructive");
    }
}
