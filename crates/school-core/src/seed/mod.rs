//! Seed Data
//!
//! The hardcoded records each page starts from. Nothing here is persisted;
//! pages copy what they need into their own signals on mount.

use chrono::NaiveDate;

pub mod admin;
pub mod staff;
pub mod student;
pub mod teacher;

/// Headline number on a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Trend or footnote under the value
    pub note: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }
}

/// A row in a "recent activity" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub subject: &'static str,
    pub time: &'static str,
}

/// A dated entry in an "upcoming" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

pub(crate) const fn stat(title: &'static str, value: &'static str, note: &'static str, trend: Trend) -> StatCard {
    StatCard { title, value, note, trend }
}

/// Calendar date for seed records.
///
/// Seed literals are all valid; a bad one falls back to the epoch default
/// rather than aborting the page.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_date() {
        assert_eq!(date(2024, 9, 1).to_string(), "2024-09-01");
        assert_eq!(date(2024, 2, 30), NaiveDate::default());
    }
}
