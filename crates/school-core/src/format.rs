//! Display Formatting
//!
//! Date and text helpers shared by the pages.

use chrono::{Datelike, NaiveDate};

/// `February 15, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Jan 20, 2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 15`
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `November 2023`
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// `Today`, `Yesterday`, `N days ago` up to a week, then the long date.
/// Future dates fall through to the long date as well.
pub fn time_ago(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=7 => format!("{} days ago", days),
        _ => long_date(date),
    }
}

/// Whole years since `birth`, one less if this year's birthday is still
/// ahead
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Completed years of service: elapsed days over 365.25, floored
pub fn years_of_service(joined: NaiveDate, today: NaiveDate) -> i64 {
    ((today - joined).num_days() as f64 / 365.25).floor() as i64
}

/// `pending` → `Pending`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One decimal place, as used on every percentage card
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(long_date(date(2024, 2, 15)), "February 15, 2024");
        assert_eq!(short_date(date(2024, 1, 20)), "Jan 20, 2024");
        assert_eq!(month_day(date(2024, 1, 5)), "Jan 5");
        assert_eq!(month_year(date(2023, 11, 1)), "November 2023");
    }

    #[test]
    fn test_time_ago() {
        let today = date(2024, 1, 10);
        assert_eq!(time_ago(today, today), "Today");
        assert_eq!(time_ago(date(2024, 1, 9), today), "Yesterday");
        assert_eq!(time_ago(date(2024, 1, 3), today), "7 days ago");
        assert_eq!(time_ago(date(2024, 1, 2), today), "January 2, 2024");
        assert_eq!(time_ago(date(2024, 1, 12), today), "January 12, 2024");
    }

    #[test]
    fn test_age_respects_birthday() {
        let birth = date(2008, 5, 15);
        assert_eq!(age_on(birth, date(2024, 5, 14)), 15);
        assert_eq!(age_on(birth, date(2024, 5, 15)), 16);
        assert_eq!(age_on(birth, date(2024, 12, 1)), 16);
    }

    #[test]
    fn test_years_of_service() {
        let joined = date(2019, 8, 15);
        assert_eq!(years_of_service(joined, date(2024, 8, 14)), 4);
        assert_eq!(years_of_service(joined, date(2024, 8, 16)), 5);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize(""), "");
    }
}
