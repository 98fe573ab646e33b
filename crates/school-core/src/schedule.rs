//! Weekly Timetables

use chrono::Weekday;

/// One slot on a timetable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPeriod {
    /// `08:00-09:00`
    pub time: &'static str,
    pub subject: &'static str,
    /// Teacher on a student timetable, class on a teacher timetable
    pub detail: &'static str,
    pub room: &'static str,
    /// Students attending; 0 for meetings and office hours
    pub students: u32,
}

/// Monday to Friday, in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    days: Vec<(Weekday, Vec<ClassPeriod>)>,
}

impl WeeklySchedule {
    pub fn new(days: Vec<(Weekday, Vec<ClassPeriod>)>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[(Weekday, Vec<ClassPeriod>)] {
        &self.days
    }

    /// Periods on `day`; empty on days without classes
    pub fn for_day(&self, day: Weekday) -> &[ClassPeriod] {
        self.days
            .iter()
            .find(|(weekday, _)| *weekday == day)
            .map(|(_, periods)| periods.as_slice())
            .unwrap_or(&[])
    }

    /// Periods across the week that have students attending
    pub fn teaching_periods(&self) -> usize {
        self.days
            .iter()
            .flat_map(|(_, periods)| periods)
            .filter(|period| period.students > 0)
            .count()
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_teacher_week() {
        let week = seed::teacher::weekly_schedule();
        assert_eq!(week.days().len(), 5);
        assert_eq!(week.for_day(Weekday::Mon).len(), 3);
        assert_eq!(week.teaching_periods(), 11);
    }

    #[test]
    fn test_weekend_is_empty() {
        let week = seed::student::weekly_schedule();
        assert!(week.for_day(Weekday::Sat).is_empty());
        assert_eq!(week.for_day(Weekday::Fri).len(), 4);
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(Weekday::Thu), "Thursday");
    }
}
