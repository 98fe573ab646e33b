//! Registrar, dean and vice-principal dashboards

use chrono::NaiveDate;

use super::{date, stat, StatCard, Trend};

/// A person-dated row with a status badge, shared by the staff dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRow {
    pub person: &'static str,
    pub kind: &'static str,
    pub date: NaiveDate,
    pub status: &'static str,
}

impl CaseRow {
    /// Badge class for the row's status
    pub fn status_class(&self) -> &'static str {
        match self.status {
            "Completed" | "Resolved" => "badge-success",
            "Pending" | "Under Review" => "badge-warning",
            "Ongoing" => "badge-info",
            _ => "badge-muted",
        }
    }
}

/// Something scheduled relative to today (`Today`, `Tomorrow` or a date)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment {
    pub person: &'static str,
    pub kind: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

pub fn registrar_stats() -> Vec<StatCard> {
    vec![
        stat("Total Students", "1,247", "Currently enrolled", Trend::Flat),
        stat("New Enrollments", "45", "This semester", Trend::Up),
        stat("Pending Transcripts", "12", "Awaiting processing", Trend::Flat),
        stat("Active Classes", "24", "Across all grades", Trend::Flat),
    ]
}

pub fn recent_enrollments() -> Vec<CaseRow> {
    vec![
        CaseRow { person: "Agnes Kolleh", kind: "Grade 9", date: date(2024, 2, 10), status: "Completed" },
        CaseRow { person: "Moses Dukuly", kind: "Grade 11", date: date(2024, 2, 9), status: "Pending" },
        CaseRow { person: "Grace Pewee", kind: "Grade 10", date: date(2024, 2, 8), status: "Completed" },
    ]
}

pub fn pending_requests() -> Vec<CaseRow> {
    vec![
        CaseRow { person: "Sarah Konneh", kind: "Transcript Request", date: date(2024, 2, 10), status: "Pending" },
        CaseRow { person: "John Varney", kind: "Transfer Certificate", date: date(2024, 2, 9), status: "Pending" },
        CaseRow { person: "Mary Gaye", kind: "Grade Report", date: date(2024, 2, 8), status: "Pending" },
    ]
}

pub fn dean_stats() -> Vec<StatCard> {
    vec![
        stat("Total Students", "1,247", "Under supervision", Trend::Flat),
        stat("Disciplinary Actions", "8", "This month", Trend::Down),
        stat("Counseling Sessions", "23", "This month", Trend::Up),
        stat("Attendance Rate", "94.2%", "School-wide", Trend::Up),
    ]
}

pub fn recent_incidents() -> Vec<CaseRow> {
    vec![
        CaseRow { person: "Samuel Weah", kind: "Tardiness", date: date(2024, 2, 10), status: "Resolved" },
        CaseRow { person: "Ruth Konneh", kind: "Academic Support", date: date(2024, 2, 9), status: "Ongoing" },
        CaseRow { person: "David Clarke", kind: "Behavior Issue", date: date(2024, 2, 8), status: "Under Review" },
    ]
}

pub fn counseling_schedule() -> Vec<Appointment> {
    vec![
        Appointment { person: "Mary Dukuly", kind: "Academic Guidance", detail: "10:00 AM", when: "Today" },
        Appointment { person: "John Pewee", kind: "Personal Counseling", detail: "2:00 PM", when: "Today" },
        Appointment { person: "Grace Tubman", kind: "Career Guidance", detail: "9:00 AM", when: "Tomorrow" },
    ]
}

pub fn vice_principal_stats() -> Vec<StatCard> {
    vec![
        stat("Total Teachers", "42", "Active faculty", Trend::Flat),
        stat("Total Classes", "24", "This semester", Trend::Flat),
        stat("Average Grades", "85.3%", "School-wide", Trend::Up),
        stat("Schedule Compliance", "96.8%", "On-time classes", Trend::Up),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBucket {
    pub grade: &'static str,
    pub count: u32,
    pub percentage: u32,
}

pub fn grade_distribution() -> Vec<GradeBucket> {
    vec![
        GradeBucket { grade: "A", count: 186, percentage: 35 },
        GradeBucket { grade: "B", count: 158, percentage: 30 },
        GradeBucket { grade: "C", count: 132, percentage: 25 },
        GradeBucket { grade: "D", count: 53, percentage: 10 },
    ]
}

/// (teacher, subject, change, date)
pub fn schedule_changes() -> Vec<(&'static str, &'static str, &'static str, NaiveDate)> {
    vec![
        ("Prof. Moses Konneh", "Mathematics", "Room Changed", date(2024, 2, 10)),
        ("Mrs. Grace Pewee", "English", "Time Adjusted", date(2024, 2, 9)),
        ("Mr. David Tubman", "Science", "Class Added", date(2024, 2, 8)),
    ]
}

pub fn pending_approvals() -> Vec<Appointment> {
    vec![
        Appointment { person: "Mrs. Sarah Dukuly", kind: "Grade Submission", detail: "History", when: "Today" },
        Appointment { person: "Mr. John Varney", kind: "Schedule Request", detail: "Chemistry", when: "Tomorrow" },
        Appointment { person: "Prof. Mary Gaye", kind: "Curriculum Update", detail: "Biology", when: "2024-02-15" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_distribution_covers_everyone() {
        let buckets = grade_distribution();
        assert_eq!(buckets.iter().map(|b| b.percentage).sum::<u32>(), 100);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<u32>(), 529);
    }

    #[test]
    fn test_case_status_class() {
        let incidents = recent_incidents();
        assert_eq!(incidents[0].status_class(), "badge-success");
        assert_eq!(incidents[1].status_class(), "badge-info");
        assert_eq!(incidents[2].status_class(), "badge-warning");
    }
}
