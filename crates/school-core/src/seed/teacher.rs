//! Teacher portal seed data (Dr. Michael Chen, Mathematics)

use chrono::{NaiveDate, Weekday};

use super::date;
use crate::academics::{AssessmentReport, ClassReport, CourseworkStatus, TeacherAssignment};
use crate::gradebook::GradebookRow;
use crate::schedule::{ClassPeriod, WeeklySchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassLoad {
    pub name: &'static str,
    pub students: u32,
    pub subject: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingClass {
    pub class: &'static str,
    pub time: &'static str,
    pub topic: &'static str,
    pub room: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherOverview {
    pub name: &'static str,
    pub subject: &'static str,
    pub employee_id: &'static str,
    pub classes: Vec<ClassLoad>,
    pub total_students: u32,
    pub pending_grades: u32,
    pub upcoming_classes: Vec<UpcomingClass>,
    /// (activity, when)
    pub recent_activities: Vec<(&'static str, &'static str)>,
}

pub fn overview() -> TeacherOverview {
    TeacherOverview {
        name: "Dr. Michael Chen",
        subject: "Mathematics",
        employee_id: "EMP001",
        classes: vec![
            ClassLoad { name: "Grade 10-A", students: 28, subject: "Mathematics" },
            ClassLoad { name: "Grade 10-B", students: 25, subject: "Mathematics" },
            ClassLoad { name: "Grade 11-A", students: 22, subject: "Advanced Math" },
        ],
        total_students: 75,
        pending_grades: 12,
        upcoming_classes: vec![
            UpcomingClass { class: "Grade 10-A", time: "09:00 AM", topic: "Algebra", room: "M101" },
            UpcomingClass { class: "Grade 11-A", time: "11:00 AM", topic: "Calculus", room: "M103" },
            UpcomingClass { class: "Grade 10-B", time: "02:00 PM", topic: "Geometry", room: "M102" },
        ],
        recent_activities: vec![
            ("Uploaded Grade 10-A test results", "2 hours ago"),
            ("Created assignment for Grade 11-A", "1 day ago"),
            ("Reviewed Grade 10-B homework", "2 days ago"),
        ],
    }
}

/// A section on the "My Classes" page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeachingClass {
    pub id: u32,
    pub name: &'static str,
    pub subject: &'static str,
    pub grade: &'static str,
    pub students: u32,
    pub schedule: &'static str,
    pub room: &'static str,
    pub semester: &'static str,
}

pub fn classes() -> Vec<TeachingClass> {
    vec![
        TeachingClass {
            id: 1,
            name: "Mathematics - Grade 10A",
            subject: "Mathematics",
            grade: "10A",
            students: 28,
            schedule: "Mon, Wed, Fri - 08:00-09:00",
            room: "Room 201",
            semester: "Spring 2024",
        },
        TeachingClass {
            id: 2,
            name: "Mathematics - Grade 10B",
            subject: "Mathematics",
            grade: "10B",
            students: 26,
            schedule: "Tue, Thu - 09:15-10:15",
            room: "Room 201",
            semester: "Spring 2024",
        },
        TeachingClass {
            id: 3,
            name: "English Language - Grade 11",
            subject: "English Language",
            grade: "11",
            students: 22,
            schedule: "Mon, Wed - 10:30-11:30",
            room: "Room 203",
            semester: "Spring 2024",
        },
        TeachingClass {
            id: 4,
            name: "Liberian History - Grade 12",
            subject: "Liberian History",
            grade: "12",
            students: 19,
            schedule: "Tue, Thu, Fri - 11:45-12:45",
            room: "Room 205",
            semester: "Spring 2024",
        },
    ]
}

pub fn total_students(classes: &[TeachingClass]) -> u32 {
    classes.iter().map(|class| class.students).sum()
}

/// (class, activity, when)
pub fn class_activities() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Grade 10A", "Quiz submitted", "2 hours ago"),
        ("Grade 11", "Assignment graded", "4 hours ago"),
        ("Grade 10B", "Attendance marked", "1 day ago"),
        ("Grade 12", "New material uploaded", "2 days ago"),
    ]
}

fn gradebook_row(id: u32, name: &str, roll_no: &str, scores: [f64; 5]) -> GradebookRow {
    let mut cells: Vec<Option<f64>> = scores.iter().copied().map(Some).collect();
    cells.push(None);
    GradebookRow {
        id,
        name: name.to_string(),
        roll_no: roll_no.to_string(),
        scores: cells,
    }
}

/// Grade 10A before the final exam
pub fn gradebook_rows() -> Vec<GradebookRow> {
    vec![
        gradebook_row(1, "Alice Johnson", "10A001", [85.0, 92.0, 88.0, 87.0, 90.0]),
        gradebook_row(2, "Bob Smith", "10A002", [78.0, 84.0, 82.0, 79.0, 85.0]),
        gradebook_row(3, "Carol Davis", "10A003", [95.0, 98.0, 94.0, 96.0, 97.0]),
        gradebook_row(4, "David Wilson", "10A004", [73.0, 76.0, 74.0, 72.0, 78.0]),
        gradebook_row(5, "Eva Brown", "10A005", [89.0, 87.0, 91.0, 88.0, 86.0]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn coursework(
    id: u32,
    title: &str,
    class: &str,
    due_date: NaiveDate,
    assigned_date: NaiveDate,
    total_points: u32,
    (submitted, total_students): (u32, u32),
    status: CourseworkStatus,
    description: &str,
) -> TeacherAssignment {
    TeacherAssignment {
        id,
        title: title.to_string(),
        class: class.to_string(),
        due_date,
        assigned_date,
        total_points,
        submitted,
        total_students,
        status,
        description: description.to_string(),
    }
}

pub fn assignments() -> Vec<TeacherAssignment> {
    vec![
        coursework(
            1,
            "Quadratic Equations Worksheet",
            "Grade 10A",
            date(2024, 1, 20),
            date(2024, 1, 10),
            50,
            (24, 28),
            CourseworkStatus::Active,
            "Solve problems 1-15 covering quadratic equations and graphing",
        ),
        coursework(
            2,
            "Calculus Integration Problems",
            "Grade 12",
            date(2024, 1, 25),
            date(2024, 1, 12),
            75,
            (15, 19),
            CourseworkStatus::Active,
            "Practice integration techniques including substitution and parts",
        ),
        coursework(
            3,
            "Probability Theory Essay",
            "Grade 11",
            date(2024, 1, 15),
            date(2024, 1, 5),
            100,
            (22, 22),
            CourseworkStatus::Grading,
            "Write a 500-word essay on real-world applications of probability",
        ),
        coursework(
            4,
            "Geometry Proofs Assignment",
            "Grade 10B",
            date(2024, 1, 12),
            date(2024, 1, 2),
            60,
            (26, 26),
            CourseworkStatus::Completed,
            "Complete geometric proofs for triangles and parallel lines",
        ),
    ]
}

const fn period(time: &'static str, subject: &'static str, class: &'static str, room: &'static str, students: u32) -> ClassPeriod {
    ClassPeriod { time, subject, detail: class, room, students }
}

pub fn weekly_schedule() -> WeeklySchedule {
    WeeklySchedule::new(vec![
        (Weekday::Mon, vec![
            period("08:00-09:00", "Mathematics", "Grade 10A", "Room 201", 28),
            period("10:30-11:30", "Advanced Mathematics", "Grade 11", "Room 203", 22),
            period("13:45-14:45", "Office Hours", "All Students", "Room 201", 0),
        ]),
        (Weekday::Tue, vec![
            period("09:15-10:15", "Mathematics", "Grade 10B", "Room 201", 26),
            period("11:45-12:45", "Calculus", "Grade 12", "Room 203", 19),
            period("14:00-15:00", "Faculty Meeting", "All Staff", "Conference Room", 0),
        ]),
        (Weekday::Wed, vec![
            period("08:00-09:00", "Mathematics", "Grade 10A", "Room 201", 28),
            period("10:30-11:30", "Advanced Mathematics", "Grade 11", "Room 203", 22),
            period("13:45-14:45", "Parent Consultations", "Parents", "Room 201", 0),
        ]),
        (Weekday::Thu, vec![
            period("09:15-10:15", "Mathematics", "Grade 10B", "Room 201", 26),
            period("11:45-12:45", "Calculus", "Grade 12", "Room 203", 19),
            period("15:00-16:00", "Math Club", "Extracurricular", "Room 203", 15),
        ]),
        (Weekday::Fri, vec![
            period("08:00-09:00", "Mathematics", "Grade 10A", "Room 201", 28),
            period("11:45-12:45", "Calculus", "Grade 12", "Room 203", 19),
            period("14:00-15:00", "Preparation Time", "Personal", "Room 201", 0),
        ]),
    ])
}

/// CSS class for a period's colour chip on the teaching timetable
pub fn period_color(subject: &str) -> &'static str {
    match subject {
        "Mathematics" => "chip-blue",
        "Advanced Mathematics" => "chip-purple",
        "Calculus" => "chip-green",
        "Office Hours" => "chip-orange",
        "Parent Consultations" => "chip-pink",
        "Math Club" => "chip-teal",
        "Preparation Time" => "chip-yellow",
        _ => "chip-gray",
    }
}

/// Department calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub title: &'static str,
    pub time: &'static str,
}

pub fn upcoming_events() -> Vec<CalendarEntry> {
    vec![
        CalendarEntry { date: date(2024, 1, 15), title: "Parent-Teacher Conference", time: "14:00-17:00" },
        CalendarEntry { date: date(2024, 1, 18), title: "Mathematics Department Meeting", time: "15:30-16:30" },
        CalendarEntry { date: date(2024, 1, 22), title: "Mid-term Exam Preparation", time: "13:00-14:00" },
        CalendarEntry { date: date(2024, 1, 25), title: "Professional Development Workshop", time: "09:00-12:00" },
    ]
}

pub fn class_reports() -> Vec<ClassReport> {
    vec![
        ClassReport {
            class: "Grade 10A - Mathematics",
            students: 28,
            average_grade: 85.4,
            pass_rate: 92.9,
            attendance_rate: 94.2,
            top_performer: "Carol Davis (96.0%)",
            improvement: "+3.2%",
        },
        ClassReport {
            class: "Grade 10B - Mathematics",
            students: 26,
            average_grade: 82.1,
            pass_rate: 88.5,
            attendance_rate: 91.8,
            top_performer: "Mike Wilson (93.5%)",
            improvement: "+1.8%",
        },
        ClassReport {
            class: "Grade 11 - Advanced Mathematics",
            students: 22,
            average_grade: 87.9,
            pass_rate: 95.5,
            attendance_rate: 96.1,
            top_performer: "Emma Thompson (98.2%)",
            improvement: "+4.1%",
        },
        ClassReport {
            class: "Grade 12 - Calculus",
            students: 19,
            average_grade: 89.3,
            pass_rate: 94.7,
            attendance_rate: 97.4,
            top_performer: "Alex Johnson (97.8%)",
            improvement: "+2.9%",
        },
    ]
}

pub fn assessment_reports() -> Vec<AssessmentReport> {
    vec![
        AssessmentReport { kind: "Quiz 1", class: "Grade 10A", average: 85.2, high: 98, low: 67, completion_rate: 100.0 },
        AssessmentReport { kind: "Midterm Exam", class: "Grade 11", average: 87.9, high: 96, low: 72, completion_rate: 100.0 },
        AssessmentReport { kind: "Assignment 2", class: "Grade 12", average: 91.4, high: 100, low: 78, completion_rate: 94.7 },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub department: &'static str,
    pub position: &'static str,
    pub employee_id: &'static str,
    pub date_of_birth: NaiveDate,
    pub address: &'static str,
    pub emergency_contact: &'static str,
    pub join_date: NaiveDate,
    pub qualification: &'static str,
    pub experience: u32,
    pub total_students: u32,
    pub current_classes: u32,
    pub subjects: Vec<&'static str>,
    pub rating: f64,
    pub reviews: u32,
    /// (name, students, schedule)
    pub classes: Vec<(&'static str, u32, &'static str)>,
    /// (title, year, organization)
    pub achievements: Vec<(&'static str, &'static str, &'static str)>,
    /// (degree, institution, year)
    pub qualifications: Vec<(&'static str, &'static str, &'static str)>,
}

pub fn profile() -> TeacherProfile {
    TeacherProfile {
        id: "TCH001",
        name: "Dr. Michael Chen",
        email: "michael.chen@lifeinternational.edu",
        phone: "+1 (555) 234-5678",
        department: "Mathematics Department",
        position: "Senior Mathematics Teacher",
        employee_id: "EMP2019-MT-001",
        date_of_birth: date(1985, 3, 22),
        address: "456 Maple Avenue, Springfield, IL 62701",
        emergency_contact: "+1 (555) 876-5432",
        join_date: date(2019, 8, 15),
        qualification: "Ph.D. in Mathematics, Stanford University",
        experience: 12,
        total_students: 95,
        current_classes: 4,
        subjects: vec!["Mathematics", "Advanced Mathematics", "Calculus", "Statistics"],
        rating: 4.8,
        reviews: 247,
        classes: vec![
            ("Mathematics - Grade 10A", 28, "Mon, Wed, Fri - 08:00-09:00"),
            ("Mathematics - Grade 10B", 26, "Tue, Thu - 09:15-10:15"),
            ("Advanced Mathematics - Grade 11", 22, "Mon, Wed - 10:30-11:30"),
            ("Calculus - Grade 12", 19, "Tue, Thu, Fri - 11:45-12:45"),
        ],
        achievements: vec![
            ("Excellence in Teaching Award", "2023", "Life International School"),
            ("Outstanding Mathematics Educator", "2022", "State Education Board"),
            ("Innovation in STEM Education", "2021", "National Education Society"),
            ("Best Faculty Award", "2020", "Life International School"),
        ],
        qualifications: vec![
            ("Ph.D. in Mathematics", "Stanford University", "2015"),
            ("M.Sc. in Applied Mathematics", "MIT", "2012"),
            ("B.Sc. in Mathematics", "UC Berkeley", "2010"),
            ("Teaching Certification", "California Teaching Commission", "2016"),
        ],
    }
}

/// A switch on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingToggle {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

const fn toggle(key: &'static str, label: &'static str, description: &'static str, enabled: bool) -> SettingToggle {
    SettingToggle { key, label, description, enabled }
}

pub fn security_toggles() -> Vec<SettingToggle> {
    vec![
        toggle("twoFactor", "Enable 2FA", "Add an extra layer of security to your account", false),
        toggle("sms", "SMS Verification", "Receive verification codes via SMS", false),
    ]
}

pub fn notification_toggles() -> Vec<SettingToggle> {
    vec![
        toggle("email", "Email Notifications", "Receive updates about assignments and grades", true),
        toggle("submissions", "Assignment Submissions", "Get notified when students submit assignments", true),
        toggle("deadlines", "Grade Deadline Reminders", "Reminders for upcoming grading deadlines", true),
        toggle("messages", "Student Messages", "Notifications for student messages and queries", true),
        toggle("system", "System Updates", "Updates about system maintenance and new features", false),
    ]
}

pub fn display_toggles() -> Vec<SettingToggle> {
    vec![
        toggle("compact", "Compact Layout", "Use a more compact interface layout", false),
        toggle("analytics", "Analytics & Usage Data", "Help improve the platform by sharing usage data", true),
    ]
}

/// (value, label) options for the settings selects
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("mathematics", "Mathematics Department"),
    ("science", "Science Department"),
    ("english", "English Department"),
    ("history", "History Department"),
];

pub const THEMES: &[(&str, &str)] = &[("light", "Light Mode"), ("dark", "Dark Mode"), ("system", "System Default")];

pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("es", "Spanish"), ("fr", "French"), ("de", "German")];

pub const TIMEZONES: &[(&str, &str)] = &[
    ("est", "Eastern Standard Time (EST)"),
    ("cst", "Central Standard Time (CST)"),
    ("mst", "Mountain Standard Time (MST)"),
    ("pst", "Pacific Standard Time (PST)"),
];

pub const QUIET_FROM: &[(&str, &str)] = &[("20:00", "8:00 PM"), ("21:00", "9:00 PM"), ("22:00", "10:00 PM"), ("23:00", "11:00 PM")];

pub const QUIET_UNTIL: &[(&str, &str)] = &[("06:00", "6:00 AM"), ("07:00", "7:00 AM"), ("08:00", "8:00 AM"), ("09:00", "9:00 AM")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_students() {
        assert_eq!(total_students(&classes()), 95);
    }

    #[test]
    fn test_gradebook_rows_await_final() {
        assert!(gradebook_rows().iter().all(|row| row.scores.len() == 6 && row.scores[5].is_none()));
    }

    #[test]
    fn test_period_color() {
        assert_eq!(period_color("Calculus"), "chip-green");
        assert_eq!(period_color("Faculty Meeting"), "chip-gray");
    }
}
