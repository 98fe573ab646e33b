//! Student portal seed data (Sarah Johnson, Grade 10-A)

use chrono::{NaiveDate, Weekday};

use super::date;
use crate::academics::{Announcement, Assignment, AssignmentStatus, Priority};
use crate::money::Money;
use crate::schedule::{ClassPeriod, WeeklySchedule};

/// A subject with the student's current standing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectPerformance {
    pub name: &'static str,
    pub grade: &'static str,
    pub percentage: u32,
    pub teacher: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingTest {
    pub subject: &'static str,
    pub date: NaiveDate,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub date: NaiveDate,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentOverview {
    pub name: &'static str,
    pub class: &'static str,
    pub roll_number: &'static str,
    pub subjects: Vec<SubjectPerformance>,
    pub attendance: u32,
    pub fee_balance: Money,
    pub upcoming_tests: Vec<UpcomingTest>,
    pub recent_announcements: Vec<Notice>,
}

fn subject(name: &'static str, grade: &'static str, percentage: u32, teacher: &'static str) -> SubjectPerformance {
    SubjectPerformance { name, grade, percentage, teacher }
}

pub fn overview() -> StudentOverview {
    StudentOverview {
        name: "Sarah Johnson",
        class: "Grade 10-A",
        roll_number: "2024001",
        subjects: vec![
            subject("Mathematics", "A", 92, "Dr. Michael Chen"),
            subject("Physics", "A-", 88, "Mr. David Brown"),
            subject("Chemistry", "B+", 85, "Dr. Emily Davis"),
            subject("English", "A", 94, "Ms. Sarah Wilson"),
            subject("History", "B", 82, "Mr. Robert Johnson"),
        ],
        attendance: 94,
        fee_balance: Money::from_dollars(2500),
        upcoming_tests: vec![
            UpcomingTest { subject: "Mathematics", date: date(2024, 2, 15), kind: "Unit Test" },
            UpcomingTest { subject: "Physics", date: date(2024, 2, 18), kind: "Lab Exam" },
        ],
        recent_announcements: vec![
            Notice { title: "Science Fair 2024", date: date(2024, 2, 10), content: "Registration open until Feb 20th" },
            Notice { title: "Parent-Teacher Meet", date: date(2024, 2, 8), content: "Scheduled for Feb 25th" },
        ],
    }
}

/// Per-subject grades for the "My Grades" page
pub fn subject_grades() -> Vec<SubjectPerformance> {
    vec![
        subject("Mathematics", "A", 92, "Dr. Michael Chen"),
        subject("English Literature", "B+", 87, "Ms. Sarah Wilson"),
        subject("Physics", "A-", 89, "Mr. David Brown"),
        subject("Chemistry", "B", 84, "Dr. Emily Davis"),
        subject("Biology", "A", 91, "Ms. Jennifer Miller"),
        subject("History", "B+", 86, "Mr. Robert Johnson"),
    ]
}

/// Term summary as published by the academic office
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallPerformance {
    pub average: f64,
    pub grade: &'static str,
    pub passed: u32,
    pub total: u32,
}

pub fn overall_performance() -> OverallPerformance {
    OverallPerformance { average: 88.5, grade: "A-", passed: 5, total: 6 }
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: 1,
            title: "Algebra Problem Set 8",
            subject: "Mathematics",
            due_date: date(2024, 1, 15),
            status: AssignmentStatus::Pending,
            description: "Complete problems 1-15 from Chapter 8 - Linear Equations",
            points: 50,
            score: None,
        },
        Assignment {
            id: 2,
            title: "Essay on Liberian Independence",
            subject: "Liberian History",
            due_date: date(2024, 1, 18),
            status: AssignmentStatus::Submitted,
            description: "Write a 800-word essay on the founding of Liberia and its significance",
            points: 100,
            score: None,
        },
        Assignment {
            id: 3,
            title: "Physics Lab Report - Momentum",
            subject: "Physics",
            due_date: date(2024, 1, 20),
            status: AssignmentStatus::Pending,
            description: "Document findings from the momentum conservation experiment",
            points: 75,
            score: None,
        },
        Assignment {
            id: 4,
            title: "English Grammar Quiz",
            subject: "English Language",
            due_date: date(2024, 1, 22),
            status: AssignmentStatus::Graded,
            description: "Quiz covering verb tenses and sentence structure",
            points: 30,
            score: Some(28),
        },
    ]
}

const fn period(time: &'static str, subject: &'static str, teacher: &'static str, room: &'static str) -> ClassPeriod {
    ClassPeriod { time, subject, detail: teacher, room, students: 0 }
}

pub fn weekly_schedule() -> WeeklySchedule {
    WeeklySchedule::new(vec![
        (Weekday::Mon, vec![
            period("08:00-09:00", "Mathematics", "Dr. Michael Chen", "Room 201"),
            period("09:15-10:15", "English Literature", "Ms. Sarah Wilson", "Room 105"),
            period("10:30-11:30", "Physics", "Mr. David Brown", "Lab 3"),
            period("11:45-12:45", "Chemistry", "Dr. Emily Davis", "Lab 2"),
            period("13:45-14:45", "Physical Education", "Coach Thompson", "Gymnasium"),
        ]),
        (Weekday::Tue, vec![
            period("08:00-09:00", "Biology", "Ms. Jennifer Miller", "Lab 1"),
            period("09:15-10:15", "History", "Mr. Robert Johnson", "Room 302"),
            period("10:30-11:30", "Mathematics", "Dr. Michael Chen", "Room 201"),
            period("11:45-12:45", "Art", "Ms. Lisa Garcia", "Art Studio"),
            period("13:45-14:45", "Music", "Mr. James Anderson", "Music Room"),
        ]),
        (Weekday::Wed, vec![
            period("08:00-09:00", "Physics", "Mr. David Brown", "Lab 3"),
            period("09:15-10:15", "English Literature", "Ms. Sarah Wilson", "Room 105"),
            period("10:30-11:30", "Chemistry", "Dr. Emily Davis", "Lab 2"),
            period("11:45-12:45", "Mathematics", "Dr. Michael Chen", "Room 201"),
            period("13:45-14:45", "Computer Science", "Mr. Tech Wilson", "Computer Lab"),
        ]),
        (Weekday::Thu, vec![
            period("08:00-09:00", "History", "Mr. Robert Johnson", "Room 302"),
            period("09:15-10:15", "Biology", "Ms. Jennifer Miller", "Lab 1"),
            period("10:30-11:30", "English Literature", "Ms. Sarah Wilson", "Room 105"),
            period("11:45-12:45", "Physics", "Mr. David Brown", "Lab 3"),
            period("13:45-14:45", "Study Hall", "Various", "Library"),
        ]),
        (Weekday::Fri, vec![
            period("08:00-09:00", "Mathematics", "Dr. Michael Chen", "Room 201"),
            period("09:15-10:15", "Chemistry", "Dr. Emily Davis", "Lab 2"),
            period("10:30-11:30", "Physical Education", "Coach Thompson", "Gymnasium"),
            period("11:45-12:45", "Assembly", "All Staff", "Main Hall"),
        ]),
    ])
}

/// CSS class for a subject's colour chip on the timetable
pub fn subject_color(subject: &str) -> &'static str {
    match subject {
        "Mathematics" => "chip-blue",
        "English Literature" => "chip-green",
        "Physics" => "chip-purple",
        "Chemistry" => "chip-orange",
        "Biology" => "chip-teal",
        "History" => "chip-red",
        "Physical Education" => "chip-yellow",
        "Art" => "chip-pink",
        "Music" => "chip-indigo",
        "Computer Science" => "chip-slate",
        "Study Hall" => "chip-muted",
        "Assembly" => "chip-primary",
        _ => "chip-gray",
    }
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Mid-Term Examination Schedule Released",
            content: "The mid-term examination schedule for all grades has been published. Please check your class schedules and prepare accordingly. Exams will begin on **March 15th, 2024**.",
            author: "Academic Office",
            date: date(2024, 1, 10),
            category: "Academic",
            priority: Priority::High,
        },
        Announcement {
            id: 2,
            title: "Annual Sports Day - March 25th",
            content: "Join us for our Annual Sports Day! Registration is now open for various events. Don't miss this exciting opportunity to showcase your athletic abilities.",
            author: "Sports Department",
            date: date(2024, 1, 8),
            category: "Sports",
            priority: Priority::Medium,
        },
        Announcement {
            id: 3,
            title: "Library Renovation - Limited Access",
            content: "The main library will undergo renovation from January 20th to February 10th. During this period, please use the *temporary library facility* in Building B.",
            author: "Library Administration",
            date: date(2024, 1, 5),
            category: "Facility",
            priority: Priority::Medium,
        },
        Announcement {
            id: 4,
            title: "Parent-Teacher Conference Scheduled",
            content: "Parent-Teacher conferences are scheduled for **February 5-7, 2024**. Please inform your parents to schedule appointments with your respective teachers.",
            author: "Administration",
            date: date(2024, 1, 3),
            category: "Academic",
            priority: Priority::High,
        },
        Announcement {
            id: 5,
            title: "Science Fair Registration Open",
            content: "The annual Science Fair is approaching! Registration is now open for all students. Submit your project proposals by February 1st, 2024.",
            author: "Science Department",
            date: date(2024, 1, 1),
            category: "Academic",
            priority: Priority::Medium,
        },
    ]
}

/// Annual fee position shown on "My Fees"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSummary {
    pub total_annual: Money,
    pub paid: Money,
    pub pending: Money,
    pub next_due: NaiveDate,
}

impl FeeSummary {
    /// Paid share of the annual fee, in percent
    pub fn paid_percentage(&self) -> f64 {
        if self.total_annual.is_zero() {
            return 0.0;
        }
        self.paid.cents() as f64 / self.total_annual.cents() as f64 * 100.0
    }
}

pub fn fee_summary() -> FeeSummary {
    FeeSummary {
        total_annual: Money::from_dollars(15_000),
        paid: Money::from_dollars(10_000),
        pending: Money::from_dollars(5_000),
        next_due: date(2024, 2, 15),
    }
}

/// Settled payments carry a receipt; outstanding ones a due date
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentState {
    Paid { paid_on: NaiveDate, receipt: &'static str },
    Pending { due: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentHistoryEntry {
    pub id: u32,
    pub description: &'static str,
    pub amount: Money,
    pub state: PaymentState,
}

pub fn payment_history() -> Vec<PaymentHistoryEntry> {
    fn paid(id: u32, description: &'static str, dollars: i64, paid_on: NaiveDate, receipt: &'static str) -> PaymentHistoryEntry {
        PaymentHistoryEntry {
            id,
            description,
            amount: Money::from_dollars(dollars),
            state: PaymentState::Paid { paid_on, receipt },
        }
    }

    vec![
        paid(1, "Tuition Fee - Semester 1", 7500, date(2023, 8, 15), "RCP001"),
        paid(2, "Activity Fee", 1000, date(2023, 9, 10), "RCP002"),
        paid(3, "Laboratory Fee", 1500, date(2023, 10, 5), "RCP003"),
        PaymentHistoryEntry {
            id: 4,
            description: "Tuition Fee - Semester 2",
            amount: Money::from_dollars(7500),
            state: PaymentState::Pending { due: date(2024, 2, 15) },
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingFee {
    pub description: &'static str,
    pub amount: Money,
    pub due: NaiveDate,
    pub category: &'static str,
}

pub fn upcoming_fees() -> Vec<UpcomingFee> {
    vec![
        UpcomingFee { description: "Tuition Fee - Semester 2", amount: Money::from_dollars(7500), due: date(2024, 2, 15), category: "Academic" },
        UpcomingFee { description: "Examination Fee", amount: Money::from_dollars(500), due: date(2024, 3, 1), category: "Academic" },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub grade: &'static str,
    pub section: &'static str,
    pub roll_number: &'static str,
    pub date_of_birth: NaiveDate,
    pub address: &'static str,
    pub parent_name: &'static str,
    pub parent_email: &'static str,
    pub parent_phone: &'static str,
    pub emergency_contact: &'static str,
    pub blood_group: &'static str,
    pub admission_date: NaiveDate,
    pub gpa: f64,
    pub total_credits: u32,
    pub attendance: u32,
    pub rank: u32,
    pub class_size: u32,
    pub subjects: Vec<&'static str>,
    pub achievements: Vec<Achievement>,
}

/// An award; `month` is the first of the month it was won
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub month: NaiveDate,
    pub category: &'static str,
}

pub fn profile() -> StudentProfile {
    StudentProfile {
        id: "STU001",
        name: "Sarah Johnson",
        email: "sarah.johnson@lifeinternational.edu",
        phone: "+1 (555) 123-4567",
        grade: "Grade 10-A",
        section: "A",
        roll_number: "10A023",
        date_of_birth: date(2008, 5, 15),
        address: "123 Oak Street, Springfield, IL 62701",
        parent_name: "Michael Johnson",
        parent_email: "michael.johnson@email.com",
        parent_phone: "+1 (555) 987-6543",
        emergency_contact: "+1 (555) 456-7890",
        blood_group: "O+",
        admission_date: date(2022, 8, 15),
        gpa: 3.8,
        total_credits: 28,
        attendance: 95,
        rank: 5,
        class_size: 45,
        subjects: vec!["Mathematics", "English Literature", "Physics", "Chemistry", "Biology", "History"],
        achievements: vec![
            Achievement { title: "Mathematics Olympiad - Regional Winner", month: date(2023, 11, 1), category: "Academic" },
            Achievement { title: "Science Fair - Second Place", month: date(2023, 9, 1), category: "Academic" },
            Achievement { title: "Basketball Team Captain", month: date(2023, 8, 1), category: "Sports" },
            Achievement { title: "Debate Competition - Best Speaker", month: date(2023, 6, 1), category: "Extracurricular" },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_summary_percentage() {
        let summary = fee_summary();
        assert!((summary.paid_percentage() - 66.666).abs() < 0.01);
        assert_eq!(summary.paid + summary.pending, summary.total_annual);
    }

    #[test]
    fn test_subject_color_fallback() {
        assert_eq!(subject_color("Mathematics"), "chip-blue");
        assert_eq!(subject_color("Latin"), "chip-gray");
    }
}
