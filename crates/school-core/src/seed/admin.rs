//! Administration seed data

use super::{date, stat, Activity, Event, StatCard, Trend};
use crate::fees::{FeeRecord, FeeStatus};
use crate::grade_entry::{StudentGrade, SubjectGrade};
use crate::money::Money;
use crate::roster::{RecordStatus, Student, Teacher};

/// A student selectable on the grade entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeEntryStudent {
    pub id: &'static str,
    pub name: &'static str,
}

const CLASS_10A: &[GradeEntryStudent] = &[
    GradeEntryStudent { id: "1", name: "Alice Johnson" },
    GradeEntryStudent { id: "2", name: "Bob Smith" },
    GradeEntryStudent { id: "3", name: "Carol Davis" },
];

const CLASS_9B: &[GradeEntryStudent] = &[
    GradeEntryStudent { id: "4", name: "David Wilson" },
    GradeEntryStudent { id: "5", name: "Emma Thompson" },
];

/// Students enrolled in `class` for grade entry; most classes have none yet
pub fn grade_entry_students(class: &str) -> &'static [GradeEntryStudent] {
    match class {
        "10A" => CLASS_10A,
        "9B" => CLASS_9B,
        _ => &[],
    }
}

pub fn stats() -> Vec<StatCard> {
    vec![
        stat("Total Students", "1,247", "+12% from last month", Trend::Up),
        stat("Total Teachers", "89", "+3% from last month", Trend::Up),
        stat("Fees Collected", "$245,680", "+18% from last month", Trend::Up),
        stat("Pending Reports", "23", "-5% from last month", Trend::Down),
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity { action: "New student enrollment", subject: "Sarah Johnson", time: "2 minutes ago" },
        Activity { action: "Grade submitted", subject: "Math - Class 10A", time: "15 minutes ago" },
        Activity { action: "Fee payment received", subject: "John Smith", time: "1 hour ago" },
        Activity { action: "Teacher added", subject: "Dr. Michael Brown", time: "3 hours ago" },
        Activity { action: "Report generated", subject: "Monthly Attendance", time: "5 hours ago" },
    ]
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event { title: "Parent-Teacher Conference", date: "Sep 15, 2024", time: "9:00 AM" },
        Event { title: "Mid-term Examinations", date: "Sep 20, 2024", time: "All Day" },
        Event { title: "Science Fair", date: "Sep 25, 2024", time: "2:00 PM" },
        Event { title: "Sports Day", date: "Oct 2, 2024", time: "8:00 AM" },
    ]
}

fn student(
    id: &str,
    name: &str,
    class: &str,
    age: u32,
    parent_contact: &str,
    email: &str,
    address: &str,
    status: RecordStatus,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        class: class.to_string(),
        age: Some(age),
        parent_contact: parent_contact.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        status,
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student("1", "Alice Johnson", "10A", 16, "+1 (555) 123-4567", "alice.johnson@email.com", "123 Main St, City, State", RecordStatus::Active),
        student("2", "Bob Smith", "9B", 15, "+1 (555) 234-5678", "bob.smith@email.com", "456 Oak Ave, City, State", RecordStatus::Active),
        student("3", "Carol Davis", "11A", 17, "+1 (555) 345-6789", "carol.davis@email.com", "789 Pine Rd, City, State", RecordStatus::Active),
        student("4", "David Wilson", "8C", 14, "+1 (555) 456-7890", "david.wilson@email.com", "321 Elm St, City, State", RecordStatus::Inactive),
    ]
}

fn teacher(
    id: &str,
    name: &str,
    subject: &str,
    email: &str,
    phone: &str,
    experience: u32,
    qualification: &str,
    status: RecordStatus,
) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: name.to_string(),
        subject: subject.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        experience: Some(experience),
        qualification: qualification.to_string(),
        status,
    }
}

pub fn teachers() -> Vec<Teacher> {
    vec![
        teacher("1", "Dr. Sarah Williams", "Mathematics", "sarah.williams@eastwood.edu", "+1 (555) 111-2222", 8, "PhD Mathematics", RecordStatus::Active),
        teacher("2", "Mr. John Davis", "Physics", "john.davis@eastwood.edu", "+1 (555) 222-3333", 12, "MSc Physics", RecordStatus::Active),
        teacher("3", "Ms. Emily Brown", "English Literature", "emily.brown@eastwood.edu", "+1 (555) 333-4444", 6, "MA English", RecordStatus::Active),
        teacher("4", "Dr. Michael Chen", "Chemistry", "michael.chen@eastwood.edu", "+1 (555) 444-5555", 15, "PhD Chemistry", RecordStatus::Inactive),
    ]
}

fn subject_grade(subject: &str, marks: i32, grade: &str) -> SubjectGrade {
    SubjectGrade {
        subject: subject.to_string(),
        marks,
        max_marks: 100,
        grade: grade.to_string(),
    }
}

/// Report cards already on file. Bob's Physics letter is kept as recorded.
pub fn saved_grades() -> Vec<StudentGrade> {
    vec![
        StudentGrade {
            student_id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            class: "10A".to_string(),
            grades: vec![
                subject_grade("Mathematics", 92, "A+"),
                subject_grade("Physics", 88, "A"),
                subject_grade("Chemistry", 85, "A"),
                subject_grade("Biology", 90, "A+"),
                subject_grade("English", 87, "A"),
                subject_grade("History", 84, "B+"),
            ],
            total_marks: 526,
            percentage: 87.67,
            overall_grade: "A".to_string(),
        },
        StudentGrade {
            student_id: "2".to_string(),
            student_name: "Bob Smith".to_string(),
            class: "10A".to_string(),
            grades: vec![
                subject_grade("Mathematics", 78, "B+"),
                subject_grade("Physics", 82, "A-"),
                subject_grade("Chemistry", 76, "B+"),
                subject_grade("Biology", 80, "B+"),
                subject_grade("English", 85, "A"),
                subject_grade("History", 79, "B+"),
            ],
            total_marks: 480,
            percentage: 80.0,
            overall_grade: "B+".to_string(),
        },
    ]
}

fn fee_record(
    id: &str,
    name: &str,
    class: &str,
    fee_type: &str,
    total: i64,
    paid: i64,
    due: (i32, u32, u32),
    last_payment: Option<(i32, u32, u32)>,
    status: FeeStatus,
) -> FeeRecord {
    let total_amount = Money::from_dollars(total);
    let paid_amount = Money::from_dollars(paid);
    FeeRecord {
        id: id.to_string(),
        student_id: id.to_string(),
        student_name: name.to_string(),
        class: class.to_string(),
        fee_type: fee_type.to_string(),
        total_amount,
        paid_amount,
        balance: total_amount - paid_amount,
        due_date: date(due.0, due.1, due.2),
        last_payment_date: last_payment.map(|(y, m, d)| date(y, m, d)),
        status,
    }
}

pub fn fee_records() -> Vec<FeeRecord> {
    vec![
        fee_record("1", "Alice Johnson", "10A", "Tuition Fee", 2500, 2500, (2024, 9, 1), Some((2024, 8, 25)), FeeStatus::Paid),
        fee_record("2", "Bob Smith", "9B", "Tuition Fee", 2500, 1500, (2024, 9, 1), Some((2024, 8, 15)), FeeStatus::Partial),
        fee_record("3", "Carol Davis", "11A", "Tuition Fee", 2500, 0, (2024, 8, 15), None, FeeStatus::Overdue),
        fee_record("4", "David Wilson", "8C", "Activity Fee", 500, 0, (2024, 9, 15), None, FeeStatus::Pending),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_entry_students() {
        assert_eq!(grade_entry_students("10A").len(), 3);
        assert_eq!(grade_entry_students("9B")[1].name, "Emma Thompson");
        assert!(grade_entry_students("12B").is_empty());
    }

    #[test]
    fn test_fee_seed_balances() {
        for record in fee_records() {
            assert_eq!(record.balance, record.total_amount - record.paid_amount);
        }
    }
}
