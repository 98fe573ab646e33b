//! Student and Teacher Rosters
//!
//! Flat contact/enrollment records managed by the admin pages.

use serde::{Deserialize, Serialize};

use crate::entity::{next_id, Entity};
use crate::grading::parse_leading_int;

/// Class sections offered by the school
pub const CLASSES: &[&str] = &[
    "8A", "8B", "8C", "9A", "9B", "9C", "10A", "10B", "10C", "11A", "11B", "11C", "12A", "12B",
];

/// Subjects a teacher can be hired for
pub const TEACHING_SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English Literature",
    "History",
    "Geography",
    "Computer Science",
    "Art",
    "Music",
    "Physical Education",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub class: String,
    /// `None` when the form's age field did not hold a number
    pub age: Option<u32>,
    pub parent_contact: String,
    pub email: String,
    pub address: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub email: String,
    pub phone: String,
    /// Years of experience
    pub experience: Option<u32>,
    pub qualification: String,
    pub status: RecordStatus,
}

impl Entity for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw "Add Student" form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub class: String,
    pub age: String,
    pub parent_contact: String,
    pub email: String,
    pub address: String,
}

/// Raw "Add Teacher" form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherForm {
    pub name: String,
    pub subject: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub qualification: String,
}

fn parse_count(text: &str) -> Option<u32> {
    parse_leading_int(text).and_then(|value| u32::try_from(value).ok())
}

/// Append a student built from the form. Fields are taken as typed; the new
/// record is always Active.
pub fn add_student(students: &[Student], form: &StudentForm) -> (Vec<Student>, Student) {
    let student = Student {
        id: next_id(students),
        name: form.name.clone(),
        class: form.class.clone(),
        age: parse_count(&form.age),
        parent_contact: form.parent_contact.clone(),
        email: form.email.clone(),
        address: form.address.clone(),
        status: RecordStatus::Active,
    };
    let mut updated = students.to_vec();
    updated.push(student.clone());
    (updated, student)
}

/// Append a teacher built from the form
pub fn add_teacher(teachers: &[Teacher], form: &TeacherForm) -> (Vec<Teacher>, Teacher) {
    let teacher = Teacher {
        id: next_id(teachers),
        name: form.name.clone(),
        subject: form.subject.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        experience: parse_count(&form.experience),
        qualification: form.qualification.clone(),
        status: RecordStatus::Active,
    };
    let mut updated = teachers.to_vec();
    updated.push(teacher.clone());
    (updated, teacher)
}

/// Fields the roster search and dropdown look at
pub trait RosterEntry: Entity {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    /// Class for students, subject for teachers
    fn group(&self) -> &str;
}

impl RosterEntry for Student {
    fn name(&self) -> &str {
        &self.name
    }
    fn email(&self) -> &str {
        &self.email
    }
    fn group(&self) -> &str {
        &self.class
    }
}

impl RosterEntry for Teacher {
    fn name(&self) -> &str {
        &self.name
    }
    fn email(&self) -> &str {
        &self.email
    }
    fn group(&self) -> &str {
        &self.subject
    }
}

/// Case-insensitive search on name or email, plus an exact group match
/// unless `group_filter` is `"all"`
pub fn filter_roster<T: RosterEntry>(entries: &[T], search: &str, group_filter: &str) -> Vec<T> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            let matches_search = entry.name().to_lowercase().contains(&needle)
                || entry.email().to_lowercase().contains(&needle);
            let matches_group = group_filter == "all" || entry.group() == group_filter;
            matches_search && matches_group
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::remove_by_id;
    use crate::seed;

    #[test]
    fn test_add_student_assigns_length_id() {
        let students = seed::admin::students();
        let form = StudentForm {
            name: "Emma Thompson".to_string(),
            class: "9B".to_string(),
            age: "15".to_string(),
            ..Default::default()
        };
        let (updated, added) = add_student(&students, &form);
        assert_eq!(updated.len(), students.len() + 1);
        assert_eq!(added.id, "5");
        assert_eq!(added.age, Some(15));
        assert_eq!(added.status, RecordStatus::Active);
    }

    #[test]
    fn test_add_student_accepts_blank_age() {
        let (_, added) = add_student(&[], &StudentForm::default());
        assert_eq!(added.id, "1");
        assert_eq!(added.age, None);
    }

    #[test]
    fn test_add_teacher_parses_experience() {
        let form = TeacherForm {
            name: "Ms. Ada Lovelace".to_string(),
            experience: "7 years".to_string(),
            ..Default::default()
        };
        let (_, added) = add_teacher(&seed::admin::teachers(), &form);
        assert_eq!(added.id, "5");
        assert_eq!(added.experience, Some(7));
    }

    #[test]
    fn test_filter_students() {
        let students = seed::admin::students();
        assert_eq!(filter_roster(&students, "", "all").len(), 4);
        assert_eq!(filter_roster(&students, "ALICE", "all").len(), 1);
        assert_eq!(filter_roster(&students, "email.com", "9B")[0].name, "Bob Smith");
        assert!(filter_roster(&students, "alice", "9B").is_empty());
    }

    #[test]
    fn test_filter_teachers_by_subject() {
        let teachers = seed::admin::teachers();
        let physics = filter_roster(&teachers, "", "Physics");
        assert_eq!(physics.len(), 1);
        assert_eq!(physics[0].name, "Mr. John Davis");
        assert_eq!(filter_roster(&teachers, "eastwood.edu", "all").len(), 4);
    }

    #[test]
    fn test_delete_student() {
        let (remaining, removed) = remove_by_id(&seed::admin::students(), "2");
        assert_eq!(remaining.len(), 3);
        assert_eq!(removed.map(|s| s.name), Some("Bob Smith".to_string()));
    }
}
