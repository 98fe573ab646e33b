//! Grade Entry
//!
//! Per-subject marks entered for one student, banded into letter grades
//! and summarised into a report card.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GradeEntryError;
use crate::grading::{parse_leading_int, LetterGrade};
use crate::seed;

/// A subject on the report card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectDef {
    pub name: &'static str,
    /// Form field key
    pub key: &'static str,
    pub max_marks: i32,
}

pub const SUBJECTS: &[SubjectDef] = &[
    SubjectDef { name: "Mathematics", key: "mathematics", max_marks: 100 },
    SubjectDef { name: "Physics", key: "physics", max_marks: 100 },
    SubjectDef { name: "Chemistry", key: "chemistry", max_marks: 100 },
    SubjectDef { name: "Biology", key: "biology", max_marks: 100 },
    SubjectDef { name: "English", key: "english", max_marks: 100 },
    SubjectDef { name: "History", key: "history", max_marks: 100 },
];

/// Marks available across all subjects
pub fn max_total_marks() -> i32 {
    SUBJECTS.iter().map(|subject| subject.max_marks).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectGrade {
    pub subject: String,
    pub marks: i32,
    pub max_marks: i32,
    /// Recorded letter. Seeded records may hold letters outside the banding
    /// scale (`"A-"`), so this stays a string.
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGrade {
    pub student_id: String,
    pub student_name: String,
    pub class: String,
    pub grades: Vec<SubjectGrade>,
    pub total_marks: i32,
    pub percentage: f64,
    pub overall_grade: String,
}

/// Raw text typed into the subject fields, keyed by [`SubjectDef::key`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeInput {
    values: BTreeMap<String, String>,
}

impl GradeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Build the report card for one student.
///
/// Every subject counts: a blank or non-numeric field is 0 marks, and
/// marks are held to `0..=max_marks`. The percentage is total over the
/// maximum across all subjects.
pub fn compute_student_grade(
    student_id: &str,
    student_name: &str,
    class: &str,
    input: &GradeInput,
) -> StudentGrade {
    let grades: Vec<SubjectGrade> = SUBJECTS
        .iter()
        .map(|subject| {
            let marks = parse_leading_int(input.get(subject.key))
                .unwrap_or(0)
                .clamp(0, subject.max_marks);
            SubjectGrade {
                subject: subject.name.to_string(),
                marks,
                max_marks: subject.max_marks,
                grade: LetterGrade::from_score(f64::from(marks)).to_string(),
            }
        })
        .collect();

    let total_marks: i32 = grades.iter().map(|grade| grade.marks).sum();
    let percentage = f64::from(total_marks) / f64::from(max_total_marks()) * 100.0;

    StudentGrade {
        student_id: student_id.to_string(),
        student_name: student_name.to_string(),
        class: class.to_string(),
        grades,
        total_marks,
        percentage,
        overall_grade: LetterGrade::from_score(percentage).to_string(),
    }
}

/// Save the entered marks for the selected student.
///
/// Replaces the student's existing card or appends a new one. Blank
/// selections are rejected before anything is computed.
pub fn submit_grades(
    saved: &[StudentGrade],
    class: &str,
    student_id: &str,
    input: &GradeInput,
) -> Result<(Vec<StudentGrade>, StudentGrade), GradeEntryError> {
    if class.is_empty() || student_id.is_empty() {
        return Err(GradeEntryError::MissingSelection);
    }
    let student = seed::admin::grade_entry_students(class)
        .iter()
        .find(|student| student.id == student_id)
        .ok_or_else(|| GradeEntryError::UnknownStudent(student_id.to_string()))?;

    let card = compute_student_grade(student.id, student.name, class, input);
    let mut updated = saved.to_vec();
    match updated.iter_mut().find(|existing| existing.student_id == student_id) {
        Some(existing) => *existing = card.clone(),
        None => updated.push(card.clone()),
    }
    Ok((updated, card))
}

/// Pretty JSON for the "Report Card" download
pub fn report_card_json(card: &StudentGrade) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_subject_input() {
        let card = compute_student_grade("1", "Alice Johnson", "10A", &GradeInput::new().with("mathematics", "92"));
        assert_eq!(card.grades[0].subject, "Mathematics");
        assert_eq!(card.grades[0].grade, "A+");
        assert!(card.grades[1..].iter().all(|g| g.marks == 0 && g.grade == "F"));
        assert_eq!(card.total_marks, 92);
        assert!((card.percentage - 92.0 / 6.0).abs() < 1e-9);
        assert_eq!(card.overall_grade, "F");
    }

    #[test]
    fn test_marks_held_to_subject_range() {
        let input = GradeInput::new()
            .with("mathematics", "2000000000")
            .with("physics", "2000000000")
            .with("chemistry", "-40");
        let card = compute_student_grade("1", "Alice Johnson", "10A", &input);
        assert_eq!(card.grades[0].marks, 100);
        assert_eq!(card.grades[1].marks, 100);
        assert_eq!(card.grades[2].marks, 0);
        assert_eq!(card.total_marks, 200);
        assert!((card.percentage - 200.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_card() {
        let input = SUBJECTS
            .iter()
            .zip(["92", "88", "85", "90", "87", "84"])
            .fold(GradeInput::new(), |input, (subject, marks)| input.with(subject.key, marks));
        let card = compute_student_grade("1", "Alice Johnson", "10A", &input);
        assert_eq!(card.total_marks, 526);
        assert!((card.percentage - 87.666_666).abs() < 1e-3);
        assert_eq!(card.overall_grade, "A");
        assert_eq!(card.grades[5].grade, "A");
    }

    #[test]
    fn test_submit_requires_selection() {
        let input = GradeInput::new();
        assert_eq!(submit_grades(&[], "", "1", &input), Err(GradeEntryError::MissingSelection));
        assert_eq!(submit_grades(&[], "10A", "", &input), Err(GradeEntryError::MissingSelection));
    }

    #[test]
    fn test_submit_rejects_student_from_other_class() {
        let result = submit_grades(&[], "9B", "1", &GradeInput::new());
        assert_eq!(result, Err(GradeEntryError::UnknownStudent("1".to_string())));
    }

    #[test]
    fn test_submit_upserts_by_student() {
        let saved = seed::admin::saved_grades();
        let input = GradeInput::new().with("mathematics", "100");

        let (replaced, card) = submit_grades(&saved, "10A", "2", &input).unwrap();
        assert_eq!(replaced.len(), saved.len());
        assert_eq!(replaced[1], card);
        assert_eq!(card.student_name, "Bob Smith");

        let (appended, card) = submit_grades(&saved, "9B", "5", &input).unwrap();
        assert_eq!(appended.len(), saved.len() + 1);
        assert_eq!(card.student_name, "Emma Thompson");
    }

    #[test]
    fn test_input_clear() {
        let mut input = GradeInput::new().with("physics", "70");
        assert_eq!(input.get("physics"), "70");
        input.clear();
        assert_eq!(input.get("physics"), "");
    }

    #[test]
    fn test_report_card_json_uses_camel_case() {
        let card = compute_student_grade("4", "David Wilson", "9B", &GradeInput::new());
        let json = report_card_json(&card).unwrap();
        assert!(json.contains("\"studentName\": \"David Wilson\""));
        assert!(json.contains("\"overallGrade\": \"F\""));
    }
}
