//! Coursework and Announcements
//!
//! Assignment and announcement records with the counts the pages show.

use chrono::{Duration, NaiveDate};

use crate::error::CourseworkError;
use crate::fees::csv_field;
use crate::grading::parse_leading_int;
use crate::seed;

/// Student-side assignment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
    Overdue,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Submitted => "submitted",
            AssignmentStatus::Graded => "graded",
            AssignmentStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: u32,
    pub title: &'static str,
    pub subject: &'static str,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub description: &'static str,
    pub points: u32,
    pub score: Option<u32>,
}

/// Stat cards on the student assignments page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssignmentSummary {
    pub pending: usize,
    pub submitted: usize,
    pub graded: usize,
    /// Mean of score/points over scored work, in percent
    pub average_score: Option<f64>,
}

impl AssignmentSummary {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let count = |status| assignments.iter().filter(|a| a.status == status).count();
        let ratios: Vec<f64> = assignments
            .iter()
            .filter_map(|a| a.score.filter(|_| a.points > 0).map(|score| f64::from(score) / f64::from(a.points)))
            .collect();
        let average_score = if ratios.is_empty() {
            None
        } else {
            Some(ratios.iter().sum::<f64>() / ratios.len() as f64 * 100.0)
        };

        Self {
            pending: count(AssignmentStatus::Pending),
            submitted: count(AssignmentStatus::Submitted),
            graded: count(AssignmentStatus::Graded),
            average_score,
        }
    }
}

/// Mark a pending assignment as handed in. Anything else is left as is.
pub fn submit_assignment(assignments: &[Assignment], id: u32) -> Vec<Assignment> {
    assignments
        .iter()
        .map(|assignment| {
            if assignment.id == id && assignment.status == AssignmentStatus::Pending {
                Assignment { status: AssignmentStatus::Submitted, ..assignment.clone() }
            } else {
                assignment.clone()
            }
        })
        .collect()
}

/// Teacher-side assignment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseworkStatus {
    Active,
    Grading,
    Completed,
    Overdue,
}

impl CourseworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseworkStatus::Active => "active",
            CourseworkStatus::Grading => "grading",
            CourseworkStatus::Completed => "completed",
            CourseworkStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherAssignment {
    pub id: u32,
    pub title: String,
    pub class: String,
    pub due_date: NaiveDate,
    pub assigned_date: NaiveDate,
    pub total_points: u32,
    pub submitted: u32,
    pub total_students: u32,
    pub status: CourseworkStatus,
    pub description: String,
}

impl TeacherAssignment {
    pub fn submission_rate(&self) -> u32 {
        submission_rate(self.submitted, self.total_students)
    }
}

/// Submitted share rounded to a whole percent; 0 for an empty class
pub fn submission_rate(submitted: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(submitted) / f64::from(total) * 100.0).round() as u32
}

pub fn count_coursework(assignments: &[TeacherAssignment], status: CourseworkStatus) -> usize {
    assignments.iter().filter(|a| a.status == status).count()
}

/// Raw fields of the "Create New Assignment" dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseworkForm {
    pub title: String,
    /// Gradebook class id (`10A`, `11`, ...)
    pub class: String,
    /// `YYYY-MM-DD` from the date input
    pub due_date: String,
    pub total_points: String,
    pub description: String,
}

/// Points used when the field is left blank
pub const DEFAULT_POINTS: u32 = 100;

/// Append a new active assignment with nothing submitted yet.
///
/// The class size comes from the teacher's class list; an unknown class
/// counts as empty.
pub fn create_coursework(
    assignments: &[TeacherAssignment],
    form: &CourseworkForm,
    today: NaiveDate,
) -> Result<(Vec<TeacherAssignment>, TeacherAssignment), CourseworkError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(CourseworkError::MissingTitle);
    }
    if form.class.is_empty() {
        return Err(CourseworkError::MissingClass);
    }
    let due_date = NaiveDate::parse_from_str(form.due_date.trim(), "%Y-%m-%d")
        .map_err(|_| CourseworkError::InvalidDueDate)?;
    let total_points = parse_leading_int(&form.total_points)
        .and_then(|points| u32::try_from(points).ok())
        .unwrap_or(DEFAULT_POINTS);
    let total_students = seed::teacher::classes()
        .iter()
        .find(|class| class.grade == form.class)
        .map(|class| class.students)
        .unwrap_or(0);

    let created = TeacherAssignment {
        id: assignments.len() as u32 + 1,
        title: title.to_string(),
        class: format!("Grade {}", form.class),
        due_date,
        assigned_date: today,
        total_points,
        submitted: 0,
        total_students,
        status: CourseworkStatus::Active,
        description: form.description.trim().to_string(),
    };
    let mut updated = assignments.to_vec();
    updated.push(created.clone());
    Ok((updated, created))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: u32,
    pub title: &'static str,
    /// Markdown
    pub content: &'static str,
    pub author: &'static str,
    pub date: NaiveDate,
    pub category: &'static str,
    pub priority: Priority,
}

/// Stat cards on the announcements page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnouncementStats {
    pub total: usize,
    pub high_priority: usize,
    pub academic: usize,
    /// Posted within the last seven days (exclusive of the seventh)
    pub this_week: usize,
}

impl AnnouncementStats {
    pub fn compute(announcements: &[Announcement], today: NaiveDate) -> Self {
        let week_start = today - Duration::days(7);
        Self {
            total: announcements.len(),
            high_priority: announcements.iter().filter(|a| a.priority == Priority::High).count(),
            academic: announcements.iter().filter(|a| a.category == "Academic").count(),
            this_week: announcements.iter().filter(|a| a.date > week_start).count(),
        }
    }
}

/// Term performance for one class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassReport {
    pub class: &'static str,
    pub students: u32,
    pub average_grade: f64,
    pub pass_rate: f64,
    pub attendance_rate: f64,
    pub top_performer: &'static str,
    /// Signed change against last term, e.g. `+3.2%`
    pub improvement: &'static str,
}

impl ClassReport {
    pub fn improved(&self) -> bool {
        self.improvement.starts_with('+')
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentReport {
    pub kind: &'static str,
    pub class: &'static str,
    pub average: f64,
    pub high: u32,
    pub low: u32,
    pub completion_rate: f64,
}

/// Headline numbers across all class reports
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportSummary {
    pub students: u32,
    pub average_grade: f64,
    pub pass_rate: f64,
    pub attendance_rate: f64,
}

impl ReportSummary {
    /// Student count is summed; rates are plain means over classes
    pub fn from_reports(reports: &[ClassReport]) -> Self {
        if reports.is_empty() {
            return Self::default();
        }
        let n = reports.len() as f64;
        let mean = |field: fn(&ClassReport) -> f64| reports.iter().map(field).sum::<f64>() / n;
        Self {
            students: reports.iter().map(|r| r.students).sum(),
            average_grade: mean(|r| r.average_grade),
            pass_rate: mean(|r| r.pass_rate),
            attendance_rate: mean(|r| r.attendance_rate),
        }
    }
}

/// Spreadsheet export of the class overview
pub fn class_reports_csv(reports: &[ClassReport]) -> String {
    let mut out = String::from("Class,Students,Average Grade,Pass Rate,Attendance Rate,Top Performer,Improvement\n");
    for report in reports {
        let row = [
            csv_field(report.class),
            report.students.to_string(),
            format!("{:.1}", report.average_grade),
            format!("{:.1}", report.pass_rate),
            format!("{:.1}", report.attendance_rate),
            csv_field(report.top_performer),
            report.improvement.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Single-assessment export
pub fn assessment_csv(report: &AssessmentReport) -> String {
    format!(
        "Assessment,Class,Average,Highest,Lowest,Completion Rate\n{},{},{:.1},{},{},{:.1}\n",
        csv_field(report.kind),
        csv_field(report.class),
        report.average,
        report.high,
        report.low,
        report.completion_rate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_submission_rate() {
        assert_eq!(submission_rate(24, 28), 86);
        assert_eq!(submission_rate(15, 19), 79);
        assert_eq!(submission_rate(22, 22), 100);
        assert_eq!(submission_rate(3, 0), 0);
    }

    #[test]
    fn test_student_assignment_summary() {
        let summary = AssignmentSummary::from_assignments(&seed::student::assignments());
        assert_eq!((summary.pending, summary.submitted, summary.graded), (2, 1, 1));
        let average = summary.average_score.unwrap();
        assert_eq!(average.round(), 93.0);
    }

    #[test]
    fn test_submit_assignment_only_moves_pending() {
        let seeded = seed::student::assignments();
        let pending = seeded.iter().find(|a| a.status == AssignmentStatus::Pending).unwrap().id;
        let graded = seeded.iter().find(|a| a.status == AssignmentStatus::Graded).unwrap().id;

        let updated = submit_assignment(&seeded, pending);
        let summary = AssignmentSummary::from_assignments(&updated);
        assert_eq!((summary.pending, summary.submitted), (1, 2));

        assert_eq!(submit_assignment(&seeded, graded), seeded);
    }

    #[test]
    fn test_create_coursework() {
        let seeded = seed::teacher::assignments();
        let today = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let form = CourseworkForm {
            title: " Linear Inequalities ".to_string(),
            class: "10B".to_string(),
            due_date: "2024-01-30".to_string(),
            total_points: String::new(),
            description: "Problems 1-10".to_string(),
        };

        let (updated, created) = create_coursework(&seeded, &form, today).unwrap();
        assert_eq!(updated.len(), 5);
        assert_eq!(created.id, 5);
        assert_eq!(created.title, "Linear Inequalities");
        assert_eq!(created.class, "Grade 10B");
        assert_eq!(created.total_points, DEFAULT_POINTS);
        assert_eq!((created.submitted, created.total_students), (0, 26));
        assert_eq!(created.assigned_date, today);
        assert_eq!(count_coursework(&updated, CourseworkStatus::Active), 3);
    }

    #[test]
    fn test_create_coursework_validation() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let mut form = CourseworkForm::default();
        assert_eq!(create_coursework(&[], &form, today), Err(CourseworkError::MissingTitle));
        form.title = "Quiz".to_string();
        assert_eq!(create_coursework(&[], &form, today), Err(CourseworkError::MissingClass));
        form.class = "12".to_string();
        form.due_date = "next week".to_string();
        assert_eq!(create_coursework(&[], &form, today), Err(CourseworkError::InvalidDueDate));
    }

    #[test]
    fn test_coursework_counts() {
        let work = seed::teacher::assignments();
        assert_eq!(count_coursework(&work, CourseworkStatus::Active), 2);
        assert_eq!(count_coursework(&work, CourseworkStatus::Grading), 1);
        assert_eq!(count_coursework(&work, CourseworkStatus::Completed), 1);
    }

    #[test]
    fn test_announcement_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let stats = AnnouncementStats::compute(&seed::student::announcements(), today);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.academic, 3);
        // Jan 10, 8 and 5 fall inside the week; Jan 3 is exactly seven days back.
        assert_eq!(stats.this_week, 3);
    }

    #[test]
    fn test_report_summary() {
        let summary = ReportSummary::from_reports(&seed::teacher::class_reports());
        assert_eq!(summary.students, 95);
        assert_eq!(crate::format::one_decimal(summary.average_grade), "86.2");
        assert_eq!(crate::format::one_decimal(summary.pass_rate), "92.9");
        assert_eq!(crate::format::one_decimal(summary.attendance_rate), "94.9");
        assert_eq!(ReportSummary::from_reports(&[]), ReportSummary::default());
    }

    #[test]
    fn test_class_reports_csv() {
        let csv = class_reports_csv(&seed::teacher::class_reports());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Grade 10A - Mathematics,28,85.4,92.9,94.2,Carol Davis (96.0%),+3.2%");
    }

    #[test]
    fn test_assessment_csv() {
        let report = seed::teacher::assessment_reports()[2];
        assert_eq!(
            assessment_csv(&report).lines().nth(1),
            Some("Assignment 2,Grade 12,91.4,100,78,94.7")
        );
    }
}
