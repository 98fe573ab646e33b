//! Teacher Gradebook
//!
//! Assessment scores per student with a running total and class statistics.

use crate::fees::csv_field;
use crate::grading::GradebookLetter;

/// A gradebook column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub id: &'static str,
    pub name: &'static str,
    pub max_points: u32,
    /// Nominal weight shown in the header, in percent
    pub weight: u32,
}

pub const ASSESSMENTS: &[Assessment] = &[
    Assessment { id: "quiz1", name: "Quiz 1", max_points: 100, weight: 10 },
    Assessment { id: "quiz2", name: "Quiz 2", max_points: 100, weight: 10 },
    Assessment { id: "assignment1", name: "Assignment 1", max_points: 100, weight: 15 },
    Assessment { id: "midterm", name: "Midterm Exam", max_points: 100, weight: 25 },
    Assessment { id: "assignment2", name: "Assignment 2", max_points: 100, weight: 15 },
    Assessment { id: "finalExam", name: "Final Exam", max_points: 100, weight: 25 },
];

/// Class sections the gradebook can switch between
pub const GRADEBOOK_CLASSES: &[(&str, &str)] = &[
    ("10A", "Mathematics - Grade 10A"),
    ("10B", "Mathematics - Grade 10B"),
    ("11", "Advanced Mathematics - Grade 11"),
    ("12", "Calculus - Grade 12"),
];

/// One student's row; `scores` lines up with [`ASSESSMENTS`]
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookRow {
    pub id: u32,
    pub name: String,
    pub roll_no: String,
    pub scores: Vec<Option<f64>>,
}

impl GradebookRow {
    /// Mean of the entered scores; assessments not yet taken are ignored
    pub fn total(&self) -> f64 {
        let entered: Vec<f64> = self.scores.iter().flatten().copied().collect();
        if entered.is_empty() {
            0.0
        } else {
            entered.iter().sum::<f64>() / entered.len() as f64
        }
    }

    pub fn letter(&self) -> GradebookLetter {
        GradebookLetter::from_score(self.total())
    }

    /// Overwrite one cell; indexes past the last assessment are ignored
    pub fn set_score(&mut self, index: usize, score: Option<f64>) {
        if let Some(cell) = self.scores.get_mut(index) {
            *cell = score;
        }
    }
}

/// Parse a score cell. Blank clears it; anything non-numeric is treated as
/// blank.
pub fn parse_score(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
}

/// Update one cell by whole-array replacement
pub fn update_score(rows: &[GradebookRow], row_id: u32, index: usize, input: &str) -> Vec<GradebookRow> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            if row.id == row_id {
                row.set_score(index, parse_score(input));
            }
            row
        })
        .collect()
}

/// Statistics cards above the gradebook
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradebookStats {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    /// Students with a total of 80 or more
    pub above_80: usize,
}

impl GradebookStats {
    pub fn from_rows(rows: &[GradebookRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let totals: Vec<f64> = rows.iter().map(GradebookRow::total).collect();
        Self {
            average: totals.iter().sum::<f64>() / totals.len() as f64,
            highest: totals.iter().copied().fold(f64::MIN, f64::max),
            lowest: totals.iter().copied().fold(f64::MAX, f64::min),
            above_80: totals.iter().filter(|total| **total >= 80.0).count(),
        }
    }
}

/// Spreadsheet export: one column per assessment, blank cells left empty
pub fn to_csv(rows: &[GradebookRow]) -> String {
    let mut header = vec!["Student".to_string(), "Roll No".to_string()];
    header.extend(ASSESSMENTS.iter().map(|assessment| assessment.name.to_string()));
    header.push("Total".to_string());
    header.push("Grade".to_string());

    let mut out = header.join(",");
    out.push('\n');
    for row in rows {
        let mut cells = vec![csv_field(&row.name), csv_field(&row.roll_no)];
        cells.extend(
            row.scores
                .iter()
                .map(|score| score.map(|score| score.to_string()).unwrap_or_default()),
        );
        cells.push(format!("{:.1}", row.total()));
        cells.push(row.letter().as_str().to_string());
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_seed_totals_are_means_of_entered_scores() {
        let rows = seed::teacher::gradebook_rows();
        let totals: Vec<f64> = rows.iter().map(GradebookRow::total).collect();
        for (total, expected) in totals.iter().zip([88.4, 81.6, 96.0, 74.6, 88.2]) {
            assert!(approx(*total, expected), "{total} != {expected}");
        }
    }

    #[test]
    fn test_letters() {
        let rows = seed::teacher::gradebook_rows();
        let letters: Vec<&str> = rows.iter().map(|row| row.letter().as_str()).collect();
        assert_eq!(letters, ["B", "B", "A", "C", "B"]);
    }

    #[test]
    fn test_stats() {
        let stats = GradebookStats::from_rows(&seed::teacher::gradebook_rows());
        assert!(approx(stats.average, 85.76));
        assert!(approx(stats.highest, 96.0));
        assert!(approx(stats.lowest, 74.6));
        assert_eq!(stats.above_80, 4);
        assert_eq!(GradebookStats::from_rows(&[]), GradebookStats::default());
    }

    #[test]
    fn test_entering_final_exam_moves_total() {
        let rows = seed::teacher::gradebook_rows();
        let updated = update_score(&rows, 4, 5, "100");
        // David: (373 + 100) / 6
        assert!(approx(updated[3].total(), 473.0 / 6.0));
        assert_eq!(updated[0], rows[0]);

        let cleared = update_score(&updated, 4, 5, "");
        assert!(approx(cleared[3].total(), 74.6));
    }

    #[test]
    fn test_csv_export() {
        let csv = to_csv(&seed::teacher::gradebook_rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Student,Roll No,Quiz 1,Quiz 2,Assignment 1,Midterm Exam,Assignment 2,Final Exam,Total,Grade"
        );
        assert_eq!(lines[1], "Alice Johnson,10A001,85,92,88,87,90,,88.4,B");
    }

    #[test]
    fn test_csv_quotes_names() {
        let row = GradebookRow {
            id: 9,
            name: "Smith, Jr.".to_string(),
            roll_no: "10A\"9".to_string(),
            scores: vec![Some(80.0), None, None, None, None, None],
        };
        let csv = to_csv(&[row]);
        assert_eq!(csv.lines().nth(1), Some("\"Smith, Jr.\",\"10A\"\"9\",80,,,,,,80.0,B"));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(" 87.5 "), Some(87.5));
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("NaN"), None);
    }

    #[test]
    fn test_empty_row_total_is_zero() {
        let row = GradebookRow { id: 9, name: "New".into(), roll_no: "X".into(), scores: vec![None; ASSESSMENTS.len()] };
        assert_eq!(row.total(), 0.0);
        assert_eq!(row.letter(), GradebookLetter::F);
    }
}
