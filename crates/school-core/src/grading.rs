//! Grade Banding
//!
//! Fixed, non-configurable score → letter thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Report-card letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    F,
}

impl LetterGrade {
    /// Band a score. Total over every `f64`: anything below 40, including
    /// NaN, is an F.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            LetterGrade::APlus
        } else if score >= 80.0 {
            LetterGrade::A
        } else if score >= 70.0 {
            LetterGrade::BPlus
        } else if score >= 60.0 {
            LetterGrade::B
        } else if score >= 50.0 {
            LetterGrade::CPlus
        } else if score >= 40.0 {
            LetterGrade::C
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-band scale used by the teacher gradebook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradebookLetter {
    A,
    B,
    C,
    D,
    F,
}

impl GradebookLetter {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            GradebookLetter::A
        } else if score >= 80.0 {
            GradebookLetter::B
        } else if score >= 70.0 {
            GradebookLetter::C
        } else if score >= 60.0 {
            GradebookLetter::D
        } else {
            GradebookLetter::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradebookLetter::A => "A",
            GradebookLetter::B => "B",
            GradebookLetter::C => "C",
            GradebookLetter::D => "D",
            GradebookLetter::F => "F",
        }
    }
}

/// Colour family a grade is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTone {
    Success,
    Warning,
    Destructive,
}

impl GradeTone {
    /// Tone by the grade's first letter. Works for recorded grades outside
    /// the banding scale too (`"A-"`).
    pub fn for_grade(grade: &str) -> Self {
        if grade.starts_with('A') {
            GradeTone::Success
        } else if grade.starts_with('B') {
            GradeTone::Warning
        } else {
            GradeTone::Destructive
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GradeTone::Success => "tone-success",
            GradeTone::Warning => "tone-warning",
            GradeTone::Destructive => "tone-destructive",
        }
    }
}

/// Integer-prefix parse of a marks field: leading whitespace, optional sign,
/// then digits up to the first non-digit. `"92"` and `"92.7"` give 92;
/// blank or non-numeric input gives `None`.
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let text = input.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i32>().ok().map(|value| value * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_examples() {
        assert_eq!(LetterGrade::from_score(92.0), LetterGrade::APlus);
        assert_eq!(LetterGrade::from_score(80.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(69.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(39.0), LetterGrade::F);
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (90.0, "A+"),
            (89.99, "A"),
            (70.0, "B+"),
            (60.0, "B"),
            (50.0, "C+"),
            (40.0, "C"),
            (39.999, "F"),
        ];
        for (score, expected) in cases {
            assert_eq!(LetterGrade::from_score(score).as_str(), expected, "score {score}");
        }
    }

    #[test]
    fn test_band_is_total() {
        assert_eq!(LetterGrade::from_score(f64::NAN), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(-10.0), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(250.0), LetterGrade::APlus);
        assert_eq!(LetterGrade::from_score(f64::INFINITY), LetterGrade::APlus);
    }

    #[test]
    fn test_band_is_monotonic() {
        let rank = |g: LetterGrade| match g {
            LetterGrade::F => 0,
            LetterGrade::C => 1,
            LetterGrade::CPlus => 2,
            LetterGrade::B => 3,
            LetterGrade::BPlus => 4,
            LetterGrade::A => 5,
            LetterGrade::APlus => 6,
        };
        let mut previous = rank(LetterGrade::from_score(-1.0));
        for tenth in 0..=1000 {
            let current = rank(LetterGrade::from_score(tenth as f64 / 10.0));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&LetterGrade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::from_str::<LetterGrade>("\"C+\"").unwrap(), LetterGrade::CPlus);
    }

    #[test]
    fn test_gradebook_scale() {
        assert_eq!(GradebookLetter::from_score(96.0), GradebookLetter::A);
        assert_eq!(GradebookLetter::from_score(88.4), GradebookLetter::B);
        assert_eq!(GradebookLetter::from_score(74.6), GradebookLetter::C);
        assert_eq!(GradebookLetter::from_score(60.0), GradebookLetter::D);
        assert_eq!(GradebookLetter::from_score(59.9), GradebookLetter::F);
    }

    #[test]
    fn test_tone_by_first_letter() {
        assert_eq!(GradeTone::for_grade("A-"), GradeTone::Success);
        assert_eq!(GradeTone::for_grade("B+"), GradeTone::Warning);
        assert_eq!(GradeTone::for_grade("C"), GradeTone::Destructive);
        assert_eq!(GradeTone::for_grade("F"), GradeTone::Destructive);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("92"), Some(92));
        assert_eq!(parse_leading_int("  92.7"), Some(92));
        assert_eq!(parse_leading_int("88abc"), Some(88));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
