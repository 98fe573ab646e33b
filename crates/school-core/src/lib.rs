//! School Core
//!
//! Records, seed data and the small amount of business logic behind the
//! Eastwood Academy portal: the fee ledger, grade banding, grade entry,
//! the teacher gradebook and roster bookkeeping.
//!
//! Nothing here touches the browser, so every rule is testable natively.

mod entity;
mod error;

pub mod academics;
pub mod config;
pub mod fees;
pub mod format;
pub mod grade_entry;
pub mod gradebook;
pub mod grading;
pub mod money;
pub mod roles;
pub mod roster;
pub mod schedule;
pub mod seed;

#[cfg(test)]
mod tests;

pub use config::SchoolConfig;
pub use entity::{find_by_id, keyed_rows, next_id, remove_by_id, Entity};
pub use error::{ConfigError, CourseworkError, FeeError, GradeEntryError, MoneyParseError};
pub use fees::{FeeRecord, FeeStatus, FeeTotals, StatusFilter};
pub use grade_entry::{GradeInput, StudentGrade, SubjectGrade};
pub use grading::{GradeTone, GradebookLetter, LetterGrade};
pub use money::Money;
pub use roles::{NavItem, Role, UserChip};
pub use roster::{RecordStatus, Student, Teacher};
