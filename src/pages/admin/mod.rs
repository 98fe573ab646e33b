//! Administration Portal

mod dashboard;
mod fees;
mod grades;
mod students;
mod teachers;

pub use dashboard::Dashboard;
pub use fees::Fees;
pub use grades::Grades;
pub use students::Students;
pub use teachers::Teachers;
