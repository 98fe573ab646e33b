//! Student Portal

mod announcements;
mod assignments;
mod dashboard;
mod fees;
mod grades;
mod profile;
mod schedule;

pub use announcements::Announcements;
pub use assignments::Assignments;
pub use dashboard::Dashboard;
pub use fees::Fees;
pub use grades::Grades;
pub use profile::Profile;
pub use schedule::Schedule;
