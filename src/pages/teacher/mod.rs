//! Teacher Portal

mod assignments;
mod classes;
mod dashboard;
mod gradebook;
mod profile;
mod reports;
mod schedule;
mod settings;

pub use assignments::Assignments;
pub use classes::Classes;
pub use dashboard::Dashboard;
pub use gradebook::Gradebook;
pub use profile::Profile;
pub use reports::Reports;
pub use schedule::Schedule;
pub use settings::Settings;
