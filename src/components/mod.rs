//! UI Components
//!
//! Layout chrome and small building blocks shared by the pages.

mod layout;
mod modal;
mod sidebar;
mod stat_card;
mod toaster;

pub use layout::DashboardLayout;
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use stat_card::{Field, ProgressBar, StatCard, StatGrid};
pub use toaster::Toaster;
