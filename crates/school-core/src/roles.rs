//! User Roles
//!
//! Each role gets its own dashboard and sidebar. There is no authorization;
//! the role only decides which chrome a page is rendered with.

use serde::{Deserialize, Serialize};

/// A sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Glyph shown beside the label, and alone when the sidebar is collapsed
    pub icon: &'static str,
}

const fn nav(label: &'static str, path: &'static str, icon: &'static str) -> NavItem {
    NavItem { label, path, icon }
}

const ADMIN_NAV: &[NavItem] = &[
    nav("Dashboard", "/dashboard", "▦"),
    nav("Students", "/students", "👥"),
    nav("Teachers", "/teachers", "🧑‍🏫"),
    nav("Grades", "/grades", "🎓"),
    nav("Fees", "/fees", "$"),
];

const STUDENT_NAV: &[NavItem] = &[
    nav("Dashboard", "/student-dashboard", "▦"),
    nav("My Grades", "/student-grades", "🎓"),
    nav("Assignments", "/student-assignments", "📖"),
    nav("Schedule", "/student-schedule", "📅"),
    nav("Fees", "/student-fees", "$"),
    nav("Announcements", "/student-announcements", "🔔"),
    nav("Profile", "/student-profile", "👤"),
];

const TEACHER_NAV: &[NavItem] = &[
    nav("Dashboard", "/teacher-dashboard", "▦"),
    nav("My Classes", "/teacher-classes", "👥"),
    nav("Gradebook", "/teacher-grades", "🎓"),
    nav("Assignments", "/teacher-assignments", "📖"),
    nav("Schedule", "/teacher-schedule", "📅"),
    nav("Reports", "/teacher-reports", "📄"),
    nav("Profile", "/teacher-profile", "👤"),
    nav("Settings", "/teacher-settings", "⚙"),
];

// Only the dashboard exists; the other links land on the not-found page.
const VICE_PRINCIPAL_NAV: &[NavItem] = &[
    nav("Dashboard", "/vice-principal-dashboard", "▦"),
    nav("Grade Tracking", "/vice-principal-grades", "📊"),
    nav("Schedule Management", "/vice-principal-schedules", "📅"),
    nav("Teacher Management", "/vice-principal-teachers", "👥"),
    nav("Course Assignments", "/vice-principal-courses", "📖"),
    nav("Academic Reports", "/vice-principal-reports", "📋"),
    nav("Timetable", "/vice-principal-timetable", "🕒"),
    nav("Profile", "/vice-principal-profile", "👤"),
];

const REGISTRAR_NAV: &[NavItem] = &[nav("Dashboard", "/registrar-dashboard", "▦")];

const DEAN_NAV: &[NavItem] = &[nav("Dashboard", "/dean-dashboard", "▦")];

/// Signed-in user shown at the foot of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserChip {
    pub name: &'static str,
    pub detail: &'static str,
}

impl UserChip {
    /// First letters of the first two words
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|word| !word.ends_with('.'))
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Admin,
    Student,
    Teacher,
    Registrar,
    Dean,
    VicePrincipal,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Student,
        Role::Teacher,
        Role::Registrar,
        Role::Dean,
        Role::VicePrincipal,
    ];

    /// Stable identifier, also used as the login form's select value
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Registrar => "registrar",
            Role::Dean => "dean",
            Role::VicePrincipal => "vice-principal",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .unwrap_or_default()
    }

    pub fn nav_items(&self) -> &'static [NavItem] {
        match self {
            Role::Admin => ADMIN_NAV,
            Role::Student => STUDENT_NAV,
            Role::Teacher => TEACHER_NAV,
            Role::Registrar => REGISTRAR_NAV,
            Role::Dean => DEAN_NAV,
            Role::VicePrincipal => VICE_PRINCIPAL_NAV,
        }
    }

    /// Landing page after login
    pub fn dashboard_path(&self) -> &'static str {
        self.nav_items()[0].path
    }

    pub fn user_chip(&self) -> UserChip {
        let (name, detail) = match self {
            Role::Admin => ("Admin User", "Administrator"),
            Role::Student => ("Martha Konneh", "Grade 10-A"),
            Role::Teacher => ("Dr. Michael Chen", "Mathematics Teacher"),
            Role::Registrar => ("Comfort Sirleaf", "Registrar"),
            Role::Dean => ("James Freeman", "Dean of Students"),
            Role::VicePrincipal => ("David Kpangbai", "Vice Principal"),
        };
        UserChip { name, detail }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Registrar => "Registrar",
            Role::Dean => "Dean",
            Role::VicePrincipal => "Vice Principal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_select_value() {
        for role in Role::ALL {
            assert_eq!(Role::from_value(role.as_str()), role);
        }
        assert_eq!(Role::from_value("janitor"), Role::Admin);
    }

    #[test]
    fn test_nav_tables() {
        assert_eq!(Role::Admin.nav_items().len(), 5);
        assert_eq!(Role::Student.nav_items().len(), 7);
        assert_eq!(Role::Teacher.nav_items().len(), 8);
        assert_eq!(Role::VicePrincipal.nav_items().len(), 8);
        assert_eq!(Role::Registrar.nav_items().len(), 1);
        assert_eq!(Role::Teacher.nav_items()[2].path, "/teacher-grades");
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Admin.dashboard_path(), "/dashboard");
        assert_eq!(Role::Dean.dashboard_path(), "/dean-dashboard");
        assert_eq!(Role::VicePrincipal.dashboard_path(), "/vice-principal-dashboard");
    }

    #[test]
    fn test_initials_skip_titles() {
        assert_eq!(Role::Teacher.user_chip().initials(), "MC");
        assert_eq!(Role::Student.user_chip().initials(), "MK");
    }
}
