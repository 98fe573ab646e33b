//! Eastwood Academy Frontend App
//!
//! Router, shared context and the toast overlay. Every page owns its own
//! data; nothing here is passed down except the context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use school_core::SchoolConfig;

use crate::components::Toaster;
use crate::context::{AppContext, Toast};
use crate::pages::{admin, staff, student, teacher, Login, NotFound};

#[component]
pub fn App(config: SchoolConfig) -> impl IntoView {
    let toasts = signal(Vec::<Toast>::new());

    // Provide context to all children
    provide_context(AppContext::new(config, toasts));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Login />

                <Route path=path!("/dashboard") view=admin::Dashboard />
                <Route path=path!("/students") view=admin::Students />
                <Route path=path!("/teachers") view=admin::Teachers />
                <Route path=path!("/grades") view=admin::Grades />
                <Route path=path!("/fees") view=admin::Fees />

                <Route path=path!("/student-dashboard") view=student::Dashboard />
                <Route path=path!("/student-grades") view=student::Grades />
                <Route path=path!("/student-assignments") view=student::Assignments />
                <Route path=path!("/student-schedule") view=student::Schedule />
                <Route path=path!("/student-fees") view=student::Fees />
                <Route path=path!("/student-announcements") view=student::Announcements />
                <Route path=path!("/student-profile") view=student::Profile />

                <Route path=path!("/teacher-dashboard") view=teacher::Dashboard />
                <Route path=path!("/teacher-classes") view=teacher::Classes />
                <Route path=path!("/teacher-grades") view=teacher::Gradebook />
                <Route path=path!("/teacher-assignments") view=teacher::Assignments />
                <Route path=path!("/teacher-schedule") view=teacher::Schedule />
                <Route path=path!("/teacher-reports") view=teacher::Reports />
                <Route path=path!("/teacher-profile") view=teacher::Profile />
                <Route path=path!("/teacher-settings") view=teacher::Settings />

                <Route path=path!("/registrar-dashboard") view=staff::RegistrarDashboard />
                <Route path=path!("/dean-dashboard") view=staff::DeanDashboard />
                <Route path=path!("/vice-principal-dashboard") view=staff::VicePrincipalDashboard />
            </Routes>
        </Router>
        <Toaster />
    }
}
