//! My Classes

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use school_core::seed::teacher;
use school_core::Role;

use crate::components::{DashboardLayout, StatCard};

#[component]
pub fn Classes() -> impl IntoView {
    let classes = teacher::classes();
    let total = teacher::total_students(&classes);
    let navigate = use_navigate();
    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: web_sys::MouseEvent| navigate(path, Default::default())
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header">
                <h1>"My Classes"</h1>
                <p class="muted">"Manage your classes and student information"</p>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Total Classes" value=classes.len().to_string() tone="tone-primary" />
                <StatCard title="Total Students" value=total.to_string() tone="tone-info" />
                <StatCard title="Active Courses" value=classes.len().to_string() tone="tone-success" />
                <StatCard title="Avg Attendance" value="95%".to_string() tone="tone-warning" />
            </div>

            <h2>"Your Classes"</h2>
            {classes.into_iter().map(|class| view! {
                <section class="card hoverable">
                    <div class="list-row">
                        <div>
                            <h3>{class.name}</h3>
                            <p class="muted">{class.semester}</p>
                        </div>
                        <span class="pill outline">{class.subject}</span>
                    </div>
                    <div class="tile-grid three small">
                        <span>{format!("👥 {} Students", class.students)}</span>
                        <span>{format!("🕑 {}", class.schedule)}</span>
                        <span>{format!("📖 {}", class.room)}</span>
                    </div>
                    <div class="button-row">
                        <button class="btn primary small">"👁 View Students"</button>
                        <button class="btn outline small">"Take Attendance"</button>
                        <button class="btn outline small" on:click=go("/teacher-grades")>"Grade Book"</button>
                        <button class="btn outline small" on:click=go("/teacher-assignments")>"Assignments"</button>
                    </div>
                </section>
            }).collect_view()}

            <section class="card">
                <h3>"Recent Class Activities"</h3>
                <ul class="item-list">
                    {teacher::class_activities().into_iter().map(|(class, activity, when)| view! {
                        <li class="list-row bordered">
                            <div>
                                <p class="strong">{class}</p>
                                <p class="muted small">{activity}</p>
                            </div>
                            <span class="muted small">{format!("📅 {}", when)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </DashboardLayout>
    }
}
