//! Teacher Dashboard

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use school_core::seed::teacher;
use school_core::Role;

use crate::components::{DashboardLayout, StatCard};

#[component]
pub fn Dashboard() -> impl IntoView {
    let data = teacher::overview();
    let navigate = use_navigate();
    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: web_sys::MouseEvent| navigate(path, Default::default())
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="hero">
                <h1>{format!("Welcome, {}", data.name)}</h1>
                <p>{format!("{} Teacher | Employee ID: {}", data.subject, data.employee_id)}</p>
            </div>

            <div class="stat-grid four">
                <StatCard title="Total Students" value=data.total_students.to_string() tone="tone-primary" />
                <StatCard title="Classes" value=data.classes.len().to_string() />
                <StatCard title="Pending Grades" value=data.pending_grades.to_string() tone="tone-warning" />
                <StatCard title="Today's Classes" value=data.upcoming_classes.len().to_string() tone="tone-success" />
            </div>

            <div class="two-column">
                <section class="card">
                    <div class="card-title-row">
                        <h3>"📖 My Classes"</h3>
                        <button class="btn primary small" on:click=go("/teacher-assignments")>"+ Add Assignment"</button>
                    </div>
                    <ul class="item-list">
                        {data.classes.iter().map(|class| view! {
                            <li class="list-row tinted padded">
                                <div>
                                    <p class="strong">{class.name}</p>
                                    <p class="muted small">{format!("{} students • {}", class.students, class.subject)}</p>
                                </div>
                                <div class="button-row">
                                    <button class="icon-btn" title="View" on:click=go("/teacher-classes")>"👁"</button>
                                    <button class="icon-btn" title="Grades" on:click=go("/teacher-grades")>"✎"</button>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                <div class="stack">
                    <section class="card">
                        <h3>"📅 Today's Schedule"</h3>
                        <ul class="item-list">
                            {data.upcoming_classes.iter().map(|class| view! {
                                <li class="list-row bordered">
                                    <div>
                                        <p class="strong">{class.class}</p>
                                        <p class="muted small">{format!("{} • Room {}", class.topic, class.room)}</p>
                                    </div>
                                    <span class="pill outline">{class.time}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>

                    <section class="card">
                        <h3>"🕑 Recent Activities"</h3>
                        <ul class="item-list">
                            {data.recent_activities.iter().map(|(activity, when)| view! {
                                <li class="tinted padded">
                                    <p class="small strong">{*activity}</p>
                                    <p class="muted tiny">{*when}</p>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                </div>
            </div>

            <section class="card">
                <h3>"Quick Actions"</h3>
                <div class="action-grid">
                    <button class="btn outline tall" on:click=go("/teacher-assignments")>"+ Create Assignment"</button>
                    <button class="btn outline tall" on:click=go("/teacher-grades")>"📄 Enter Grades"</button>
                    <button class="btn outline tall" on:click=go("/teacher-classes")>"👥 View Students"</button>
                    <button class="btn outline tall" on:click=go("/teacher-schedule")>"📅 Schedule Class"</button>
                </div>
            </section>
        </DashboardLayout>
    }
}
