//! My Assignments

use leptos::prelude::*;
use school_core::academics::{submit_assignment, AssignmentStatus, AssignmentSummary};
use school_core::{format, seed, Role};

use crate::components::{DashboardLayout, StatCard};
use crate::context::use_app;

fn status_color(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Pending => "chip-yellow",
        AssignmentStatus::Submitted => "chip-blue",
        AssignmentStatus::Graded => "chip-green",
        AssignmentStatus::Overdue => "chip-red",
    }
}

#[component]
pub fn Assignments() -> impl IntoView {
    let ctx = use_app();
    let (assignments, set_assignments) = signal(seed::student::assignments());
    let summary = Memo::new(move |_| assignments.with(|list| AssignmentSummary::from_assignments(list)));

    let submit = move |id: u32, title: &'static str| {
        set_assignments.set(submit_assignment(&assignments.get_untracked(), id));
        log::info!("[ASSIGNMENTS] submitted #{}", id);
        ctx.success("Assignment Submitted", format!("\"{}\" has been submitted.", title));
    };

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"My Assignments"</h1>
                <p class="muted">"Track your assignments and submissions"</p>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Pending" value=Signal::derive(move || summary.get().pending.to_string()) tone="tone-warning" />
                <StatCard title="Submitted" value=Signal::derive(move || summary.get().submitted.to_string()) tone="tone-info" />
                <StatCard title="Graded" value=Signal::derive(move || summary.get().graded.to_string()) tone="tone-success" />
                <StatCard
                    title="Avg Score"
                    value=Signal::derive(move || {
                        summary.get().average_score.map(|avg| format!("{:.0}%", avg)).unwrap_or_else(|| "-".to_string())
                    })
                    tone="tone-primary"
                />
            </div>

            <For
                each=move || assignments.get()
                key=|assignment| (assignment.id, assignment.status)
                children=move |assignment| {
                    let id = assignment.id;
                    let title = assignment.title;
                    view! {
                        <section class="card">
                            <div class="list-row">
                                <div>
                                    <h3>{assignment.title}</h3>
                                    <p class="muted">{assignment.subject}</p>
                                </div>
                                <span class=format!("chip {}", status_color(assignment.status))>
                                    {format::capitalize(assignment.status.as_str())}
                                </span>
                            </div>
                            <p class="muted">{assignment.description}</p>
                            <div class="meta-row muted small">
                                <span>{format!("📅 Due: {}", format::long_date(assignment.due_date))}</span>
                                <span>{format!("📄 {} points", assignment.points)}</span>
                                {assignment.score.map(|score| view! {
                                    <span>{format!("🕑 Score: {}/{}", score, assignment.points)}</span>
                                })}
                            </div>
                            <div class="button-row">
                                {(assignment.status == AssignmentStatus::Pending).then(|| view! {
                                    <button class="btn primary small" on:click=move |_| submit(id, title)>"Submit Assignment"</button>
                                })}
                                {(assignment.status == AssignmentStatus::Graded).then(|| view! {
                                    <button class="btn outline small">"⬇ Download Feedback"</button>
                                })}
                                <button class="btn outline small">"View Details"</button>
                            </div>
                        </section>
                    }
                }
            />
        </DashboardLayout>
    }
}
