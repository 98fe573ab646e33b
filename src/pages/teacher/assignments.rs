//! Teacher Assignments

use leptos::prelude::*;
use school_core::academics::{count_coursework, create_coursework, CourseworkForm, CourseworkStatus};
use school_core::gradebook::GRADEBOOK_CLASSES;
use school_core::{format, seed, Role};

use crate::components::{DashboardLayout, Modal, ProgressBar, StatCard};
use crate::context::use_app;
use crate::pages::today;

fn status_color(status: CourseworkStatus) -> &'static str {
    match status {
        CourseworkStatus::Active => "chip-blue",
        CourseworkStatus::Grading => "chip-yellow",
        CourseworkStatus::Completed => "chip-green",
        CourseworkStatus::Overdue => "chip-red",
    }
}

#[component]
pub fn Assignments() -> impl IntoView {
    let ctx = use_app();
    let (assignments, set_assignments) = signal(seed::teacher::assignments());
    let (creating, set_creating) = signal(false);
    let (form, set_form) = signal(CourseworkForm::default());

    let count = move |status| assignments.with(|list| count_coursework(list, status)).to_string();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match create_coursework(&assignments.get_untracked(), &form.get_untracked(), today()) {
            Ok((updated, created)) => {
                log::info!("[ASSIGNMENTS] created #{} {} for {}", created.id, created.title, created.class);
                set_assignments.set(updated);
                set_form.set(CourseworkForm::default());
                set_creating.set(false);
                ctx.success("Assignment Created", format!("{} has been assigned to {}.", created.title, created.class));
            }
            Err(err) => ctx.error("Missing Information", err.to_string()),
        }
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header split">
                <div>
                    <h1>"Assignments"</h1>
                    <p class="muted">"Create and manage assignments for your classes"</p>
                </div>
                <button class="btn primary" on:click=move |_| set_creating.set(true)>"+ Create Assignment"</button>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Total Assignments" value=Signal::derive(move || assignments.with(Vec::len).to_string()) tone="tone-primary" />
                <StatCard title="Active" value=Signal::derive(move || count(CourseworkStatus::Active)) tone="tone-info" />
                <StatCard title="Pending Grading" value=Signal::derive(move || count(CourseworkStatus::Grading)) tone="tone-warning" />
                <StatCard title="Completed" value=Signal::derive(move || count(CourseworkStatus::Completed)) tone="tone-success" />
            </div>

            <For
                each=move || assignments.get()
                key=|assignment| assignment.id
                children=move |assignment| {
                    let rate = assignment.submission_rate();
                    view! {
                        <section class="card hoverable">
                            <div class="list-row">
                                <div>
                                    <h3>{assignment.title.clone()}</h3>
                                    <p class="muted">{assignment.class.clone()}</p>
                                </div>
                                <span class=format!("chip {}", status_color(assignment.status))>
                                    {format::capitalize(assignment.status.as_str())}
                                </span>
                            </div>
                            <p class="muted">{assignment.description.clone()}</p>
                            <div class="tile-grid four small">
                                <span>{format!("📅 Due: {}", format::short_date(assignment.due_date))}</span>
                                <span>{format!("🕑 Assigned: {}", format::short_date(assignment.assigned_date))}</span>
                                <span>{format!("📄 {} points", assignment.total_points)}</span>
                                <span>
                                    <span class="strong">{format!("{}/{} submitted", assignment.submitted, assignment.total_students)}</span>
                                    <span class="muted">{format!(" ({}%)", rate)}</span>
                                </span>
                            </div>
                            <div class="list-row small">
                                <span>"Submission Progress"</span>
                                <span>{format!("{}%", rate)}</span>
                            </div>
                            <ProgressBar percent=f64::from(rate) />
                            <div class="button-row">
                                <button class="btn primary small">"👁 View Submissions"</button>
                                <button class="btn outline small">"✎ Edit"</button>
                                {(assignment.status == CourseworkStatus::Completed).then(|| view! {
                                    <button class="btn outline small">"⬇ Export Results"</button>
                                })}
                            </div>
                        </section>
                    }
                }
            />

            <Modal open=creating on_close=move || set_creating.set(false) title="Create New Assignment">
                <form class="form-stack" on:submit=submit>
                    <label>"Assignment Title"
                        <input
                            placeholder="Enter assignment title"
                            prop:value=move || form.get().title
                            on:input=move |ev| set_form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <label>"Class"
                        <select
                            prop:value=move || form.get().class
                            on:change=move |ev| set_form.update(|f| f.class = event_target_value(&ev))
                        >
                            <option value="">"Select class"</option>
                            {GRADEBOOK_CLASSES.iter().map(|(id, name)| view! { <option value=*id>{*name}</option> }).collect_view()}
                        </select>
                    </label>
                    <label>"Due Date"
                        <input
                            type="date"
                            prop:value=move || form.get().due_date
                            on:input=move |ev| set_form.update(|f| f.due_date = event_target_value(&ev))
                        />
                    </label>
                    <label>"Total Points"
                        <input
                            type="number"
                            placeholder="100"
                            prop:value=move || form.get().total_points
                            on:input=move |ev| set_form.update(|f| f.total_points = event_target_value(&ev))
                        />
                    </label>
                    <label>"Description"
                        <textarea
                            placeholder="Assignment description and instructions"
                            prop:value=move || form.get().description
                            on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="button-row">
                        <button type="submit" class="btn primary grow">"Create Assignment"</button>
                        <button type="button" class="btn outline" on:click=move |_| set_creating.set(false)>"Cancel"</button>
                    </div>
                </form>
            </Modal>
        </DashboardLayout>
    }
}
