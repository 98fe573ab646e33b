//! Student Management Page

use leptos::prelude::*;
use school_core::roster::{add_student, filter_roster, StudentForm, CLASSES};
use school_core::{keyed_rows, remove_by_id, seed, Student};

use crate::components::{DashboardLayout, Modal};
use crate::context::use_app;

#[component]
pub fn Students() -> impl IntoView {
    let ctx = use_app();
    let (students, set_students) = signal(seed::admin::students());
    let (search, set_search) = signal(String::new());
    let (class_filter, set_class_filter) = signal(String::from("all"));
    let (adding, set_adding) = signal(false);
    let (viewing, set_viewing) = signal::<Option<Student>>(None);
    let (form, set_form) = signal(StudentForm::default());

    let filtered = Memo::new(move |_| filter_roster(&students.get(), &search.get(), &class_filter.get()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (updated, added) = add_student(&students.get_untracked(), &form.get_untracked());
        log::info!("[STUDENTS] added #{} {}", added.id, added.name);
        set_students.set(updated);
        set_form.set(StudentForm::default());
        set_adding.set(false);
        ctx.success("Student Added", format!("{} has been successfully added to the system.", added.name));
    };

    let delete = move |id: String| {
        let (remaining, removed) = remove_by_id(&students.get_untracked(), &id);
        set_students.set(remaining);
        if let Some(student) = removed {
            log::info!("[STUDENTS] removed #{} {}", student.id, student.name);
            ctx.error("Student Removed", format!("{} has been removed from the system.", student.name));
        }
    };

    view! {
        <DashboardLayout title="Student Management" description="Manage student records, enrollment, and information">
            <section class="card">
                <div class="card-title-row">
                    <h3>{move || format!("Students ({})", filtered.get().len())}</h3>
                    <button class="btn primary" on:click=move |_| set_adding.set(true)>"+ Add Student"</button>
                </div>
                <div class="filter-row">
                    <input
                        type="search"
                        placeholder="Search by name or email..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || class_filter.get()
                        on:change=move |ev| set_class_filter.set(event_target_value(&ev))
                    >
                        <option value="all">"All Classes"</option>
                        {CLASSES.iter().map(|class| view! { <option value=*class>{format!("Class {}", class)}</option> }).collect_view()}
                    </select>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Class"</th>
                            <th>"Age"</th>
                            <th>"Parent Contact"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || keyed_rows(&filtered.get())
                            key=|(key, _)| key.clone()
                            children=move |(_, student)| {
                                let id = student.id.clone();
                                let shown = student.clone();
                                view! {
                                    <tr>
                                        <td class="strong">{student.name}</td>
                                        <td>{student.class}</td>
                                        <td>{student.age.map(|age| age.to_string()).unwrap_or_default()}</td>
                                        <td>{student.parent_contact}</td>
                                        <td>{student.email}</td>
                                        <td>
                                            <span class=format!("badge {}", student.status.as_str().to_lowercase())>
                                                {student.status.as_str()}
                                            </span>
                                        </td>
                                        <td class="actions">
                                            <button class="icon-btn" title="View" on:click=move |_| set_viewing.set(Some(shown.clone()))>"👁"</button>
                                            <button class="icon-btn danger" title="Delete" on:click=move |_| delete(id.clone())>"🗑"</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <Modal
                open=adding
                on_close=move || set_adding.set(false)
                title="Add New Student"
                description="Enter the student's information below."
            >
                <form class="form-grid" on:submit=submit>
                    <label>"Full Name"
                        <input required
                            prop:value=move || form.get().name
                            on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev)) />
                    </label>
                    <label>"Class"
                        <select
                            prop:value=move || form.get().class
                            on:change=move |ev| set_form.update(|f| f.class = event_target_value(&ev))>
                            <option value="">"Select class"</option>
                            {CLASSES.iter().map(|class| view! { <option value=*class>{*class}</option> }).collect_view()}
                        </select>
                    </label>
                    <label>"Age"
                        <input type="number" required
                            prop:value=move || form.get().age
                            on:input=move |ev| set_form.update(|f| f.age = event_target_value(&ev)) />
                    </label>
                    <label>"Parent Contact"
                        <input required
                            prop:value=move || form.get().parent_contact
                            on:input=move |ev| set_form.update(|f| f.parent_contact = event_target_value(&ev)) />
                    </label>
                    <label>"Email"
                        <input type="email" required
                            prop:value=move || form.get().email
                            on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev)) />
                    </label>
                    <label>"Address"
                        <input required
                            prop:value=move || form.get().address
                            on:input=move |ev| set_form.update(|f| f.address = event_target_value(&ev)) />
                    </label>
                    <button type="submit" class="btn primary wide">"Add Student"</button>
                </form>
            </Modal>

            <Modal open=Signal::derive(move || viewing.get().is_some()) on_close=move || set_viewing.set(None) title="Student Details">
                {move || viewing.get().map(|student| view! {
                    <dl class="details">
                        <dt>"Name"</dt><dd>{student.name}</dd>
                        <dt>"Class"</dt><dd>{student.class}</dd>
                        <dt>"Age"</dt><dd>{student.age.map(|age| age.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
                        <dt>"Parent Contact"</dt><dd>{student.parent_contact}</dd>
                        <dt>"Email"</dt><dd>{student.email}</dd>
                        <dt>"Address"</dt><dd>{student.address}</dd>
                        <dt>"Status"</dt><dd>{student.status.as_str()}</dd>
                    </dl>
                })}
            </Modal>
        </DashboardLayout>
    }
}
