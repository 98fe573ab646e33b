//! Teacher Management Page

use leptos::prelude::*;
use school_core::roster::{add_teacher, filter_roster, TeacherForm, TEACHING_SUBJECTS};
use school_core::{keyed_rows, remove_by_id, seed};

use crate::components::{DashboardLayout, Modal};
use crate::context::use_app;

#[component]
pub fn Teachers() -> impl IntoView {
    let ctx = use_app();
    let (teachers, set_teachers) = signal(seed::admin::teachers());
    let (search, set_search) = signal(String::new());
    let (subject_filter, set_subject_filter) = signal(String::from("all"));
    let (adding, set_adding) = signal(false);
    let (form, set_form) = signal(TeacherForm::default());

    let filtered = Memo::new(move |_| filter_roster(&teachers.get(), &search.get(), &subject_filter.get()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (updated, added) = add_teacher(&teachers.get_untracked(), &form.get_untracked());
        log::info!("[TEACHERS] added #{} {}", added.id, added.name);
        set_teachers.set(updated);
        set_form.set(TeacherForm::default());
        set_adding.set(false);
        ctx.success("Teacher Added", format!("{} has been successfully added to the faculty.", added.name));
    };

    let delete = move |id: String| {
        let (remaining, removed) = remove_by_id(&teachers.get_untracked(), &id);
        set_teachers.set(remaining);
        if let Some(teacher) = removed {
            log::info!("[TEACHERS] removed #{} {}", teacher.id, teacher.name);
            ctx.error("Teacher Removed", format!("{} has been removed from the faculty.", teacher.name));
        }
    };

    view! {
        <DashboardLayout title="Teacher Management" description="Manage faculty members, assignments, and information">
            <section class="card">
                <div class="card-title-row">
                    <h3>{move || format!("Teachers ({})", filtered.get().len())}</h3>
                    <button class="btn primary" on:click=move |_| set_adding.set(true)>"+ Add Teacher"</button>
                </div>
                <div class="filter-row">
                    <input
                        type="search"
                        placeholder="Search by name or email..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || subject_filter.get()
                        on:change=move |ev| set_subject_filter.set(event_target_value(&ev))
                    >
                        <option value="all">"All Subjects"</option>
                        {TEACHING_SUBJECTS.iter().map(|subject| view! { <option value=*subject>{*subject}</option> }).collect_view()}
                    </select>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Subject"</th>
                            <th>"Contact"</th>
                            <th>"Experience"</th>
                            <th>"Qualification"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || keyed_rows(&filtered.get())
                            key=|(key, _)| key.clone()
                            children=move |(_, teacher)| {
                                let id = teacher.id.clone();
                                view! {
                                    <tr>
                                        <td class="strong">{teacher.name}</td>
                                        <td>{teacher.subject}</td>
                                        <td>
                                            <p>{teacher.email}</p>
                                            <p class="muted small">{teacher.phone}</p>
                                        </td>
                                        <td>{teacher.experience.map(|years| format!("{} years", years)).unwrap_or_default()}</td>
                                        <td>{teacher.qualification}</td>
                                        <td>
                                            <span class=format!("badge {}", teacher.status.as_str().to_lowercase())>
                                                {teacher.status.as_str()}
                                            </span>
                                        </td>
                                        <td class="actions">
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
                title="Add New Teacher"
                description="Enter the teacher's information below."
            >
                <form class="form-grid" on:submit=submit>
                    <label>"Full Name"
                        <input required
                            prop:value=move || form.get().name
                            on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev)) />
                    </label>
                    <label>"Subject"
                        <select
                            prop:value=move || form.get().subject
                            on:change=move |ev| set_form.update(|f| f.subject = event_target_value(&ev))>
                            <option value="">"Select subject"</option>
                            {TEACHING_SUBJECTS.iter().map(|subject| view! { <option value=*subject>{*subject}</option> }).collect_view()}
                        </select>
                    </label>
                    <label>"Email"
                        <input type="email" required
                            prop:value=move || form.get().email
                            on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev)) />
                    </label>
                    <label>"Phone"
                        <input required
                            prop:value=move || form.get().phone
                            on:input=move |ev| set_form.update(|f| f.phone = event_target_value(&ev)) />
                    </label>
                    <label>"Experience (years)"
                        <input type="number" required
                            prop:value=move || form.get().experience
                            on:input=move |ev| set_form.update(|f| f.experience = event_target_value(&ev)) />
                    </label>
                    <label>"Qualification"
                        <input required
                            prop:value=move || form.get().qualification
                            on:input=move |ev| set_form.update(|f| f.qualification = event_target_value(&ev)) />
                    </label>
                    <button type="submit" class="btn primary wide">"Add Teacher"</button>
                </form>
            </Modal>
        </DashboardLayout>
    }
}
