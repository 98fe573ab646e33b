//! Grades & Report Cards Page

use leptos::prelude::*;
use school_core::grade_entry::{report_card_json, submit_grades, SUBJECTS};
use school_core::roster::CLASSES;
use school_core::{seed, GradeEntryError, GradeInput, GradeTone, StudentGrade};

use crate::components::DashboardLayout;
use crate::context::use_app;
use crate::export;

#[component]
pub fn Grades() -> impl IntoView {
    let ctx = use_app();
    let (saved, set_saved) = signal(seed::admin::saved_grades());
    let (class, set_class) = signal(String::new());
    let (student_id, set_student_id) = signal(String::new());
    let (input, set_input) = signal(GradeInput::new());

    let current = Memo::new(move |_| {
        let id = student_id.get();
        saved.with(|saved| saved.iter().find(|card| card.student_id == id).cloned())
    });

    let save = move |_| {
        let result = submit_grades(
            &saved.get_untracked(),
            &class.get_untracked(),
            &student_id.get_untracked(),
            &input.get_untracked(),
        );
        match result {
            Ok((updated, card)) => {
                log::info!(
                    "[GRADES] saved {} total={} overall={}",
                    card.student_name,
                    card.total_marks,
                    card.overall_grade
                );
                set_saved.set(updated);
                set_input.set(GradeInput::new());
                ctx.success(
                    "Grades Saved",
                    format!("Grades for {} have been successfully saved.", card.student_name),
                );
            }
            Err(err @ GradeEntryError::MissingSelection) => {
                ctx.error("Missing Information", err.to_string());
            }
            Err(err) => log::warn!("[GRADES] {}", err),
        }
    };

    let generate_report = move |card: StudentGrade| {
        let filename = format!("report-card-{}.json", export::slug(&card.student_name));
        let exported = report_card_json(&card)
            .map_err(|e| e.to_string())
            .and_then(|json| export::download(&filename, export::JSON, &json));
        match exported {
            Ok(()) => ctx.success(
                "Report Generated",
                format!("Report card for {} is ready for download.", card.student_name),
            ),
            Err(e) => log::error!("[GRADES] report card export failed: {}", e),
        }
    };

    view! {
        <DashboardLayout title="Grades & Report Cards" description="Manage student grades and generate report cards">
            <section class="card">
                <h3>"Enter Student Grades"</h3>
                <div class="form-grid two">
                    <label>"Select Class"
                        <select
                            prop:value=move || class.get()
                            on:change=move |ev| {
                                set_class.set(event_target_value(&ev));
                                set_student_id.set(String::new());
                            }
                        >
                            <option value="">"Choose a class"</option>
                            {CLASSES.iter().map(|class| view! { <option value=*class>{format!("Class {}", class)}</option> }).collect_view()}
                        </select>
                    </label>
                    <label>"Select Student"
                        <select
                            prop:value=move || student_id.get()
                            prop:disabled=move || class.get().is_empty()
                            on:change=move |ev| set_student_id.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a student"</option>
                            {move || {
                                seed::admin::grade_entry_students(&class.get())
                                    .iter()
                                    .map(|student| view! { <option value=student.id>{student.name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </div>

                <Show when=move || !student_id.get().is_empty()>
                    <h3>"Subject Grades"</h3>
                    <div class="form-grid three">
                        {SUBJECTS.iter().map(|subject| {
                            let key = subject.key;
                            view! {
                                <label>{format!("{} (Max: {})", subject.name, subject.max_marks)}
                                    <input
                                        type="number"
                                        min="0"
                                        max=subject.max_marks.to_string()
                                        placeholder="Enter marks"
                                        prop:value=move || input.with(|input| input.get(key).to_string())
                                        on:input=move |ev| set_input.update(|input| input.set(key, &event_target_value(&ev)))
                                    />
                                </label>
                            }
                        }).collect_view()}
                    </div>
                    <button class="btn primary" on:click=save>"+ Save Grades"</button>
                </Show>
            </section>

            {move || current.get().map(|card| {
                let report = card.clone();
                view! {
                    <section class="card">
                        <h3>{format!("Current Grades - {}", card.student_name)}</h3>
                        <div class="tile-grid three">
                            {card.grades.iter().map(|grade| view! {
                                <div class="tile">
                                    <h4>{grade.subject.clone()}</h4>
                                    <div class="tile-row">
                                        <span class="stat-value">{format!("{}/{}", grade.marks, grade.max_marks)}</span>
                                        <span class=format!("pill {}", GradeTone::for_grade(&grade.grade).css_class())>
                                            {grade.grade.clone()}
                                        </span>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                        <div class="highlight-row">
                            <div>
                                <p class="muted small">"Overall Performance"</p>
                                <p class="stat-value">{format!("{:.2}% ({})", card.percentage, card.overall_grade)}</p>
                            </div>
                            <button class="btn" on:click=move |_| generate_report(report.clone())>"Generate Report Card"</button>
                        </div>
                    </section>
                }
            })}

            <section class="card">
                <h3>"Grades Summary"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Class"</th>
                            <th>"Total Marks"</th>
                            <th>"Percentage"</th>
                            <th>"Grade"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || saved.get()
                            key=|card| (card.student_id.clone(), card.total_marks, card.overall_grade.clone())
                            children=move |card| {
                                let report = card.clone();
                                let max_total: i32 = card.grades.iter().map(|grade| grade.max_marks).sum();
                                view! {
                                    <tr>
                                        <td class="strong">{card.student_name}</td>
                                        <td>{card.class}</td>
                                        <td>{format!("{}/{}", card.total_marks, max_total)}</td>
                                        <td>{format!("{:.2}%", card.percentage)}</td>
                                        <td>
                                            <span class=format!("pill {}", GradeTone::for_grade(&card.overall_grade).css_class())>
                                                {card.overall_grade.clone()}
                                            </span>
                                        </td>
                                        <td>
                                            <button class="btn small" on:click=move |_| generate_report(report.clone())>"Report"</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </DashboardLayout>
    }
}
