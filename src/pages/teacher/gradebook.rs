//! Gradebook
//!
//! Editable score grid. Every cell edit replaces the row list, so totals,
//! letters and the statistics cards follow immediately.

use leptos::prelude::*;
use school_core::gradebook::{self, update_score, GradebookStats, ASSESSMENTS, GRADEBOOK_CLASSES};
use school_core::{format, seed, Role};

use crate::components::{DashboardLayout, StatCard};
use crate::context::use_app;
use crate::export;
use crate::pages::score_tone;

fn class_name(id: &str) -> &'static str {
    GRADEBOOK_CLASSES
        .iter()
        .find(|(class_id, _)| *class_id == id)
        .map(|(_, name)| *name)
        .unwrap_or("")
}

#[component]
pub fn Gradebook() -> impl IntoView {
    let ctx = use_app();
    let (rows, set_rows) = signal(seed::teacher::gradebook_rows());
    let (selected_class, set_selected_class) = signal(String::from("10A"));
    let stats = Memo::new(move |_| rows.with(|rows| GradebookStats::from_rows(rows)));

    let edit = move |row_id: u32, index: usize, text: String| {
        set_rows.set(update_score(&rows.get_untracked(), row_id, index, &text));
        log::debug!("[GRADEBOOK] row {} {} = {:?}", row_id, ASSESSMENTS[index].id, text);
    };

    let export_grades = move |_| {
        let filename = format!("gradebook-{}.csv", export::slug(&selected_class.get_untracked()));
        let csv = rows.with_untracked(|rows| gradebook::to_csv(rows));
        match export::download(&filename, export::CSV, &csv) {
            Ok(()) => ctx.success("Export Started", "Gradebook is being exported."),
            Err(e) => log::error!("[GRADEBOOK] export failed: {}", e),
        }
    };

    let save_all = move |_| {
        let class = selected_class.get_untracked();
        log::info!("[GRADEBOOK] saved {} rows for {}", rows.with_untracked(Vec::len), class);
        ctx.success("Grades Saved", format!("All changes for {} have been saved.", class_name(&class)));
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header split">
                <div>
                    <h1>"Gradebook"</h1>
                    <p class="muted">"Manage student grades and assessments"</p>
                </div>
                <div class="button-row">
                    <button class="btn outline">"+ Add Assessment"</button>
                    <button class="btn primary" on:click=export_grades>"⬇ Export Grades"</button>
                </div>
            </div>

            <section class="card">
                <div class="row-start">
                    <label class="strong">"Select Class:"</label>
                    <select
                        prop:value=move || selected_class.get()
                        on:change=move |ev| set_selected_class.set(event_target_value(&ev))
                    >
                        {GRADEBOOK_CLASSES.iter().map(|(id, name)| view! { <option value=*id>{*name}</option> }).collect_view()}
                    </select>
                </div>
            </section>

            <div class="stat-grid five centered">
                <StatCard title="Total Students" value=Signal::derive(move || rows.with(Vec::len).to_string()) tone="tone-primary" />
                <StatCard title="Class Average" value=Signal::derive(move || format::one_decimal(stats.get().average)) tone="tone-success" />
                <StatCard title="Highest Score" value=Signal::derive(move || format::one_decimal(stats.get().highest)) tone="tone-info" />
                <StatCard title="Lowest Score" value=Signal::derive(move || format::one_decimal(stats.get().lowest)) tone="tone-warning" />
                <StatCard title="Above 80%" value=Signal::derive(move || stats.get().above_80.to_string()) tone="tone-purple" />
            </div>

            <section class="card">
                <div class="card-title-row">
                    <h3>{move || format!("Grade Entry - {}", class_name(&selected_class.get()))}</h3>
                    <button class="btn primary" on:click=save_all>"💾 Save All Changes"</button>
                </div>
                <div class="table-scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Student Name"</th>
                                <th>"Roll No"</th>
                                {ASSESSMENTS.iter().map(|assessment| view! {
                                    <th class="centered">
                                        <div class="strong">{assessment.name}</div>
                                        <div class="muted tiny">{format!("{}pts ({}%)", assessment.max_points, assessment.weight)}</div>
                                    </th>
                                }).collect_view()}
                                <th class="centered">"Total"</th>
                                <th class="centered">"Grade"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each={move || rows.get().into_iter().map(|row| row.id).collect::<Vec<_>>()}
                                key=|id| *id
                                children={move |row_id| {
                                    let row = move || rows.with(|rows| rows.iter().find(|row| row.id == row_id).cloned());
                                    let total = move || row().map(|row| row.total()).unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td class="strong">{move || row().map(|row| row.name)}</td>
                                            <td>{move || row().map(|row| row.roll_no)}</td>
                                            {ASSESSMENTS.iter().enumerate().map(|(index, assessment)| {
                                                let initial = row()
                                                    .and_then(|row| row.scores.get(index).copied().flatten())
                                                    .map(|score| score.to_string())
                                                    .unwrap_or_default();
                                                view! {
                                                    <td class="centered">
                                                        <input
                                                            class="score-input"
                                                            type="number"
                                                            min="0"
                                                            max=assessment.max_points.to_string()
                                                            placeholder="-"
                                                            value=initial
                                                            on:change=move |ev| edit(row_id, index, event_target_value(&ev))
                                                        />
                                                    </td>
                                                }
                                            }).collect_view()}
                                            <td class=move || format!("centered strong {}", score_tone(total()))>
                                                {move || format!("{:.1}%", total())}
                                            </td>
                                            <td class="centered">
                                                <span class=move || format!("pill {}", score_tone(total()))>
                                                    {move || row().map(|row| row.letter().as_str())}
                                                </span>
                                            </td>
                                            <td>
                                                <button class="icon-btn" title="Edit">"✎"</button>
                                            </td>
                                        </tr>
                                    }
                                }}
                            />
                        </tbody>
                    </table>
                </div>
            </section>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_lookup() {
        assert_eq!(class_name("10A"), "Mathematics - Grade 10A");
        assert_eq!(class_name("9Z"), "");
    }
}
