//! My Grades

use leptos::prelude::*;
use school_core::seed::student;
use school_core::Role;

use crate::components::{DashboardLayout, ProgressBar};

/// Badge colour by the grade's first letter
fn grade_color(grade: &str) -> &'static str {
    match grade.chars().next() {
        Some('A') => "chip-green",
        Some('B') => "chip-blue",
        Some('C') => "chip-yellow",
        _ => "chip-red",
    }
}

#[component]
pub fn Grades() -> impl IntoView {
    let overall = student::overall_performance();

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"My Grades"</h1>
                <p class="muted">"View your academic performance and grades"</p>
            </div>

            <section class="card">
                <h3>"Overall Performance"</h3>
                <div class="tile-grid three centered">
                    <div>
                        <p class="stat-value tone-primary">{format!("{}%", overall.average)}</p>
                        <p class="muted">"Overall Average"</p>
                    </div>
                    <div>
                        <p class="stat-value tone-success">{overall.grade}</p>
                        <p class="muted">"Current Grade"</p>
                    </div>
                    <div>
                        <p class="stat-value tone-info">{format!("{}/{}", overall.passed, overall.total)}</p>
                        <p class="muted">"Subjects Passed"</p>
                    </div>
                </div>
            </section>

            <h2>"Subject Performance"</h2>
            {student::subject_grades().into_iter().map(|subject| view! {
                <section class="card">
                    <div class="list-row">
                        <div>
                            <h3>{subject.name}</h3>
                            <p class="muted small">{format!("Teacher: {}", subject.teacher)}</p>
                        </div>
                        <span class=format!("chip {}", grade_color(subject.grade))>{subject.grade}</span>
                    </div>
                    <div class="list-row small">
                        <span>"Progress"</span>
                        <span>{format!("{}%", subject.percentage)}</span>
                    </div>
                    <ProgressBar percent=f64::from(subject.percentage) />
                </section>
            }).collect_view()}
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color("A-"), "chip-green");
        assert_eq!(grade_color("B+"), "chip-blue");
        assert_eq!(grade_color("C"), "chip-yellow");
        assert_eq!(grade_color("F"), "chip-red");
        assert_eq!(grade_color(""), "chip-red");
    }
}
