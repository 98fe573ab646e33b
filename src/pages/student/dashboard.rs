//! Student Dashboard

use leptos::prelude::*;
use school_core::seed::student::{self, SubjectPerformance};
use school_core::{format, Role};

use crate::components::{DashboardLayout, StatCard};
use crate::context::use_app;
use crate::export;

fn badge_class(grade: &str) -> &'static str {
    if grade.contains('A') {
        "pill solid"
    } else if grade.contains('B') {
        "pill secondary"
    } else {
        "pill outline"
    }
}

fn report_card_csv(subjects: &[SubjectPerformance]) -> String {
    let mut out = String::from("Subject,Grade,Percentage,Teacher\n");
    for subject in subjects {
        out.push_str(&format!("{},{},{},{}\n", subject.name, subject.grade, subject.percentage, subject.teacher));
    }
    out
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app();
    let data = student::overview();
    let overall = student::overall_performance();
    let subjects = data.subjects.clone();

    let download_report = move |_| {
        let filename = format!("report-card-{}.csv", export::slug(data.name));
        match export::download(&filename, export::CSV, &report_card_csv(&subjects)) {
            Ok(()) => ctx.success("Report Card", "Your report card download has started."),
            Err(e) => log::error!("[STUDENT] report card export failed: {}", e),
        }
    };

    view! {
        <DashboardLayout role=Role::Student>
            <div class="hero">
                <h1>{format!("Welcome back, {}!", data.name)}</h1>
                <p>{format!("Class: {} | Roll No: {}", data.class, data.roll_number)}</p>
            </div>

            <div class="stat-grid four">
                <StatCard title="Overall Grade" value=overall.grade.to_string() tone="tone-primary" />
                <StatCard title="Attendance" value=format!("{}%", data.attendance) tone="tone-success" />
                <StatCard title="Fee Balance" value=data.fee_balance.to_string() tone="tone-warning" />
                <StatCard title="Subjects" value=data.subjects.len().to_string() />
            </div>

            <div class="two-column">
                <section class="card">
                    <h3>"📖 Current Grades"</h3>
                    <p class="muted">"Your performance in all subjects"</p>
                    <ul class="item-list">
                        {data.subjects.iter().map(|subject| view! {
                            <li class="list-row tinted">
                                <div>
                                    <p class="strong">{subject.name}</p>
                                    <p class="muted small">{format!("{}%", subject.percentage)}</p>
                                </div>
                                <span class=badge_class(subject.grade)>{subject.grade}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button class="btn outline wide" on:click=download_report>"⬇ Download Report Card"</button>
                </section>

                <div class="stack">
                    <section class="card">
                        <h3>"📅 Upcoming Tests"</h3>
                        <ul class="item-list">
                            {data.upcoming_tests.iter().map(|test| view! {
                                <li class="list-row bordered">
                                    <div>
                                        <p class="strong">{test.subject}</p>
                                        <p class="muted small">{test.kind}</p>
                                    </div>
                                    <span class="pill outline">{format::month_day(test.date)}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>

                    <section class="card">
                        <h3>"🔔 Announcements"</h3>
                        <ul class="item-list">
                            {data.recent_announcements.iter().map(|notice| view! {
                                <li class="bordered padded">
                                    <div class="list-row">
                                        <p class="strong small">{notice.title}</p>
                                        <span class="pill outline">{format::month_day(notice.date)}</span>
                                    </div>
                                    <p class="muted small">{notice.content}</p>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                </div>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_by_letter() {
        assert_eq!(badge_class("A-"), "pill solid");
        assert_eq!(badge_class("B+"), "pill secondary");
        assert_eq!(badge_class("C"), "pill outline");
    }

    #[test]
    fn test_report_card_csv_lists_every_subject() {
        let csv = report_card_csv(&student::overview().subjects);
        assert_eq!(csv.lines().count(), 6);
        assert!(csv.contains("Mathematics,A,92,Dr. Michael Chen"));
    }
}
