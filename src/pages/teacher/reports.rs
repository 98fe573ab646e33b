//! Reports & Analytics

use leptos::prelude::*;
use school_core::academics::{assessment_csv, class_reports_csv, AssessmentReport, ReportSummary};
use school_core::{format, seed, Role};

use crate::components::{DashboardLayout, ProgressBar, StatCard};
use crate::context::use_app;
use crate::export;
use crate::pages::score_tone;

const PERIODS: &[(&str, &str)] = &[
    ("current", "Current Semester"),
    ("previous", "Previous Semester"),
    ("year", "Academic Year"),
];

fn improvement_class(improved: bool) -> &'static str {
    if improved {
        "badge badge-success"
    } else {
        "badge badge-destructive"
    }
}

#[component]
pub fn Reports() -> impl IntoView {
    let ctx = use_app();
    let reports = seed::teacher::class_reports();
    let summary = ReportSummary::from_reports(&reports);
    let (period, set_period) = signal(String::from("current"));

    let export_all = {
        let reports = reports.clone();
        move |_| {
            let filename = format!("class-reports-{}.csv", period.get_untracked());
            match export::download(&filename, export::CSV, &class_reports_csv(&reports)) {
                Ok(()) => ctx.success("Export Started", "All class reports are being exported."),
                Err(e) => log::error!("[REPORTS] export failed: {}", e),
            }
        }
    };

    let export_assessment = move |report: AssessmentReport| {
        let filename = format!("{}-{}.csv", export::slug(report.kind), export::slug(report.class));
        match export::download(&filename, export::CSV, &assessment_csv(&report)) {
            Ok(()) => ctx.success("Export Started", format!("{} results for {}", report.kind, report.class)),
            Err(e) => log::error!("[REPORTS] export failed: {}", e),
        }
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header split">
                <div>
                    <h1>"Reports & Analytics"</h1>
                    <p class="muted">"View detailed performance reports for your classes"</p>
                </div>
                <div class="button-row">
                    <select
                        prop:value=move || period.get()
                        on:change=move |ev| set_period.set(event_target_value(&ev))
                    >
                        {PERIODS.iter().map(|(value, label)| view! { <option value=*value>{*label}</option> }).collect_view()}
                    </select>
                    <button class="btn primary" on:click=export_all>"⬇ Export All Reports"</button>
                </div>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Total Students" value=summary.students.to_string() tone="tone-primary" />
                <StatCard title="Avg Grade" value=format!("{}%", format::one_decimal(summary.average_grade)) tone="tone-success" />
                <StatCard title="Pass Rate" value=format!("{}%", format::one_decimal(summary.pass_rate)) tone="tone-info" />
                <StatCard title="Attendance" value=format!("{}%", format::one_decimal(summary.attendance_rate)) tone="tone-purple" />
            </div>

            <h2>"Class Performance Overview"</h2>
            {reports.into_iter().map(|report| view! {
                <section class="card hoverable">
                    <div class="list-row">
                        <div>
                            <h3>{report.class}</h3>
                            <p class="muted">{format!("{} students", report.students)}</p>
                        </div>
                        <div class="button-row">
                            <span class=improvement_class(report.improved())>
                                {format!("{} from last term", report.improvement)}
                            </span>
                            <button class="btn outline small">"📄 Detailed Report"</button>
                        </div>
                    </div>
                    <div class="tile-grid three">
                        <div>
                            <div class="list-row small">
                                <span>"Average Grade"</span>
                                <span class=format!("strong {}", score_tone(report.average_grade))>{format!("{:.1}%", report.average_grade)}</span>
                            </div>
                            <ProgressBar percent=report.average_grade />
                        </div>
                        <div>
                            <div class="list-row small">
                                <span>"Pass Rate"</span>
                                <span class="strong">{format!("{:.1}%", report.pass_rate)}</span>
                            </div>
                            <ProgressBar percent=report.pass_rate />
                        </div>
                        <div>
                            <div class="list-row small">
                                <span>"Attendance"</span>
                                <span class="strong">{format!("{:.1}%", report.attendance_rate)}</span>
                            </div>
                            <ProgressBar percent=report.attendance_rate />
                        </div>
                    </div>
                    <p class="tinted padded small">
                        <span class="muted">"🏆 Top Performer: "</span>
                        <span class="strong">{report.top_performer}</span>
                    </p>
                </section>
            }).collect_view()}

            <section class="card">
                <h3>"Recent Assessment Performance"</h3>
                <ul class="item-list">
                    {seed::teacher::assessment_reports().into_iter().map(|report| view! {
                        <li class="list-row bordered">
                            <div>
                                <p class="strong">{format!("{} - {}", report.kind, report.class)}</p>
                                <div class="tile-grid four small">
                                    <span>
                                        <span class="muted">"Average: "</span>
                                        <span class=score_tone(report.average)>{format!("{:.1}%", report.average)}</span>
                                    </span>
                                    <span><span class="muted">"Highest: "</span>{format!("{}%", report.high)}</span>
                                    <span><span class="muted">"Lowest: "</span>{format!("{}%", report.low)}</span>
                                    <span><span class="muted">"Completion: "</span>{format!("{:.1}%", report.completion_rate)}</span>
                                </div>
                            </div>
                            <button class="btn outline small" on:click=move |_| export_assessment(report)>"⬇ Export"</button>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="card">
                <h3>"📈 Performance Trends"</h3>
                <div class="placeholder-panel">
                    <p class="muted">"Performance trend charts will be displayed here"</p>
                    <p class="muted small">"Showing grade progression over time for all classes"</p>
                </div>
            </section>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improvement_class() {
        assert_eq!(improvement_class(true), "badge badge-success");
        assert_eq!(improvement_class(false), "badge badge-destructive");
    }
}
