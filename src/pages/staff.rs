//! Staff Dashboards
//!
//! Registrar, dean of students and vice principal. All three are read-only
//! views over seed data.

use leptos::prelude::*;
use school_core::seed::staff::{self, Appointment, CaseRow};
use school_core::{format, Role};

use crate::components::{DashboardLayout, ProgressBar, StatGrid};

fn deadline_class(when: &str) -> &'static str {
    if when == "Today" {
        "badge badge-destructive"
    } else {
        "pill outline"
    }
}

#[component]
fn Hero(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{title}</h1>
            <p>{subtitle}</p>
        </div>
    }
}

/// Person, kind and date with a status badge
#[component]
fn CaseList(rows: Vec<CaseRow>) -> impl IntoView {
    view! {
        <ul class="item-list">
            {rows.into_iter().map(|row| view! {
                <li class="list-row tinted padded">
                    <div>
                        <p class="strong">{row.person}</p>
                        <p class="muted small">{format!("{} • {}", row.kind, format::short_date(row.date))}</p>
                    </div>
                    <span class=format!("badge {}", row.status_class())>{row.status}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}

#[component]
pub fn RegistrarDashboard() -> impl IntoView {
    view! {
        <DashboardLayout role=Role::Registrar>
            <Hero title="Registrar Dashboard" subtitle="Manage student records, enrollments, and academic documentation" />
            <StatGrid stats=staff::registrar_stats() />

            <div class="two-column">
                <section class="card">
                    <h3>"✔ Recent Enrollments"</h3>
                    <p class="muted">"Latest student registrations"</p>
                    <CaseList rows=staff::recent_enrollments() />
                    <button class="btn outline wide">"+ New Enrollment"</button>
                </section>

                <section class="card">
                    <h3>"📄 Pending Requests"</h3>
                    <p class="muted">"Documents awaiting processing"</p>
                    <ul class="item-list">
                        {staff::pending_requests().into_iter().map(|request| view! {
                            <li class="list-row tinted padded">
                                <div>
                                    <p class="strong">{request.kind}</p>
                                    <p class="muted small">{format!("{} • {}", request.person, format::short_date(request.date))}</p>
                                </div>
                                <button class="btn outline small">"Process"</button>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button class="btn outline wide">"⬇ Generate Report"</button>
                </section>
            </div>
        </DashboardLayout>
    }
}

#[component]
pub fn DeanDashboard() -> impl IntoView {
    view! {
        <DashboardLayout role=Role::Dean>
            <Hero title="Dean of Students Dashboard" subtitle="Monitor student welfare, discipline, and counseling services" />
            <StatGrid stats=staff::dean_stats() />

            <div class="two-column">
                <section class="card">
                    <h3>"⚠ Recent Cases"</h3>
                    <p class="muted">"Latest student affairs incidents"</p>
                    <CaseList rows=staff::recent_incidents() />
                    <button class="btn outline wide">"+ New Case"</button>
                </section>

                <section class="card">
                    <h3>"💬 Counseling Schedule"</h3>
                    <p class="muted">"Upcoming counseling sessions"</p>
                    <ul class="item-list">
                        {staff::counseling_schedule().into_iter().map(|session: Appointment| view! {
                            <li class="list-row tinted padded">
                                <div>
                                    <p class="strong">{session.person}</p>
                                    <p class="muted small">{format!("{} • {}", session.kind, session.detail)}</p>
                                </div>
                                <span class="pill outline">{session.when}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button class="btn outline wide">"📅 Schedule Session"</button>
                </section>
            </div>
        </DashboardLayout>
    }
}

#[component]
pub fn VicePrincipalDashboard() -> impl IntoView {
    view! {
        <DashboardLayout role=Role::VicePrincipal>
            <Hero title="Vice Principal Dashboard" subtitle="Academic oversight, grade tracking, and schedule management" />
            <StatGrid stats=staff::vice_principal_stats() />

            <div class="two-column">
                <section class="card">
                    <h3>"📊 Grade Distribution"</h3>
                    <p class="muted">"Current semester performance overview"</p>
                    {staff::grade_distribution().into_iter().map(|bucket| view! {
                        <div class="stack small-gap">
                            <div class="list-row">
                                <span class="strong">{format!("Grade {}", bucket.grade)}</span>
                                <span class="muted small">{format!("{} students", bucket.count)}</span>
                            </div>
                            <ProgressBar percent=f64::from(bucket.percentage) />
                        </div>
                    }).collect_view()}
                    <button class="btn outline wide">"⬇ Generate Grade Report"</button>
                </section>

                <div class="stack">
                    <section class="card">
                        <h3>"🕑 Recent Changes"</h3>
                        <p class="muted">"Latest schedule modifications"</p>
                        <ul class="item-list">
                            {staff::schedule_changes().into_iter().map(|(teacher, subject, change, date)| view! {
                                <li class="list-row tinted padded">
                                    <div>
                                        <p class="strong small">{teacher}</p>
                                        <p class="muted tiny">{format!("{} • {}", subject, change)}</p>
                                    </div>
                                    <span class="pill outline">{format::month_day(date)}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>

                    <section class="card">
                        <h3>"✔ Pending Approvals"</h3>
                        <ul class="item-list">
                            {staff::pending_approvals().into_iter().map(|approval| view! {
                                <li class="list-row tinted padded">
                                    <div>
                                        <p class="strong small">{approval.kind}</p>
                                        <p class="muted tiny">{format!("{} • {}", approval.person, approval.detail)}</p>
                                    </div>
                                    <div class="button-row">
                                        <span class=deadline_class(approval.when)>{approval.when}</span>
                                        <button class="icon-btn" title="Review">"👁"</button>
                                    </div>
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
    fn test_deadline_class() {
        assert_eq!(deadline_class("Today"), "badge badge-destructive");
        assert_eq!(deadline_class("Tomorrow"), "pill outline");
    }
}
