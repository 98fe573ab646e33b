//! Student Profile

use leptos::prelude::*;
use school_core::{format, seed, Role, UserChip};

use crate::components::{DashboardLayout, Field, StatCard};
use crate::pages::today;

#[component]
pub fn Profile() -> impl IntoView {
    let info = seed::student::profile();
    let initials = UserChip { name: info.name, detail: info.grade }.initials();
    let age = format::age_on(info.date_of_birth, today());

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"My Profile"</h1>
                <p class="muted">"View and manage your personal information"</p>
            </div>

            <section class="card">
                <div class="profile-header">
                    <span class="avatar large">{initials}</span>
                    <div class="grow">
                        <h2>{info.name}</h2>
                        <p class="muted">{format!("🎓 {}  👤 Roll No: {}", info.grade, info.roll_number)}</p>
                        <span class="pill outline">{format!("Student ID: {}", info.id)}</span>
                    </div>
                    <button class="btn primary">"✎ Edit Profile"</button>
                </div>
            </section>

            <div class="stat-grid four centered">
                <StatCard title="Current GPA" value=info.gpa.to_string() tone="tone-primary" />
                <StatCard title="Attendance" value=format!("{}%", info.attendance) tone="tone-success" />
                <StatCard title="Class Rank" value=info.rank.to_string() note=format!("of {}", info.class_size) tone="tone-info" />
                <StatCard title="Total Credits" value=info.total_credits.to_string() tone="tone-warning" />
            </div>

            <div class="two-column">
                <section class="card">
                    <h3>"Personal Information"</h3>
                    <div class="tile-grid two">
                        <Field label="Full Name" value=info.name />
                        <Field
                            label="Date of Birth"
                            value=format!("{} ({} years)", format::long_date(info.date_of_birth), age)
                        />
                    </div>
                    <Field label="Email Address" value=info.email icon="✉" />
                    <Field label="Phone Number" value=info.phone icon="☎" />
                    <Field label="Address" value=info.address icon="📍" />
                    <div class="tile-grid two">
                        <Field label="Blood Group" value=info.blood_group />
                        <Field label="Admission Date" value=format::long_date(info.admission_date) />
                    </div>
                </section>

                <section class="card">
                    <h3>"Parent/Guardian Information"</h3>
                    <Field label="Parent/Guardian Name" value=info.parent_name />
                    <Field label="Parent Email" value=info.parent_email icon="✉" />
                    <Field label="Parent Phone" value=info.parent_phone icon="☎" />
                    <Field label="Emergency Contact" value=info.emergency_contact icon="☎" />
                </section>
            </div>

            <section class="card">
                <h3>"Current Subjects"</h3>
                <div class="tile-grid three">
                    {info.subjects.iter().map(|subject| view! { <span class="pill outline centered">{*subject}</span> }).collect_view()}
                </div>
            </section>

            <section class="card">
                <div class="card-title-row">
                    <h3>"Achievements & Awards"</h3>
                    <button class="btn outline small">"⬇ Download Certificate"</button>
                </div>
                <ul class="item-list">
                    {info.achievements.iter().map(|achievement| view! {
                        <li class="bordered padded">
                            <h4>{achievement.title}</h4>
                            <p class="muted small">
                                {format!("📅 {} ", format::month_year(achievement.month))}
                                <span class="pill outline">{achievement.category}</span>
                            </p>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </DashboardLayout>
    }
}
