//! Teacher Profile

use leptos::prelude::*;
use school_core::{format, seed, Role, UserChip};

use crate::components::{DashboardLayout, Field, StatCard};
use crate::context::use_app;
use crate::pages::today;

#[component]
pub fn Profile() -> impl IntoView {
    let ctx = use_app();
    let info = seed::teacher::profile();
    let initials = UserChip { name: info.name, detail: info.position }.initials();
    let age = format::age_on(info.date_of_birth, today());
    let service = format::years_of_service(info.join_date, today());

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header">
                <h1>"My Profile"</h1>
                <p class="muted">"View and manage your professional information"</p>
            </div>

            <section class="card">
                <div class="profile-header">
                    <span class="avatar large">{initials}</span>
                    <div class="grow">
                        <h2>{info.name}</h2>
                        <p class="muted large">{info.position}</p>
                        <p class="muted">{format!("🎓 {}  🏅 {} years experience", info.department, info.experience)}</p>
                        <span class="pill outline">{format!("Employee ID: {}", info.employee_id)}</span>
                    </div>
                    <button class="btn primary">"✎ Edit Profile"</button>
                </div>
            </section>

            <div class="stat-grid four centered">
                <StatCard title="Total Students" value=info.total_students.to_string() tone="tone-primary" />
                <StatCard title="Current Classes" value=info.current_classes.to_string() tone="tone-info" />
                <StatCard title="Avg Rating" value=format!("{}/5", info.rating) tone="tone-success" />
                <StatCard title="Years Experience" value=info.experience.to_string() tone="tone-warning" />
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
                        <Field label="Emergency Contact" value=info.emergency_contact />
                        <Field label="Join Date" value=format::long_date(info.join_date) />
                    </div>
                </section>

                <section class="card">
                    <h3>"Professional Information"</h3>
                    <Field label="Department" value=info.department />
                    <Field label="Position" value=info.position />
                    <Field label="Primary Qualification" value=info.qualification />
                    <Field
                        label="Teaching Experience"
                        value=format!("{} years at {}", service, ctx.school_name())
                    />
                    <Field
                        label="Student Rating"
                        value=format!("{:.1}/5.0 ({} reviews)", info.rating, info.reviews)
                        icon="🏅"
                    />
                </section>
            </div>

            <section class="card">
                <h3>"📖 Current Classes"</h3>
                <ul class="item-list">
                    {info.classes.iter().map(|(name, students, schedule)| view! {
                        <li class="list-row bordered">
                            <div>
                                <p class="strong">{*name}</p>
                                <p class="muted small">{format!("{} students • {}", students, schedule)}</p>
                            </div>
                            <button class="btn outline small">"View Class"</button>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="card">
                <h3>"Teaching Subjects"</h3>
                <div class="tile-grid four">
                    {info.subjects.iter().map(|subject| view! { <span class="pill outline centered">{*subject}</span> }).collect_view()}
                </div>
            </section>

            <section class="card">
                <h3>"Educational Qualifications"</h3>
                <ul class="item-list">
                    {info.qualifications.iter().map(|(degree, institution, year)| view! {
                        <li class="list-row bordered">
                            <div>
                                <p class="strong">{*degree}</p>
                                <p class="muted small">{*institution}</p>
                            </div>
                            <span class="pill outline">{*year}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="card">
                <div class="card-title-row">
                    <h3>"Awards & Achievements"</h3>
                    <button class="btn outline small">"⬇ Download Certificates"</button>
                </div>
                <ul class="item-list">
                    {info.achievements.iter().map(|(title, year, organization)| view! {
                        <li class="list-row bordered padded">
                            <div>
                                <h4>{*title}</h4>
                                <p class="muted small">{format!("📅 {}  {}", year, organization)}</p>
                            </div>
                            <span class="tone-warning large">"🏆"</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </DashboardLayout>
    }
}
