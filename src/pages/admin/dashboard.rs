//! Admin Dashboard

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use school_core::seed::admin;

use crate::components::{DashboardLayout, StatGrid};
use crate::context::use_app;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: web_sys::MouseEvent| navigate(path, Default::default())
    };

    view! {
        <DashboardLayout
            title="Dashboard"
            description=format!("Welcome back! Here's what's happening at {} today.", ctx.school_name())
        >
            <StatGrid stats=admin::stats() />

            <div class="two-column">
                <section class="card">
                    <h3>"Recent Activities"</h3>
                    <p class="muted">"Latest updates from your school"</p>
                    <ul class="item-list">
                        {admin::recent_activities().into_iter().map(|activity| view! {
                            <li class="list-row">
                                <div>
                                    <p class="strong">{activity.action}</p>
                                    <p class="muted small">{activity.subject}</p>
                                </div>
                                <span class="muted small">{activity.time}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                <section class="card">
                    <h3>"Upcoming Events"</h3>
                    <p class="muted">"Important dates to remember"</p>
                    <ul class="item-list">
                        {admin::upcoming_events().into_iter().map(|event| view! {
                            <li class="list-row">
                                <div>
                                    <p class="strong">{event.title}</p>
                                    <p class="muted small">{event.time}</p>
                                </div>
                                <span class="muted small strong">{event.date}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </div>

            <section class="card">
                <h3>"Quick Actions"</h3>
                <div class="action-grid">
                    <button class="btn primary tall" on:click=go("/students")>"👥 Add Student"</button>
                    <button class="btn outline tall" on:click=go("/teachers")>"🧑‍🏫 Add Teacher"</button>
                    <button class="btn outline tall" on:click=go("/grades")>"📄 Generate Report"</button>
                    <button class="btn outline tall" on:click=go("/fees")>"$ Record Payment"</button>
                </div>
            </section>
        </DashboardLayout>
    }
}
