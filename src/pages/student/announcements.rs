//! Announcements
//!
//! Cards collapse to a plain-text excerpt; "Read More" renders the full
//! Markdown body.

use std::collections::HashSet;

use leptos::prelude::*;
use school_core::academics::{AnnouncementStats, Priority};
use school_core::{format, seed, Role};

use crate::components::{DashboardLayout, StatCard};
use crate::markdown::{excerpt, parse_markdown};
use crate::pages::today;

const EXCERPT_CHARS: usize = 140;

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "chip-red",
        Priority::Medium => "chip-yellow",
        Priority::Low => "chip-green",
    }
}

fn category_color(category: &str) -> &'static str {
    match category {
        "Academic" => "chip-blue",
        "Sports" => "chip-green",
        "Facility" => "chip-orange",
        "Event" => "chip-purple",
        _ => "chip-gray",
    }
}

#[component]
pub fn Announcements() -> impl IntoView {
    let announcements = seed::student::announcements();
    let today = today();
    let stats = AnnouncementStats::compute(&announcements, today);
    let (expanded, set_expanded) = signal(HashSet::<u32>::new());

    let toggle = move |id: u32| {
        set_expanded.update(|open| {
            if !open.remove(&id) {
                open.insert(id);
            }
        })
    };

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"Announcements"</h1>
                <p class="muted">"Stay updated with the latest school news and updates"</p>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Total Announcements" value=stats.total.to_string() tone="tone-primary" />
                <StatCard title="High Priority" value=stats.high_priority.to_string() tone="tone-destructive" />
                <StatCard title="Academic" value=stats.academic.to_string() tone="tone-info" />
                <StatCard title="This Week" value=stats.this_week.to_string() tone="tone-success" />
            </div>

            {announcements.into_iter().map(|announcement| {
                let id = announcement.id;
                let content = announcement.content;
                let is_open = move || expanded.with(|open| open.contains(&id));
                view! {
                    <section class="card hoverable">
                        <div class="list-row">
                            <div class="row-start">
                                <span class=format!("icon-box {}", category_color(announcement.category))>"📣"</span>
                                <div>
                                    <h3>{announcement.title}</h3>
                                    <p class="muted small">
                                        {format!("📅 {}  By {}", format::time_ago(announcement.date, today), announcement.author)}
                                    </p>
                                </div>
                            </div>
                            <div class="row-end">
                                <span class=format!("chip {}", priority_color(announcement.priority))>
                                    {format::capitalize(announcement.priority.as_str())}
                                </span>
                                <span class=format!("chip {}", category_color(announcement.category))>{announcement.category}</span>
                            </div>
                        </div>
                        {move || if is_open() {
                            view! { <div class="markdown muted" inner_html=parse_markdown(content)></div> }.into_any()
                        } else {
                            view! { <p class="muted">{excerpt(content, EXCERPT_CHARS)}</p> }.into_any()
                        }}
                        <div class="list-row">
                            <span class="muted small">{format!("🕑 Posted on {}", format::long_date(announcement.date))}</span>
                            <button class="btn outline small" on:click=move |_| toggle(id)>
                                {move || if is_open() { "Show Less" } else { "Read More" }}
                            </button>
                        </div>
                    </section>
                }
            }).collect_view()}
        </DashboardLayout>
    }
}
