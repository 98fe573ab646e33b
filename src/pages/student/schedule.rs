//! My Schedule

use chrono::Datelike;
use leptos::prelude::*;
use school_core::schedule::weekday_label;
use school_core::seed::student::{subject_color, weekly_schedule};
use school_core::Role;

use crate::components::DashboardLayout;
use crate::pages::today;

#[component]
pub fn Schedule() -> impl IntoView {
    let schedule = weekly_schedule();
    let weekday = today().weekday();
    let todays = schedule.for_day(weekday).to_vec();

    let today_card = if todays.is_empty() {
        view! { <p class="muted">"No classes scheduled for today"</p> }.into_any()
    } else {
        view! {
            <ul class="item-list">
                {todays.into_iter().map(|period| view! {
                    <li class="list-row tinted">
                        <div class="row-start">
                            <span class=format!("chip {}", subject_color(period.subject))>{period.time}</span>
                            <div>
                                <p class="strong">{period.subject}</p>
                                <p class="muted small">{format!("👤 {}  📍 {}", period.detail, period.room)}</p>
                            </div>
                        </div>
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <DashboardLayout role=Role::Student>
            <div class="page-header">
                <h1>"My Schedule"</h1>
                <p class="muted">"View your weekly class timetable"</p>
            </div>

            <section class="card highlighted">
                <h3>"Today's Schedule " <span class="pill outline">{weekday_label(weekday)}</span></h3>
                {today_card}
            </section>

            <h2>"Weekly Schedule"</h2>
            {schedule.days().iter().map(|(day, periods)| {
                let is_today = *day == weekday;
                view! {
                    <section class=if is_today { "card highlighted" } else { "card" }>
                        <h3>
                            {weekday_label(*day)}
                            {is_today.then(|| view! { <span class="pill solid">"Today"</span> })}
                        </h3>
                        <ul class="item-list">
                            {periods.iter().map(|period| view! {
                                <li class="list-row bordered">
                                    <div class="row-start">
                                        <span class="mono muted small">{format!("🕑 {}", period.time)}</span>
                                        <div class="divider-v"></div>
                                        <div>
                                            <p class="strong">{period.subject}</p>
                                            <p class="muted small">{format!("👤 {}  📍 {}", period.detail, period.room)}</p>
                                        </div>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                }
            }).collect_view()}
        </DashboardLayout>
    }
}
