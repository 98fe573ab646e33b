//! Teaching Schedule

use chrono::Datelike;
use leptos::prelude::*;
use school_core::schedule::{weekday_label, ClassPeriod};
use school_core::seed::teacher::{self, period_color, CalendarEntry};
use school_core::{format, Role};

use crate::components::{DashboardLayout, StatCard};
use crate::context::use_app;
use crate::export;
use crate::pages::today;

const CALENDAR: &str = "text/calendar;charset=utf-8";

/// Single-event iCalendar document; `time` is `HH:MM-HH:MM`
fn ics_event(entry: &CalendarEntry) -> String {
    let stamp = |clock: &str| format!("{}T{}00", entry.date.format("%Y%m%d"), clock.replace(':', ""));
    let (start, end) = entry.time.split_once('-').unwrap_or((entry.time, entry.time));
    format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//eastwood//portal//EN\r\nBEGIN:VEVENT\r\nDTSTART:{}\r\nDTEND:{}\r\nSUMMARY:{}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
        stamp(start.trim()),
        stamp(end.trim()),
        entry.title,
    )
}

fn period_meta(period: &ClassPeriod) -> String {
    let mut meta = format!("👥 {}  📍 {}", period.detail, period.room);
    if period.students > 0 {
        meta.push_str(&format!("  {} students", period.students));
    }
    meta
}

#[component]
pub fn Schedule() -> impl IntoView {
    let ctx = use_app();
    let schedule = teacher::weekly_schedule();
    let classes = teacher::classes();
    let weekday = today().weekday();
    let todays = schedule.for_day(weekday).to_vec();

    let add_to_calendar = move |entry: CalendarEntry| {
        let filename = format!("{}.ics", export::slug(entry.title));
        match export::download(&filename, CALENDAR, &ics_event(&entry)) {
            Ok(()) => ctx.success("Added to Calendar", format!("{} on {}", entry.title, format::month_day(entry.date))),
            Err(e) => log::error!("[SCHEDULE] calendar export failed: {}", e),
        }
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header split">
                <div>
                    <h1>"My Schedule"</h1>
                    <p class="muted">"View your teaching schedule and upcoming events"</p>
                </div>
                <button class="btn primary">"+ Add Event"</button>
            </div>

            <div class="stat-grid four centered">
                <StatCard title="Classes Today" value=todays.len().to_string() tone="tone-primary" />
                <StatCard title="Weekly Classes" value=schedule.teaching_periods().to_string() tone="tone-info" />
                <StatCard title="Different Grades" value=classes.len().to_string() tone="tone-success" />
                <StatCard title="Total Students" value=teacher::total_students(&classes).to_string() tone="tone-warning" />
            </div>

            {(!todays.is_empty()).then(|| view! {
                <section class="card highlighted">
                    <h3>"Today's Schedule " <span class="pill outline">{weekday_label(weekday)}</span></h3>
                    <ul class="item-list">
                        {todays.iter().map(|period| view! {
                            <li class="list-row tinted padded">
                                <div class="row-start">
                                    <span class=format!("chip {}", period_color(period.subject))>{period.time}</span>
                                    <div>
                                        <p class="strong">{period.subject}</p>
                                        <p class="muted small">{period_meta(period)}</p>
                                    </div>
                                </div>
                                <button class="btn outline small">"View Details"</button>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            })}

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
                                            <p class="muted small">{period_meta(period)}</p>
                                        </div>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                }
            }).collect_view()}

            <section class="card">
                <h3>"Upcoming Events"</h3>
                <ul class="item-list">
                    {teacher::upcoming_events().into_iter().map(|entry| view! {
                        <li class="list-row bordered">
                            <div>
                                <p class="strong">{entry.title}</p>
                                <p class="muted small">{format!("📅 {}  🕑 {}", format::month_day(entry.date), entry.time)}</p>
                            </div>
                            <button class="btn outline small" on:click=move |_| add_to_calendar(entry)>"Add to Calendar"</button>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ics_event_times() {
        let entry = teacher::upcoming_events()[1];
        let ics = ics_event(&entry);
        assert!(ics.contains("DTSTART:20240118T153000\r\n"));
        assert!(ics.contains("DTEND:20240118T163000\r\n"));
        assert!(ics.contains("SUMMARY:Mathematics Department Meeting\r\n"));
    }

    #[test]
    fn test_period_meta_omits_zero_students() {
        let schedule = teacher::weekly_schedule();
        let monday = schedule.for_day(chrono::Weekday::Mon);
        assert!(period_meta(&monday[0]).ends_with("28 students"));
        assert!(!period_meta(&monday[2]).contains("students"));
    }
}
