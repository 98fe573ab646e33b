//! Teacher Settings
//!
//! Preferences live only as long as the page. "Export My Data" writes the
//! current form state out as JSON. "Recent Activity" reads the in-memory
//! log buffer.

use std::collections::BTreeMap;

use leptos::prelude::*;
use school_core::seed::teacher::{
    self, SettingToggle, DEPARTMENTS, LANGUAGES, QUIET_FROM, QUIET_UNTIL, THEMES, TIMEZONES,
};
use school_core::Role;
use serde::Serialize;

use crate::components::DashboardLayout;
use crate::context::use_app;
use crate::export;

const ACTIVITY_LINES: usize = 25;

/// Log lines as a text file, one per line
fn activity_log(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
    full_name: String,
    email: String,
    phone: String,
    department: String,
    theme: String,
    language: String,
    timezone: String,
    quiet_from: String,
    quiet_until: String,
    switches: BTreeMap<&'static str, bool>,
}

impl Default for Preferences {
    fn default() -> Self {
        let profile = teacher::profile();
        let switches = teacher::security_toggles()
            .into_iter()
            .chain(teacher::notification_toggles())
            .chain(teacher::display_toggles())
            .map(|toggle| (toggle.key, toggle.enabled))
            .collect();
        Self {
            full_name: profile.name.to_string(),
            email: profile.email.to_string(),
            phone: profile.phone.to_string(),
            department: "mathematics".to_string(),
            theme: "light".to_string(),
            language: "en".to_string(),
            timezone: "est".to_string(),
            quiet_from: "22:00".to_string(),
            quiet_until: "07:00".to_string(),
            switches,
        }
    }
}

#[component]
fn SelectOptions(options: &'static [(&'static str, &'static str)]) -> impl IntoView {
    options
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
fn SwitchRow(toggle: SettingToggle, prefs: RwSignal<Preferences>) -> impl IntoView {
    let key = toggle.key;
    view! {
        <div class="list-row">
            <div>
                <p class="strong">{toggle.label}</p>
                <p class="muted small">{toggle.description}</p>
            </div>
            <input
                class="switch"
                type="checkbox"
                prop:checked=move || prefs.with(|p| p.switches.get(key).copied().unwrap_or(false))
                on:change=move |ev| {
                    let on = event_target_checked(&ev);
                    prefs.update(|p| {
                        p.switches.insert(key, on);
                    });
                }
            />
        </div>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_app();
    let prefs = RwSignal::new(Preferences::default());

    let saved = move |section: &'static str| {
        move |_: web_sys::MouseEvent| {
            log::info!("[SETTINGS] saved {}", section);
            ctx.success("Settings Saved", format!("Your {} settings have been updated.", section));
        }
    };

    let export_data = move |_| {
        let json = match prefs.with_untracked(serde_json::to_string_pretty) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[SETTINGS] serialize failed: {}", e);
                return;
            }
        };
        match export::download("my-data.json", export::JSON, &json) {
            Ok(()) => ctx.success("Export Started", "Your account data is being downloaded."),
            Err(e) => log::error!("[SETTINGS] export failed: {}", e),
        }
    };

    let (activity, set_activity) = signal(ring_logger::latest(ACTIVITY_LINES));
    let refresh_activity = move |_| set_activity.set(ring_logger::latest(ACTIVITY_LINES));
    let download_activity = move |_| {
        let text = activity_log(&ring_logger::recent());
        if let Err(e) = export::download("activity-log.txt", export::TEXT, &text) {
            log::error!("[SETTINGS] activity export failed: {}", e);
        }
    };

    let text_input = move |get: fn(&Preferences) -> &String, set: fn(&mut Preferences, String)| {
        view! {
            <input
                prop:value=move || prefs.with(|p| get(p).clone())
                on:input=move |ev| prefs.update(|p| set(p, event_target_value(&ev)))
            />
        }
    };
    let select = move |options: &'static [(&'static str, &'static str)],
                       get: fn(&Preferences) -> &String,
                       set: fn(&mut Preferences, String)| {
        view! {
            <select
                prop:value=move || prefs.with(|p| get(p).clone())
                on:change=move |ev| prefs.update(|p| set(p, event_target_value(&ev)))
            >
                <SelectOptions options=options />
            </select>
        }
    };

    view! {
        <DashboardLayout role=Role::Teacher>
            <div class="page-header">
                <h1>"Settings"</h1>
                <p class="muted">"Manage your account preferences and settings"</p>
            </div>

            <section class="card">
                <h3>"👤 Account Information"</h3>
                <div class="tile-grid two">
                    <label>"Full Name" {text_input(|p| &p.full_name, |p, v| p.full_name = v)}</label>
                    <label>"Email Address" {text_input(|p| &p.email, |p, v| p.email = v)}</label>
                    <label>"Phone Number" {text_input(|p| &p.phone, |p, v| p.phone = v)}</label>
                    <label>"Department" {select(DEPARTMENTS, |p| &p.department, |p, v| p.department = v)}</label>
                </div>
                <button class="btn primary" on:click=saved("account")>"💾 Save Changes"</button>
            </section>

            <section class="card">
                <h3>"🛡 Security Settings"</h3>
                <label>"Current Password" <input type="password" placeholder="Enter current password" /></label>
                <div class="tile-grid two">
                    <label>"New Password" <input type="password" placeholder="Enter new password" /></label>
                    <label>"Confirm New Password" <input type="password" placeholder="Confirm new password" /></label>
                </div>
                <hr />
                <h4>"Two-Factor Authentication"</h4>
                {teacher::security_toggles().into_iter().map(|toggle| view! { <SwitchRow toggle=toggle prefs=prefs /> }).collect_view()}
                <button class="btn primary" on:click=saved("security")>"🔒 Update Security Settings"</button>
            </section>

            <section class="card">
                <h3>"🔔 Notification Preferences"</h3>
                {teacher::notification_toggles().into_iter().map(|toggle| view! { <SwitchRow toggle=toggle prefs=prefs /> }).collect_view()}
                <hr />
                <label>"Quiet Hours"</label>
                <div class="row-start">
                    {select(QUIET_FROM, |p| &p.quiet_from, |p, v| p.quiet_from = v)}
                    <span class="muted">"to"</span>
                    {select(QUIET_UNTIL, |p| &p.quiet_until, |p, v| p.quiet_until = v)}
                </div>
            </section>

            <section class="card">
                <h3>"🎨 Display Settings"</h3>
                <div class="tile-grid three">
                    <label>"Theme" {select(THEMES, |p| &p.theme, |p, v| p.theme = v)}</label>
                    <label>"Language" {select(LANGUAGES, |p| &p.language, |p, v| p.language = v)}</label>
                    <label>"Timezone" {select(TIMEZONES, |p| &p.timezone, |p, v| p.timezone = v)}</label>
                </div>
                {teacher::display_toggles().into_iter().filter(|t| t.key == "compact").map(|toggle| view! { <SwitchRow toggle=toggle prefs=prefs /> }).collect_view()}
            </section>

            <section class="card">
                <h3>"Data & Privacy"</h3>
                {teacher::display_toggles().into_iter().filter(|t| t.key == "analytics").map(|toggle| view! { <SwitchRow toggle=toggle prefs=prefs /> }).collect_view()}
                <hr />
                <div class="list-row">
                    <div>
                        <h4>"Data Export"</h4>
                        <p class="muted small">"Download your data and account information"</p>
                    </div>
                    <button class="btn outline" on:click=export_data>"⬇ Export My Data"</button>
                </div>
                <hr />
                <div class="list-row">
                    <div>
                        <h4 class="tone-destructive">"Danger Zone"</h4>
                        <p class="muted small">"Permanently delete your account and all associated data"</p>
                    </div>
                    <button class="btn destructive">"🗑 Delete Account"</button>
                </div>
            </section>

            <section class="card">
                <div class="card-title-row">
                    <h3>"🕑 Recent Activity"</h3>
                    <div class="button-row">
                        <button class="btn outline small" on:click=refresh_activity>"↻ Refresh"</button>
                        <button class="btn outline small" on:click=download_activity>"⬇ Download Log"</button>
                    </div>
                </div>
                <Show
                    when=move || activity.with(|lines| !lines.is_empty())
                    fallback=|| view! { <p class="muted small">"No activity recorded yet"</p> }
                >
                    <ul class="item-list log-lines">
                        {move || activity.get().into_iter().map(|line| view! {
                            <li class="mono tiny">{line}</li>
                        }).collect_view()}
                    </ul>
                </Show>
            </section>

            <section class="card">
                <h3>"Connected Accounts"</h3>
                <div class="list-row bordered">
                    <div class="row-start">
                        <span class="avatar small chip-red">"G"</span>
                        <div>
                            <p class="strong">"Google Account"</p>
                            <p class="muted small">"Used for calendar integration"</p>
                        </div>
                    </div>
                    <span class="pill outline">"Connected"</span>
                </div>
                <div class="list-row bordered">
                    <div class="row-start">
                        <span class="avatar small chip-blue">"O"</span>
                        <div>
                            <p class="strong">"Microsoft Office 365"</p>
                            <p class="muted small">"Access to Office applications"</p>
                        </div>
                    </div>
                    <button class="btn outline small">"Connect"</button>
                </div>
            </section>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.full_name, "Dr. Michael Chen");
        assert_eq!(prefs.switches.len(), 9);
        assert_eq!(prefs.switches.get("email"), Some(&true));
        assert_eq!(prefs.switches.get("twoFactor"), Some(&false));
    }

    #[test]
    fn test_preferences_json_is_camel_case() {
        let json = serde_json::to_string(&Preferences::default()).unwrap();
        assert!(json.contains("\"fullName\":\"Dr. Michael Chen\""));
        assert!(json.contains("\"quietFrom\":\"22:00\""));
    }

    #[test]
    fn test_activity_log_one_line_each() {
        let lines = vec![
            "[10:00:01.000 INFO a] first".to_string(),
            "[10:00:02.000 INFO a] second".to_string(),
        ];
        assert_eq!(
            activity_log(&lines),
            "[10:00:01.000 INFO a] first\n[10:00:02.000 INFO a] second\n"
        );
        assert_eq!(activity_log(&[]), "");
    }
}
