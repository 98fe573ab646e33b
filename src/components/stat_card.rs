//! Stat Cards

use leptos::prelude::*;
use school_core::seed;

/// Headline number with a caption
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] note: String,
    #[prop(into, optional)] tone: String,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class="muted small">{title}</p>
            <p class=format!("stat-value {}", tone)>{move || value.get()}</p>
            {(!note.is_empty()).then(|| view! { <p class="muted small">{note}</p> })}
        </div>
    }
}

/// A row of seeded dashboard stats
#[component]
pub fn StatGrid(stats: Vec<seed::StatCard>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.into_iter().map(|stat| view! {
                <StatCard
                    title=stat.title
                    value=stat.value.to_string()
                    note=stat.note
                    tone=stat.trend.css_class()
                />
            }).collect_view()}
        </div>
    }
}

/// Horizontal bar filled to `percent`
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-fill" style=move || format!("width: {:.1}%", percent.get().clamp(0.0, 100.0))></div>
        </div>
    }
}

/// Labelled read-only value on the profile pages
#[component]
pub fn Field(#[prop(into)] label: String, #[prop(into)] value: String, #[prop(optional)] icon: &'static str) -> impl IntoView {
    view! {
        <div class="field">
            <label class="muted small strong">{label}</label>
            <p>{(!icon.is_empty()).then(|| format!("{} ", icon))}{value}</p>
        </div>
    }
}
