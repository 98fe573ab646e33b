//! Dashboard Layout
//!
//! Sidebar for the role plus the page body. Admin pages also get a header
//! with the page title, a search box, notifications and the profile chip.

use leptos::prelude::*;
use school_core::Role;

use super::Sidebar;

#[component]
pub fn DashboardLayout(
    #[prop(into, optional)] title: String,
    #[prop(into, optional)] description: String,
    #[prop(optional)] role: Role,
    children: Children,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let chip = role.user_chip();

    let body = if role == Role::Admin {
        view! {
            <div class="content-column">
                <header class="top-bar">
                    <div>
                        <h1>{title}</h1>
                        {(!description.is_empty()).then(|| view! { <p class="muted">{description}</p> })}
                    </div>
                    <div class="top-bar-actions">
                        <input class="search-input" type="search" placeholder="Search..." />
                        <button class="icon-btn notify" title="Notifications">
                            "🔔"<span class="notify-count">"3"</span>
                        </button>
                        <div class="user-chip">
                            <span class="avatar">"👤"</span>
                            <div>
                                <p class="user-name">{chip.name}</p>
                                <p class="muted small">{chip.detail}</p>
                            </div>
                        </div>
                    </div>
                </header>
                <main class="page-body padded">{children()}</main>
            </div>
        }
        .into_any()
    } else {
        view! { <main class="page-body">{children()}</main> }.into_any()
    };

    view! {
        <div class="dashboard-shell">
            <Sidebar role=role collapsed=collapsed set_collapsed=set_collapsed />
            {body}
        </div>
    }
}
