//! Sidebar Component
//!
//! Collapsible per-role navigation with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use school_core::Role;

use crate::context::use_app;

#[component]
pub fn Sidebar(
    role: Role,
    collapsed: ReadSignal<bool>,
    set_collapsed: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let portal = ctx.config().portal_names.for_role(role).to_string();
    let chip = role.user_chip();

    let logout = move |_| {
        log::info!("[AUTH] {} signed out", role.as_str());
        navigate("/", Default::default());
    };

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-header">
                <Show when=move || !collapsed.get()>
                    <div class="sidebar-brand">
                        <span class="brand-mark">"🎓"</span>
                        <div>
                            <h2>{ctx.school_name()}</h2>
                            <p class="muted">{portal.clone()}</p>
                        </div>
                    </div>
                </Show>
                <button
                    class="icon-btn"
                    title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "☰" } else { "‹" }}
                </button>
            </div>

            <nav class="sidebar-nav">
                {role.nav_items().iter().map(|item| {
                    let path = item.path;
                    let is_active = move || pathname.get() == path;
                    view! {
                        <a
                            href=path
                            class=move || if is_active() { "sidebar-item active" } else { "sidebar-item" }
                            title=item.label
                        >
                            <span class="sidebar-icon">{item.icon}</span>
                            <Show when=move || !collapsed.get()>
                                <span>{item.label}</span>
                            </Show>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="user-chip">
                    <span class="avatar">{chip.initials()}</span>
                    <Show when=move || !collapsed.get()>
                        <div>
                            <p class="user-name">{chip.name}</p>
                            <p class="muted small">{chip.detail}</p>
                        </div>
                    </Show>
                </div>
                <button class="sidebar-item logout" on:click=logout>
                    <span class="sidebar-icon">"⎋"</span>
                    <Show when=move || !collapsed.get()>
                        <span>"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}
