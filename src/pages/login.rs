//! Login Page
//!
//! No credentials are checked; signing in only picks the portal to open.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use school_core::Role;

use crate::context::use_app;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app();
    let config = ctx.config();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (role, set_role) = signal(Role::Admin);

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let role = role.get();
        log::info!("[AUTH] {} signed in as {}", email.get(), role.as_str());
        navigate(role.dashboard_path(), Default::default());
    };

    view! {
        <div class="login-screen">
            <div class="login-panel">
                <div class="login-brand">
                    <span class="brand-mark large">"🎓"</span>
                    <h1>{config.school_name.clone()}</h1>
                    <p>{config.tagline.clone()}</p>
                </div>

                <form class="card login-card" on:submit=sign_in>
                    <h2>"Welcome Back"</h2>
                    <p class="muted">"Sign in to access your dashboard"</p>

                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="student@eastwood.edu"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <div class="password-row">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="icon-btn"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>

                    <label for="role">"Portal"</label>
                    <select
                        id="role"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| set_role.set(Role::from_value(&event_target_value(&ev)))
                    >
                        {Role::ALL.into_iter().map(|r| view! {
                            <option value=r.as_str()>{config.portal_names.for_role(r).to_string()}</option>
                        }).collect_view()}
                    </select>

                    <div class="login-options">
                        <label class="inline">
                            <input type="checkbox" />
                            <span>"Remember me"</span>
                        </label>
                        <button type="button" class="link-btn">"Forgot password?"</button>
                    </div>

                    <button type="submit" class="btn primary wide">"Sign In"</button>

                    <p class="muted small center">
                        "Need help? Contact " <button type="button" class="link-btn">"IT Support"</button>
                    </p>
                </form>
            </div>
        </div>
    }
}
