//! Not Found Page

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move |_| {
        log::warn!("[ROUTER] no route for {}", pathname.get());
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a href="/" class="btn primary">"Return to Home"</a>
        </div>
    }
}
