//! Toaster Component
//!
//! Renders the toast queue from [`AppContext`](crate::context::AppContext).
//! Clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.css_class() on:click=move |_| ctx.dismiss(id)>
                            <p class="toast-title">{toast.title}</p>
                            <p class="toast-description">{toast.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
