//! Modal Dialog Component

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let description = StoredValue::new(description);
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title.get_value()}</h2>
                        <button class="icon-btn" on:click=move |_| on_close.run(())>"✕"</button>
                    </div>
                    {move || {
                        let text = description.get_value();
                        (!text.is_empty()).then(|| view! { <p class="muted">{text}</p> })
                    }}
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
