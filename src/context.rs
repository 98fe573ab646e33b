//! Application Context
//!
//! Cross-cutting services provided via the Leptos Context API: the school
//! configuration and the toast queue. Page data is never stored here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use school_core::SchoolConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<SchoolConfig>,
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: SchoolConfig, toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>)) -> Self {
        Self {
            config: StoredValue::new(config),
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_toast_id: StoredValue::new(1),
        }
    }

    pub fn config(&self) -> SchoolConfig {
        self.config.get_value()
    }

    pub fn school_name(&self) -> String {
        self.config.with_value(|config| config.school_name.clone())
    }

    /// Show a toast that dismisses itself after the configured duration
    pub fn toast(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));

        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        };
        log::debug!("[TOAST] #{} {}", id, toast.title);
        self.set_toasts.update(|toasts| toasts.push(toast));

        let duration = self.config.with_value(|config| config.toast_duration_ms);
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            ctx.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.toast(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.toast(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

/// The [`AppContext`] provided by `App`
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
