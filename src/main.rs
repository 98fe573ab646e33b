//! Eastwood Academy Frontend Entry Point

mod app;
mod components;
mod context;
mod export;
mod markdown;
mod pages;

use app::App;
use leptos::prelude::*;
use ring_logger::RingLogger;
use school_core::SchoolConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = SchoolConfig::embedded();
    if RingLogger::init(config.level_filter(), config.log_capacity).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    log::info!("[APP] {} portal starting", config.school_name);

    mount_to_body(move || view! { <App config=config /> });
}
