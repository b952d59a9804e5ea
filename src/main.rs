//! Ledger Desk Frontend Entry Point

mod app;
mod bridge;
mod components;
mod format;
mod markdown;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] mounting".into());
    mount_to_body(App);
}
