//! Cookie Todo Frontend Entry Point

mod app;
mod components;
mod cookie_jar;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("CookieTodo", 200) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
