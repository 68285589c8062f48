//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod context;
mod keyboard;
mod logger;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
