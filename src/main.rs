//! Todo App Frontend Entry Point

mod app;
mod commands;
mod components;
mod models;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
