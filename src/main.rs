#![allow(warnings)]
//! Kanban Board Frontend Entry Point

mod api;
mod app;
mod components;
mod grouping;
mod models;
mod store;
mod view_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
