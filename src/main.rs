#![allow(warnings)]
//! Taskly Frontend Entry Point

mod models;
mod config;
mod session;
mod api;
mod live;
mod store;
mod filter;
mod validate;
mod toast;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
