#![allow(warnings)]
//! ShareBite Frontend Entry Point

mod models;
mod config;
mod dom;
mod schedule;
mod search;
mod claim;
mod notify;
mod empty_state;
mod form_guard;
mod app;

use app::ShareBite;

fn main() {
    console_error_panic_hook::set_once();
    ShareBite::boot();
}
