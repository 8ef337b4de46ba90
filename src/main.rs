#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod routes;
mod stores;
mod utils;

use context::AppContext;
use stores::storage::{BrowserStorage, StorageScope};

/// Browser storage area the profile page reads from
const PROFILE_STORAGE_SCOPE: StorageScope = StorageScope::Local;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting profile view");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let storage = BrowserStorage::new(PROFILE_STORAGE_SCOPE);
        log::info!("Reading profile from {} storage", storage.scope().as_str());
        AppContext::new(storage)
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
