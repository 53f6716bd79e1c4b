//! # chatroom-views
//!
//! Leptos views for a realtime chat room: a username identity form and a
//! message stream with loading and empty states.
//!
//! The message transport, storage and session backend are not part of this
//! crate. A parent page feeds `ChatState` and receives accepted identities;
//! `app::App` is a ready-made parent for embedding.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ViewConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ViewConfig::from_document();
    log::info!("hydrating chat views");
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
