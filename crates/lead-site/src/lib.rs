//! Lead Capture Landing Site
//!
//! A Leptos landing page, server-side rendered through axum and hydrated
//! in the browser. All form behavior lives in the `lead-core` state
//! machine; this crate binds it to the DOM and the form relay.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod pages;
pub mod submit;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::SiteConfig;
    use leptos::*;

    console_error_panic_hook::set_once();

    // The endpoint is baked in at build time; an invalid value fails here,
    // before any submit handler can run.
    let config = SiteConfig::from_build_env().expect("site configuration rejected");

    mount_to_body(move || {
        provide_context(config.clone());
        view! { <App/> }
    });
}
