//! # portfolio-ui
//!
//! WebAssembly interactivity for a static portfolio page: theme switching,
//! scroll-triggered reveals, progress bar fills, a mobile menu, smooth-scroll
//! anchors, active-section highlighting, and a sample-code modal.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure controllers and state machines, testable on the host |
//! | [`components`] | Browser bindings that apply controller effects to the DOM (`hydrate`) |
//! | [`config`] | DOM contract and timings, overridable from the page |
//! | [`util`] | Effect hooks, scheduling, storage, web-sys helpers |
//! | [`error`] | `PageError` and its logging policy |

#[cfg(feature = "hydrate")]
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }

    let doc = match util::dom::document() {
        Ok(doc) => doc,
        Err(err) => {
            error::report("boot", &err);
            return;
        }
    };
    if doc.ready_state() == "loading" {
        let wired = util::dom::listen(&doc, "DOMContentLoaded", |_| boot());
        util::dom::log_failure("boot", wired);
    } else {
        boot();
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    match components::mount_page() {
        Ok(_app) => log::info!("portfolio ui ready"),
        Err(err) => error::report("boot", &err),
    }
}
