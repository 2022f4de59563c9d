//! Browser bindings for the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each binding looks up its slice of the markup, registers DOM-writing hooks
//! on its controller, and wires browser events to controller operations. A
//! binding whose markup is missing stays inactive; the others still mount.

pub mod nav;
pub mod reveal;
pub mod sample_code_modal;
pub mod theme_toggle;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::{PageError, report};
use crate::state::app::AppState;
use crate::util::dom;
use crate::util::schedule::BrowserTimers;
use crate::util::storage::LocalStore;

/// Application state shared between event handlers.
pub type SharedApp = Rc<RefCell<AppState<LocalStore>>>;

fn read_config(doc: &Document) -> PageConfig {
    let raw = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    PageConfig::load_or_default(raw.as_deref())
}

/// Build the application state and mount every binding.
pub fn mount_page() -> Result<SharedApp, PageError> {
    let doc = dom::document()?;
    let config = read_config(&doc);
    let app: SharedApp = Rc::new(RefCell::new(AppState::new(config, LocalStore, Rc::new(BrowserTimers))));

    let bindings: [(&str, fn(&SharedApp, &Document) -> Result<(), PageError>); 4] = [
        ("reveal animations", reveal::mount),
        ("theme toggle", theme_toggle::mount),
        ("navigation", nav::mount),
        ("sample code modal", sample_code_modal::mount),
    ];
    for (name, mount) in bindings {
        match mount(&app, &doc) {
            Ok(()) => log::debug!("mounted {name}"),
            Err(err) => report(name, &err),
        }
    }
    Ok(app)
}
