//! Theme toggle binding: root attribute, icon, neon flag, and the click trigger.

use std::rc::Rc;

use web_sys::Document;

use crate::components::SharedApp;
use crate::error::PageError;
use crate::state::theme::{NO_NEON_CLASS, THEME_ATTRIBUTE, Theme};
use crate::util::dom;

fn apply_root(doc: &Document, theme: Theme) -> Result<(), PageError> {
    let root = doc
        .document_element()
        .ok_or_else(|| PageError::MissingElement("html".to_owned()))?;
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

/// Swap the icon glyph; a page without the icon holder is left alone.
fn apply_icon(doc: &Document, icon_id: &str, theme: Theme) {
    if let Some(icon) = doc.get_element_by_id(icon_id) {
        icon.set_inner_html(&format!("<i class=\"{}\"></i>", theme.icon_class()));
    }
}

fn apply_neon(doc: &Document, theme: Theme) -> Result<(), PageError> {
    let body = doc
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
    body.class_list()
        .toggle_with_force(NO_NEON_CLASS, theme.suppresses_neon())?;
    Ok(())
}

pub fn mount(app: &SharedApp, doc: &Document) -> Result<(), PageError> {
    let toggle_id = {
        let mut state = app.borrow_mut();
        let icon_id = state.config.theme_icon_id.clone();

        let doc_for_root = doc.clone();
        state
            .theme
            .on_change(move |theme| dom::log_failure("theme attribute", apply_root(&doc_for_root, *theme)));
        let doc_for_icon = doc.clone();
        state
            .theme
            .on_change(move |theme| apply_icon(&doc_for_icon, &icon_id, *theme));
        let doc_for_neon = doc.clone();
        state
            .theme
            .on_change(move |theme| dom::log_failure("neon effect", apply_neon(&doc_for_neon, *theme)));

        let theme = state.theme.init();
        log::debug!("initial theme {theme}");
        state.config.theme_toggle_id.clone()
    };

    let Some(toggle) = doc.get_element_by_id(&toggle_id) else {
        log::warn!("theme toggle #{toggle_id} not found; theme switching disabled");
        return Ok(());
    };
    let app = Rc::clone(app);
    dom::listen(&toggle, "click", move |_| {
        app.borrow_mut().theme.toggle_theme();
    })
}
