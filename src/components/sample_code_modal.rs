//! Sample-code modal binding.
//!
//! Open hooks run in this order: reveal the overlay and lock scrolling,
//! re-run the syntax highlighter, then queue the scrollbar recalculation for
//! the code panels (which only measures correctly once the overlay is shown).

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use crate::components::SharedApp;
use crate::error::PageError;
use crate::state::modal::{CloseReason, ModalState, ScrollbarStep};
use crate::util::dom;

fn show(modal: &Element, body: Option<&HtmlElement>, state: ModalState) -> Result<(), PageError> {
    match state {
        ModalState::Open => {
            dom::remove_class(modal, "hidden")?;
            dom::add_class(modal, "flex")?;
        }
        ModalState::Closed => {
            dom::add_class(modal, "hidden")?;
            dom::remove_class(modal, "flex")?;
        }
    }
    if let Some(body) = body {
        body.style().set_property("overflow", state.body_overflow())?;
    }
    Ok(())
}

/// Re-run `hljs.highlightAll()` when highlight.js is on the page.
fn highlight_code() -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::MissingElement("window".to_owned()))?;
    let hljs = js_sys::Reflect::get(&window, &JsValue::from_str("hljs"))?;
    if hljs.is_undefined() || hljs.is_null() {
        return Ok(());
    }
    let highlight_all = js_sys::Reflect::get(&hljs, &JsValue::from_str("highlightAll"))?;
    if let Some(highlight_all) = highlight_all.dyn_ref::<js_sys::Function>() {
        highlight_all.call0(&hljs)?;
    }
    Ok(())
}

fn recalc_scrollbars(doc: &Document, selector: &str, step: ScrollbarStep) -> Result<(), PageError> {
    for pre in dom::query_all(doc, selector)? {
        dom::set_style(&pre, "overflow", "scroll")?;
        if step == ScrollbarStep::Reset {
            pre.set_scroll_top(0);
            pre.set_scroll_left(0);
        }
    }
    Ok(())
}

fn wire_click(app: &SharedApp, doc: &Document, id: &str, action: fn(&SharedApp)) -> Result<(), PageError> {
    let trigger = dom::by_id(doc, id)?;
    let app = Rc::clone(app);
    dom::listen(&trigger, "click", move |_| action(&app))
}

pub fn mount(app: &SharedApp, doc: &Document) -> Result<(), PageError> {
    let config = app.borrow().config.clone();
    let modal = dom::by_id(doc, &config.modal_id)?;
    let body = doc.body();

    {
        let mut state = app.borrow_mut();

        let (modal_for_open, body_for_open) = (modal.clone(), body.clone());
        state.modal.on_open(move |opened| {
            dom::log_failure("modal reveal", show(&modal_for_open, body_for_open.as_ref(), *opened));
        });
        state
            .modal
            .on_open(|_| dom::log_failure("code highlight", highlight_code()));

        let doc_for_pass = doc.clone();
        let code_selector = config.modal_code_selector();
        state.schedule_scrollbars_on_open(Rc::new(move |step: ScrollbarStep| {
            dom::log_failure("modal scrollbars", recalc_scrollbars(&doc_for_pass, &code_selector, step));
        }));

        let (modal_for_close, body_for_close) = (modal.clone(), body);
        state.modal.on_close(move |_| {
            dom::log_failure("modal hide", show(&modal_for_close, body_for_close.as_ref(), ModalState::Closed));
        });
    }

    let open_result = wire_click(app, doc, &config.modal_open_id, |app| {
        app.borrow_mut().modal.open();
    });
    dom::log_failure("modal open trigger", open_result);
    let close_result = wire_click(app, doc, &config.modal_close_id, |app| {
        app.borrow_mut().modal.close(CloseReason::Button);
    });
    dom::log_failure("modal close trigger", close_result);

    let app_for_backdrop = Rc::clone(app);
    let overlay = modal.clone();
    dom::listen(&modal, "click", move |ev| {
        let on_overlay = ev.target().is_some_and(|target| {
            target
                .dyn_ref::<Node>()
                .is_some_and(|node| overlay.is_same_node(Some(node)))
        });
        app_for_backdrop.borrow_mut().modal.handle_overlay_click(on_overlay);
    })?;

    let app_for_keys = Rc::clone(app);
    dom::listen(doc, "keydown", move |ev| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            app_for_keys.borrow_mut().modal.handle_key(&key);
        }
    })
}
