//! Small web-sys helpers used by the page bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::PageError;

pub fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::MissingElement("document".to_owned()))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, PageError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

pub fn query(doc: &Document, selector: &str) -> Result<Element, PageError> {
    doc.query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement(selector.to_owned()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = doc.query_selector_all(selector)?;
    let mut elements = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            elements.push(el);
        }
    }
    Ok(elements)
}

pub fn as_html(el: &Element) -> Result<&HtmlElement, PageError> {
    el.dyn_ref::<HtmlElement>()
        .ok_or_else(|| PageError::Js("element is not an HtmlElement".to_owned()))
}

pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), PageError> {
    as_html(el)?.style().set_property(property, value)?;
    Ok(())
}

pub fn inline_style(el: &Element, property: &str) -> Result<String, PageError> {
    Ok(as_html(el)?.style().get_property_value(property)?)
}

pub fn add_class(el: &Element, class: &str) -> Result<(), PageError> {
    el.class_list().add_1(class)?;
    Ok(())
}

pub fn remove_class(el: &Element, class: &str) -> Result<(), PageError> {
    el.class_list().remove_1(class)?;
    Ok(())
}

pub fn toggle_class(el: &Element, class: &str) -> Result<(), PageError> {
    el.class_list().toggle(class)?;
    Ok(())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Log the outcome of a DOM write made from inside an event handler.
pub fn log_failure(context: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        crate::error::report(context, &err);
    }
}
