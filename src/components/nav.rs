//! Navigation binding: smooth-scroll anchors, mobile menu, scroll spy.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::SharedApp;
use crate::error::PageError;
use crate::state::nav::{
    ACTIVE_LINK_CLASS, CURRENT_LINK_CLASS, MOBILE_MENU_CLASSES, SectionBounds, active_section, anchor_fragment,
    link_is_current,
};
use crate::util::dom;

fn scroll_to_fragment(doc: &Document, href: Option<&str>) {
    let Some(target) = href.and_then(anchor_fragment).and_then(|id| doc.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn wire_anchors(doc: &Document, selector: &str) -> Result<(), PageError> {
    for anchor in dom::query_all(doc, selector)? {
        let doc = doc.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            scroll_to_fragment(&doc, link.get_attribute("href").as_deref());
        })?;
    }
    Ok(())
}

fn wire_mobile_menu(app: &SharedApp, doc: &Document, button: &str, menu: &str) -> Result<(), PageError> {
    let button = dom::query(doc, button)?;
    let menu = dom::query(doc, menu)?;
    let app = Rc::clone(app);
    dom::listen(&button, "click", move |_| {
        let state = app.borrow_mut().menu.toggle();
        log::debug!("mobile menu {state:?}");
        for class in MOBILE_MENU_CLASSES {
            dom::log_failure("mobile menu", dom::toggle_class(&menu, class));
        }
    })
}

fn section_bounds(sections: &[Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|section| {
            let html = section.dyn_ref::<HtmlElement>()?;
            Some(SectionBounds {
                id: section.get_attribute("id"),
                top: f64::from(html.offset_top()),
            })
        })
        .collect()
}

fn highlight_links(links: &[Element], current: Option<&str>) -> Result<(), PageError> {
    for link in links {
        dom::remove_class(link, ACTIVE_LINK_CLASS)?;
        let is_current = link
            .get_attribute("href")
            .is_some_and(|href| link_is_current(&href, current));
        link.class_list().toggle_with_force(CURRENT_LINK_CLASS, is_current)?;
    }
    Ok(())
}

fn wire_scroll_spy(doc: &Document, section_selector: &str, link_selector: &str, offset: f64) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::MissingElement("window".to_owned()))?;
    let sections = dom::query_all(doc, section_selector)?;
    let links = dom::query_all(doc, link_selector)?;
    let scroller = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let result = scroller.scroll_y().map_err(PageError::from).and_then(|scroll_y| {
            let bounds = section_bounds(&sections);
            highlight_links(&links, active_section(&bounds, scroll_y, offset))
        });
        dom::log_failure("scroll spy", result);
    })
}

pub fn mount(app: &SharedApp, doc: &Document) -> Result<(), PageError> {
    let config = app.borrow().config.clone();

    dom::log_failure("smooth scroll", wire_anchors(doc, &config.anchor_selector));
    dom::log_failure(
        "mobile menu",
        wire_mobile_menu(app, doc, &config.menu_button_selector, &config.menu_selector),
    );
    wire_scroll_spy(
        doc,
        &config.section_selector,
        &config.nav_link_selector,
        config.scroll_spy_offset,
    )
}
