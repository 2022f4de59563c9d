//! Reveal binding: intersection observer, progress bars, staggered groups.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, TransitionEvent};

use crate::components::SharedApp;
use crate::error::PageError;
use crate::state::reveal::{ANIMATE_CLASS, RevealEffect, VisibilityAnimator, Visibility, resolve_target, stagger_delays};
use crate::util::dom;

const SLOT_ATTRIBUTE: &str = "data-reveal-slot";

fn apply_effect(sections: &[Element], bars: &[Element], effect: &RevealEffect) -> Result<(), PageError> {
    match effect {
        RevealEffect::Animate { slot } => {
            if let Some(el) = sections.get(*slot) {
                dom::add_class(el, ANIMATE_CLASS)?;
            }
        }
        RevealEffect::Resize { slot, width } => {
            if let Some(el) = sections.get(*slot) {
                dom::set_style(el, "width", width)?;
            }
        }
        RevealEffect::Bar { bar, style } => {
            if let Some(el) = bars.get(*bar) {
                if let Some(transition) = style.transition {
                    dom::set_style(el, "transition", transition)?;
                }
                dom::set_style(el, "width", &style.width)?;
            }
        }
    }
    Ok(())
}

fn apply_stagger(doc: &Document, selector: &str, step_s: f64) -> Result<(), PageError> {
    let children = dom::query_all(doc, selector)?;
    for (child, delay) in children.iter().zip(stagger_delays(children.len(), step_s)) {
        dom::set_style(child, "animation-delay", &delay)?;
    }
    Ok(())
}

fn slot_of(el: &Element) -> Option<usize> {
    let raw = el.get_attribute(SLOT_ATTRIBUTE)?;
    match raw.parse() {
        Ok(slot) => Some(slot),
        Err(err) => {
            log::debug!("bad reveal slot {raw:?}: {err}");
            None
        }
    }
}

fn observe_sections(app: &SharedApp, sections: &[Element], threshold: f64) -> Result<(), PageError> {
    let animator = Rc::clone(&app.borrow().animator);
    let scheduler = app.borrow().scheduler();

    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(slot) = slot_of(&target) else {
                continue;
            };
            let visibility = Visibility {
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            };
            if VisibilityAnimator::handle_visibility(&animator, slot, visibility, scheduler.as_ref()) {
                observer.unobserve(&target);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    for section in sections {
        observer.observe(section);
    }
    Ok(())
}

pub fn mount(app: &SharedApp, doc: &Document) -> Result<(), PageError> {
    let config = app.borrow().config.clone();
    let animator = Rc::clone(&app.borrow().animator);

    let bars = dom::query_all(doc, &config.progress_selector)?;
    for bar in &bars {
        let data_width = bar.get_attribute("data-width");
        let target = resolve_target(data_width.as_deref(), &dom::inline_style(bar, "width")?);
        let index = animator.borrow_mut().add_bar(target);
        let animator_for_end = Rc::clone(&animator);
        dom::listen(bar, "transitionend", move |ev| {
            let is_width = ev
                .dyn_ref::<TransitionEvent>()
                .is_some_and(|t| t.property_name() == "width");
            if is_width {
                animator_for_end.borrow_mut().finish_bar(index);
            }
        })?;
    }

    let sections = dom::query_all(doc, &config.section_selector)?;
    for section in &sections {
        let progress_width = if section.matches(&config.progress_selector)? {
            section.get_attribute("data-width")
        } else {
            None
        };
        let slot = animator.borrow_mut().watch(progress_width);
        section.set_attribute(SLOT_ATTRIBUTE, &slot.to_string())?;
    }

    let hook_sections = sections.clone();
    let hook_bars = bars.clone();
    animator.borrow_mut().on_effect(move |effect| {
        dom::log_failure("reveal effect", apply_effect(&hook_sections, &hook_bars, effect));
    });

    app.borrow().start_animations();
    log::debug!("watching {} sections, {} progress bars", sections.len(), bars.len());

    dom::log_failure(
        "staggered groups",
        apply_stagger(doc, &config.stagger_selector, config.stagger_step_s),
    );
    observe_sections(app, &sections, config.reveal_threshold)
}
