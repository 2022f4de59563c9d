use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::modal::ModalState;
use crate::state::reveal::ProgressBar;
use crate::state::theme::Theme;
use crate::util::schedule::ManualClock;
use crate::util::storage::MemoryStore;

fn app(store: MemoryStore) -> (AppState<MemoryStore>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new());
    let scheduler: Rc<dyn Scheduler> = clock.clone();
    (AppState::new(PageConfig::default(), store, scheduler), clock)
}

#[test]
fn first_load_defaults_to_dark() {
    let (mut app, _clock) = app(MemoryStore::new());
    assert_eq!(app.theme.init(), Theme::Dark);
    assert_eq!(app.theme.store().read("theme").as_deref(), Some("dark"));
}

#[test]
fn config_overrides_flow_into_controllers() {
    let clock = Rc::new(ManualClock::new());
    let config = PageConfig {
        storage_key: "portfolio-theme".to_owned(),
        default_theme: Theme::Light,
        ..PageConfig::default()
    };
    let mut app = AppState::new(config, MemoryStore::new(), clock);

    assert_eq!(app.theme.init(), Theme::Light);
    assert_eq!(app.theme.store().read("portfolio-theme").as_deref(), Some("light"));
    assert_eq!(app.theme.store().read("theme"), None);
}

#[test]
fn page_load_fills_progress_bar_after_delay() {
    let (app, clock) = app(MemoryStore::new());
    let bar = app.animator.borrow_mut().add_bar("80%");

    app.start_animations();
    clock.advance(u64::from(app.config.progress_delay_ms));

    assert_eq!(app.animator.borrow().bar(bar).map(ProgressBar::width), Some("80%"));
}

#[test]
fn modal_open_schedules_scrollbar_pass() {
    let (mut app, clock) = app(MemoryStore::new());
    let steps = Rc::new(RefCell::new(Vec::new()));
    let steps_for_pass = Rc::clone(&steps);
    app.schedule_scrollbars_on_open(Rc::new(move |step: ScrollbarStep| steps_for_pass.borrow_mut().push(step)));

    assert!(app.modal.open());
    assert_eq!(app.modal.state(), ModalState::Open);
    assert!(steps.borrow().is_empty());

    clock.advance(300);
    assert_eq!(*steps.borrow(), vec![ScrollbarStep::Reset, ScrollbarStep::Reassert]);
}

#[test]
fn stale_scrollbar_pass_runs_after_close() {
    let (mut app, clock) = app(MemoryStore::new());
    let steps = Rc::new(RefCell::new(Vec::new()));
    let steps_for_pass = Rc::clone(&steps);
    app.schedule_scrollbars_on_open(Rc::new(move |step: ScrollbarStep| steps_for_pass.borrow_mut().push(step)));

    app.modal.open();
    app.modal.handle_key("Escape");
    clock.advance(300);

    assert_eq!(app.modal.state(), ModalState::Closed);
    assert_eq!(steps.borrow().len(), 2);
}
