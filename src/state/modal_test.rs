use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::schedule::ManualClock;

fn recorded() -> (ModalController, Rc<RefCell<Vec<String>>>) {
    let mut modal = ModalController::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_open = Rc::clone(&log);
    modal.on_open(move |state| log_open.borrow_mut().push(format!("open:{}", state.body_overflow())));
    let log_close = Rc::clone(&log);
    modal.on_close(move |reason| log_close.borrow_mut().push(format!("close:{reason:?}")));
    (modal, log)
}

#[test]
fn initial_state_is_closed() {
    let modal = ModalController::new();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.state().locks_scroll());
}

#[test]
fn open_then_escape_releases_scroll_lock() {
    let (mut modal, log) = recorded();

    assert!(modal.open());
    assert_eq!(modal.state(), ModalState::Open);
    assert!(modal.state().locks_scroll());
    assert_eq!(modal.state().body_overflow(), "hidden");

    assert!(modal.handle_key("Escape"));
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(modal.state().body_overflow(), "auto");
    assert_eq!(*log.borrow(), vec!["open:hidden", "close:Escape"]);
}

#[test]
fn escape_while_closed_is_ignored() {
    let (mut modal, log) = recorded();
    assert!(!modal.handle_key("Escape"));
    assert!(log.borrow().is_empty());
}

#[test]
fn other_keys_do_not_close() {
    let (mut modal, _log) = recorded();
    modal.open();
    assert!(!modal.handle_key("Enter"));
    assert!(!modal.handle_key("Esc"));
    assert!(modal.is_open());
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let (mut modal, log) = recorded();
    modal.open();

    assert!(!modal.handle_overlay_click(false));
    assert!(modal.is_open());

    assert!(modal.handle_overlay_click(true));
    assert!(!modal.is_open());
    assert_eq!(log.borrow().last().map(String::as_str), Some("close:Backdrop"));
}

#[test]
fn repeated_open_and_close_are_noops() {
    let (mut modal, log) = recorded();
    assert!(modal.open());
    assert!(!modal.open());
    assert!(modal.close(CloseReason::Button));
    assert!(!modal.close(CloseReason::Button));
    assert_eq!(*log.borrow(), vec!["open:hidden", "close:Button"]);
}

#[test]
fn scrollbar_pass_runs_after_reveal() {
    let clock = Rc::new(ManualClock::new());
    let scheduler: Rc<dyn Scheduler> = clock.clone();
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut modal = ModalController::new();
    let log_reveal = Rc::clone(&log);
    modal.on_open(move |_| log_reveal.borrow_mut().push("reveal".to_owned()));
    let log_pass = Rc::clone(&log);
    let scheduler_for_hook = Rc::clone(&scheduler);
    modal.on_open(move |_| {
        let log = Rc::clone(&log_pass);
        schedule_scrollbar_pass(
            &scheduler_for_hook,
            200,
            100,
            Rc::new(move |step: ScrollbarStep| log.borrow_mut().push(format!("{step:?}"))),
        );
    });

    modal.open();
    assert_eq!(*log.borrow(), vec!["reveal"]);

    clock.advance(200);
    assert_eq!(*log.borrow(), vec!["reveal", "Reset"]);

    clock.advance(100);
    assert_eq!(*log.borrow(), vec!["reveal", "Reset", "Reassert"]);
    assert_eq!(clock.now_ms(), 300);
}
