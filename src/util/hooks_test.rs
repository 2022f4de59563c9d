use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn hooks_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut hooks = EffectHooks::new();
    for name in ["attribute", "icon", "neon"] {
        let log = Rc::clone(&log);
        hooks.register(move |value: &u32| log.borrow_mut().push(format!("{name}:{value}")));
    }

    hooks.run(&7);

    assert_eq!(*log.borrow(), vec!["attribute:7", "icon:7", "neon:7"]);
}

#[test]
fn empty_hooks_are_a_noop() {
    let hooks: EffectHooks<()> = EffectHooks::new();
    assert!(hooks.is_empty());
    hooks.run(&());
}

#[test]
fn len_counts_registrations() {
    let mut hooks: EffectHooks<()> = EffectHooks::new();
    hooks.register(|_| {});
    hooks.register(|_| {});
    assert_eq!(hooks.len(), 2);
    assert!(!hooks.is_empty());
}
