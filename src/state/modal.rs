//! Sample-code modal state.
//!
//! The modal is a singleton overlay: `Closed` until its open button fires,
//! back to `Closed` on the close button, a click on the backdrop itself, or
//! Escape. Open/close effects (reveal, scroll lock, highlight pass, scrollbar
//! recalculation) are hooks on the two canonical operations.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::rc::Rc;

use crate::util::hooks::EffectHooks;
use crate::util::schedule::Scheduler;

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    /// `overflow` value for `<body>` in this state.
    #[must_use]
    pub const fn body_overflow(self) -> &'static str {
        match self {
            Self::Closed => "auto",
            Self::Open => "hidden",
        }
    }

    #[must_use]
    pub const fn locks_scroll(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    open_effects: EffectHooks<ModalState>,
    close_effects: EffectHooks<CloseReason>,
}

impl ModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn on_open(&mut self, hook: impl Fn(&ModalState) + 'static) {
        self.open_effects.register(hook);
    }

    pub fn on_close(&mut self, hook: impl Fn(&CloseReason) + 'static) {
        self.close_effects.register(hook);
    }

    /// Open the modal. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = ModalState::Open;
        log::debug!("modal opened");
        self.open_effects.run(&self.state);
        true
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ModalState::Closed;
        log::debug!("modal closed ({reason:?})");
        self.close_effects.run(&reason);
        true
    }

    /// Close on Escape while open; every other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close(CloseReason::Escape)
    }

    /// Close when the click landed on the overlay itself, not its content.
    pub fn handle_overlay_click(&mut self, target_is_overlay: bool) -> bool {
        target_is_overlay && self.close(CloseReason::Backdrop)
    }
}

/// Steps of the scrollbar recalculation pass over the modal's code panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollbarStep {
    /// Force `overflow: scroll` and reset scroll offsets.
    Reset,
    /// Reassert `overflow: scroll` once content has rendered.
    Reassert,
}

/// Schedule the scrollbar pass: `Reset` after `delay_ms`, then `Reassert`
/// `settle_ms` later.
///
/// Panels that were `display: none` get miscalculated scrollbars; forcing a
/// recalculation after the modal is visible fixes them.
pub fn schedule_scrollbar_pass(
    scheduler: &Rc<dyn Scheduler>,
    delay_ms: u32,
    settle_ms: u32,
    apply: Rc<dyn Fn(ScrollbarStep)>,
) {
    let scheduler_for_reset = Rc::clone(scheduler);
    scheduler.defer(
        delay_ms,
        Box::new(move || {
            apply(ScrollbarStep::Reset);
            scheduler_for_reset.defer(settle_ms, Box::new(move || apply(ScrollbarStep::Reassert)));
        }),
    );
}
