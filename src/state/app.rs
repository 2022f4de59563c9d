//! Root application state.
//!
//! DESIGN
//! ======
//! One `AppState` is created at boot and handed to every binding. It owns the
//! controllers, the page config, and the scheduler, so nothing on the page
//! lives in a global.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::state::modal::{ModalController, ScrollbarStep, schedule_scrollbar_pass};
use crate::state::nav::MobileMenu;
use crate::state::reveal::VisibilityAnimator;
use crate::state::theme::ThemeController;
use crate::util::schedule::Scheduler;
use crate::util::storage::PreferenceStore;

pub struct AppState<S> {
    pub config: PageConfig,
    pub theme: ThemeController<S>,
    pub animator: Rc<RefCell<VisibilityAnimator>>,
    pub modal: ModalController,
    pub menu: MobileMenu,
    scheduler: Rc<dyn Scheduler>,
}

impl<S: fmt::Debug> fmt::Debug for AppState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("theme", &self.theme)
            .field("animator", &self.animator)
            .field("modal", &self.modal)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> AppState<S> {
    pub fn new(config: PageConfig, store: S, scheduler: Rc<dyn Scheduler>) -> Self {
        let theme = ThemeController::new(store, config.storage_key.clone(), config.default_theme);
        let animator = Rc::new(RefCell::new(VisibilityAnimator::new(&config)));
        Self {
            config,
            theme,
            animator,
            modal: ModalController::new(),
            menu: MobileMenu::default(),
            scheduler,
        }
    }

    #[must_use]
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.scheduler)
    }

    /// Register the delayed scrollbar pass as an open hook.
    ///
    /// Must be registered after the hook that reveals the overlay.
    pub fn schedule_scrollbars_on_open(&mut self, apply: Rc<dyn Fn(ScrollbarStep)>) {
        let scheduler = Rc::clone(&self.scheduler);
        let delay_ms = self.config.scrollbar_delay_ms;
        let settle_ms = self.config.scrollbar_settle_ms;
        self.modal.on_open(move |_| {
            schedule_scrollbar_pass(&scheduler, delay_ms, settle_ms, Rc::clone(&apply));
        });
    }

    /// Collapse progress bars and queue their growth.
    pub fn start_animations(&self) {
        VisibilityAnimator::start(&self.animator, self.scheduler.as_ref());
    }
}
