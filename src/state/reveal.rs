//! Scroll-triggered reveals, progress bar fills, and staggered delays.
//!
//! ARCHITECTURE
//! ============
//! `RevealTracker` is the per-element one-shot state machine
//! (`Pending -> Animated`). `ProgressBar` is the startup fill machine
//! (`Collapsed -> Growing -> Filled`). `VisibilityAnimator` owns both and
//! sequences their delayed steps through a `Scheduler`; DOM writes happen in
//! hooks registered by the browser binding.
//!
//! TRADE-OFFS
//! ==========
//! The `Collapsed -> Growing` step is a fixed delay because there is no
//! browser signal for "the transition style has been applied". The
//! `Growing -> Filled` step is driven by `transitionend`.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::util::hooks::EffectHooks;
use crate::util::schedule::Scheduler;

/// Class that starts a section's reveal animation.
pub const ANIMATE_CLASS: &str = "animate";
/// Width every progress bar collapses to at startup.
pub const COLLAPSED_WIDTH: &str = "0%";
/// Transition applied to progress bars before they grow.
pub const PROGRESS_TRANSITION: &str = "width 1.2s cubic-bezier(0.4,0,0.2,1)";

const RATIO_EPSILON: f64 = 1e-6;

// =============================================================================
// ONE-SHOT REVEALS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Animated,
}

/// One intersection observation for an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    #[must_use]
    pub fn entering(self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_EPSILON >= threshold
    }
}

/// Emitted once per element when it first becomes visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealTrigger {
    pub slot: usize,
    pub progress_width: Option<String>,
}

#[derive(Debug)]
struct Watched {
    phase: RevealPhase,
    progress_width: Option<String>,
}

#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    watched: Vec<Watched>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, watched: Vec::new() }
    }

    /// Start tracking an element; `progress_width` marks it as a progress
    /// indicator with that target width. Returns the element's slot.
    pub fn watch(&mut self, progress_width: Option<String>) -> usize {
        self.watched.push(Watched { phase: RevealPhase::Pending, progress_width });
        self.watched.len() - 1
    }

    #[must_use]
    pub fn phase(&self, slot: usize) -> Option<RevealPhase> {
        self.watched.get(slot).map(|w| w.phase)
    }

    #[must_use]
    pub fn animated_count(&self) -> usize {
        self.watched
            .iter()
            .filter(|w| w.phase == RevealPhase::Animated)
            .count()
    }

    /// Feed one observation. Returns a trigger only on the first entry.
    pub fn observe(&mut self, slot: usize, visibility: Visibility) -> Option<RevealTrigger> {
        if !visibility.entering(self.threshold) {
            return None;
        }
        let watched = self.watched.get_mut(slot)?;
        if watched.phase == RevealPhase::Animated {
            return None;
        }
        watched.phase = RevealPhase::Animated;
        Some(RevealTrigger { slot, progress_width: watched.progress_width.clone() })
    }
}

// =============================================================================
// PROGRESS BARS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarPhase {
    #[default]
    Collapsed,
    Growing,
    Filled,
}

/// Inline style a progress bar should carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub width: String,
    pub transition: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBar {
    target: String,
    phase: BarPhase,
    width: String,
}

/// Target width for a bar: its `data-width`, else its current inline width.
#[must_use]
pub fn resolve_target(data_width: Option<&str>, inline_width: &str) -> String {
    match data_width {
        Some(width) if !width.is_empty() => width.to_owned(),
        _ => inline_width.to_owned(),
    }
}

impl ProgressBar {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            phase: BarPhase::Collapsed,
            width: COLLAPSED_WIDTH.to_owned(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> BarPhase {
        self.phase
    }

    #[must_use]
    pub fn width(&self) -> &str {
        &self.width
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        let transition = match self.phase {
            BarPhase::Collapsed => None,
            BarPhase::Growing | BarPhase::Filled => Some(PROGRESS_TRANSITION),
        };
        BarStyle { width: self.width.clone(), transition }
    }

    /// `Collapsed -> Growing`. Returns the new style, or `None` if already past.
    pub fn grow(&mut self) -> Option<BarStyle> {
        if self.phase != BarPhase::Collapsed {
            return None;
        }
        self.phase = BarPhase::Growing;
        self.width.clone_from(&self.target);
        Some(self.style())
    }

    /// `Growing -> Filled`, on the width transition finishing.
    pub fn finish(&mut self) -> bool {
        if self.phase != BarPhase::Growing {
            return false;
        }
        self.phase = BarPhase::Filled;
        true
    }
}

// =============================================================================
// STAGGERED GROUPS
// =============================================================================

/// `animation-delay` values for the children of a staggered group.
#[must_use]
pub fn stagger_delays(count: usize, step_s: f64) -> Vec<String> {
    (0..count)
        .map(|index| {
            #[allow(clippy::cast_precision_loss)]
            let seconds = step_s * index as f64;
            format_seconds(seconds)
        })
        .collect()
}

fn format_seconds(seconds: f64) -> String {
    let fixed = format!("{seconds:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}s")
}

// =============================================================================
// ANIMATOR
// =============================================================================

/// DOM mutations requested by the animator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add `ANIMATE_CLASS` to the watched element.
    Animate { slot: usize },
    /// Set the watched element's width.
    Resize { slot: usize, width: String },
    /// Apply a progress bar's style.
    Bar { bar: usize, style: BarStyle },
}

#[derive(Debug)]
pub struct VisibilityAnimator {
    tracker: RevealTracker,
    bars: Vec<ProgressBar>,
    delay_ms: u32,
    effects: EffectHooks<RevealEffect>,
}

impl VisibilityAnimator {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            tracker: RevealTracker::new(config.reveal_threshold),
            bars: Vec::new(),
            delay_ms: config.progress_delay_ms,
            effects: EffectHooks::new(),
        }
    }

    pub fn on_effect(&mut self, hook: impl Fn(&RevealEffect) + 'static) {
        self.effects.register(hook);
    }

    pub fn watch(&mut self, progress_width: Option<String>) -> usize {
        self.tracker.watch(progress_width)
    }

    pub fn add_bar(&mut self, target: impl Into<String>) -> usize {
        self.bars.push(ProgressBar::new(target));
        self.bars.len() - 1
    }

    #[must_use]
    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.bars.get(index)
    }

    /// Collapse every bar now and grow each one after the configured delay.
    pub fn start(this: &Rc<RefCell<Self>>, scheduler: &dyn Scheduler) {
        let (count, delay_ms) = {
            let animator = this.borrow();
            for (bar, state) in animator.bars.iter().enumerate() {
                animator.effects.run(&RevealEffect::Bar { bar, style: state.style() });
            }
            (animator.bars.len(), animator.delay_ms)
        };
        log::debug!("collapsed {count} progress bars");
        for bar in 0..count {
            let animator = Rc::clone(this);
            scheduler.defer(delay_ms, Box::new(move || animator.borrow_mut().grow_bar(bar)));
        }
    }

    pub fn grow_bar(&mut self, bar: usize) {
        let Some(style) = self.bars.get_mut(bar).and_then(ProgressBar::grow) else {
            return;
        };
        self.effects.run(&RevealEffect::Bar { bar, style });
    }

    pub fn finish_bar(&mut self, bar: usize) -> bool {
        self.bars.get_mut(bar).is_some_and(ProgressBar::finish)
    }

    /// Feed one observation for a watched element.
    ///
    /// Returns `true` when this observation triggered the element's reveal.
    pub fn handle_visibility(
        this: &Rc<RefCell<Self>>,
        slot: usize,
        visibility: Visibility,
        scheduler: &dyn Scheduler,
    ) -> bool {
        let (trigger, delay_ms) = {
            let mut animator = this.borrow_mut();
            let Some(trigger) = animator.tracker.observe(slot, visibility) else {
                return false;
            };
            animator.effects.run(&RevealEffect::Animate { slot });
            (trigger, animator.delay_ms)
        };
        if let Some(width) = trigger.progress_width {
            let animator = Rc::clone(this);
            scheduler.defer(
                delay_ms,
                Box::new(move || {
                    animator
                        .borrow()
                        .effects
                        .run(&RevealEffect::Resize { slot, width });
                }),
            );
        }
        true
    }
}
