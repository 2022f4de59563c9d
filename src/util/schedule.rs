//! Deferred task scheduling.
//!
//! ARCHITECTURE
//! ============
//! Animation sequencing needs a handful of fire-and-forget delays. Controllers
//! schedule through the `Scheduler` trait: the browser implementation wraps
//! `gloo_timers::callback::Timeout`, and `ManualClock` drives the same code
//! deterministically in host tests.
//!
//! TRADE-OFFS
//! ==========
//! Tasks are never cancelled. A stale task (for example a scrollbar pass for
//! a modal that was closed again) still runs; every scheduled effect here is
//! idempotent and cheap, so that is accepted.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, no earlier than `delay_ms` from now.
    fn defer(&self, delay_ms: u32, task: Task);
}

/// Browser timers backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserTimers {
    fn defer(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Virtual clock: tasks only run when the clock is advanced past their due time.
#[derive(Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualClock")
            .field("now_ms", &self.now_ms.get())
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move time forward by `ms`, running every task that falls due.
    ///
    /// Tasks run in due-time order, ties broken by scheduling order. Tasks
    /// scheduled while advancing run in the same call if they fall due.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        while let Some(next) = self.take_due(target) {
            self.now_ms.set(next.due_ms);
            (next.task)();
        }
        self.now_ms.set(target);
    }

    fn take_due(&self, target: u64) -> Option<Pending> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= target)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(index, _)| index)?;
        Some(pending.swap_remove(index))
    }
}

impl Scheduler for ManualClock {
    fn defer(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}
