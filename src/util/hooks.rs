//! Ordered effect callbacks attached to a canonical operation.
//!
//! DESIGN
//! ======
//! Controllers own one `EffectHooks` per operation instead of wrapping the
//! operation after the fact. Hooks run in registration order, so a later
//! hook can rely on the DOM mutations of an earlier one.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::fmt;

pub struct EffectHooks<T> {
    hooks: Vec<Box<dyn Fn(&T)>>,
}

impl<T> Default for EffectHooks<T> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<T> fmt::Debug for EffectHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectHooks")
            .field("len", &self.hooks.len())
            .finish()
    }
}

impl<T> EffectHooks<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; it runs after every hook registered before it.
    pub fn register(&mut self, hook: impl Fn(&T) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn run(&self, value: &T) {
        for hook in &self.hooks {
            hook(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
