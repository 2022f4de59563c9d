//! Page state machines.
//!
//! DESIGN
//! ======
//! Each controller is a pure transition function plus ordered effect hooks.
//! Nothing here touches the DOM; `components` registers the hooks that do.

pub mod app;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;
