//! Navigation helpers: mobile menu, anchor targets, and scroll spy.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Classes flipped on the menu container when the mobile button is pressed.
pub const MOBILE_MENU_CLASSES: [&str; 10] = [
    "hidden",
    "flex",
    "flex-col",
    "absolute",
    "top-16",
    "left-0",
    "right-0",
    "bg-dark",
    "p-4",
    "space-y-4",
];
/// Class set on the nav link of the current section.
pub const CURRENT_LINK_CLASS: &str = "text-primary";
/// Legacy class cleared from every nav link on scroll.
pub const ACTIVE_LINK_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip the menu; the caller toggles `MOBILE_MENU_CLASSES` on the container.
    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.toggled();
        self.state
    }
}

/// Element id an in-page link points at (`"#about"` -> `"about"`).
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A section's id and its offset from the top of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
}

/// Id of the section the reader is in: the last one (in document order)
/// whose top, less `offset`, has been scrolled past.
///
/// A matching section without an id yields `None`, so no link lights up.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .and_then(|section| section.id.as_deref())
}

/// Whether a nav link with `href` points at the current section.
#[must_use]
pub fn link_is_current(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(fragment), Some(current)) => fragment == current,
        _ => false,
    }
}
