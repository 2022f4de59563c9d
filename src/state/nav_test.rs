use super::*;

fn section(id: &str, top: f64) -> SectionBounds {
    SectionBounds { id: Some(id.to_owned()), top }
}

// =============================================================
// MobileMenu
// =============================================================

#[test]
fn mobile_menu_starts_collapsed() {
    assert_eq!(MobileMenu::default().state(), MenuState::Collapsed);
}

#[test]
fn mobile_menu_toggle_is_an_involution() {
    let mut menu = MobileMenu::default();
    assert_eq!(menu.toggle(), MenuState::Expanded);
    assert_eq!(menu.toggle(), MenuState::Collapsed);
}

#[test]
fn mobile_menu_classes_include_hidden() {
    assert_eq!(MOBILE_MENU_CLASSES[0], "hidden");
    assert!(MOBILE_MENU_CLASSES.contains(&"flex-col"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_fragment_strips_hash() {
    assert_eq!(anchor_fragment("#about"), Some("about"));
    assert_eq!(anchor_fragment("#"), None);
    assert_eq!(anchor_fragment("/blog"), None);
}

// =============================================================
// Scroll spy
// =============================================================

#[test]
fn active_section_is_last_scrolled_past() {
    let sections = [section("home", 0.0), section("about", 600.0), section("projects", 1400.0)];

    assert_eq!(active_section(&sections, 0.0, 60.0), Some("home"));
    assert_eq!(active_section(&sections, 539.0, 60.0), Some("home"));
    assert_eq!(active_section(&sections, 540.0, 60.0), Some("about"));
    assert_eq!(active_section(&sections, 5000.0, 60.0), Some("projects"));
}

#[test]
fn active_section_none_above_first_section() {
    let sections = [section("about", 600.0)];
    assert_eq!(active_section(&sections, 100.0, 60.0), None);
    assert_eq!(active_section(&[], 100.0, 60.0), None);
}

#[test]
fn section_without_id_clears_highlight() {
    let sections = [section("home", 0.0), SectionBounds { id: None, top: 500.0 }];
    assert_eq!(active_section(&sections, 800.0, 60.0), None);
}

#[test]
fn link_is_current_matches_fragment() {
    assert!(link_is_current("#about", Some("about")));
    assert!(!link_is_current("#about", Some("projects")));
    assert!(!link_is_current("#about", None));
    assert!(!link_is_current("/resume.pdf", Some("resume.pdf")));
}
