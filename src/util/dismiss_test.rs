use super::*;

// =============================================================
// should_dismiss / is_dismiss_key
// =============================================================

#[test]
fn outside_hit_dismisses_open_region() {
    assert!(should_dismiss(true, PointerHit::Outside));
}

#[test]
fn inside_hit_keeps_region_open() {
    assert!(!should_dismiss(true, PointerHit::Inside));
}

#[test]
fn closed_region_ignores_all_hits() {
    assert!(!should_dismiss(false, PointerHit::Outside));
    assert!(!should_dismiss(false, PointerHit::Inside));
}

#[test]
fn only_escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("Esc "));
}

// =============================================================
// DismissGuard
// =============================================================

#[test]
fn outside_press_on_open_region_swallows_following_click() {
    let mut guard = DismissGuard::default();
    assert!(guard.press(true, PointerHit::Outside));
    assert!(guard.take_click());
}

#[test]
fn swallow_applies_to_a_single_click() {
    let mut guard = DismissGuard::default();
    guard.press(true, PointerHit::Outside);
    assert!(guard.take_click());
    assert!(!guard.take_click());
}

#[test]
fn inside_press_lets_click_through() {
    let mut guard = DismissGuard::default();
    assert!(!guard.press(true, PointerHit::Inside));
    assert!(!guard.take_click());
}

#[test]
fn press_while_closed_lets_click_through() {
    let mut guard = DismissGuard::default();
    assert!(!guard.press(false, PointerHit::Outside));
    assert!(!guard.take_click());
}

#[test]
fn later_press_clears_unconsumed_swallow() {
    // A dismissing press whose click never arrives (e.g. drag off-window).
    let mut guard = DismissGuard::default();
    guard.press(true, PointerHit::Outside);
    guard.press(false, PointerHit::Outside);
    assert!(!guard.take_click());
}
