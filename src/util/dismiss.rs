//! Close-on-outside-interaction regions for popovers and menus.
//!
//! A region is the element behind a `NodeRef`. While the region reports itself
//! open, a window-level `pointerdown` listener classifies each press as inside
//! or outside the region and dismisses only on outside presses. The click that
//! completes a dismissing press is swallowed in the capture phase, so the
//! control under the pointer never sees it.
//!
//! The listeners only exist in the browser; SSR and native tests install
//! nothing. [`DismissGuard`] holds the decisions and is shared by both.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

use leptos::prelude::*;

/// Where a pointer interaction landed relative to a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerHit {
    Inside,
    Outside,
}

/// Whether an interaction should dismiss a region in the given open state.
pub fn should_dismiss(open: bool, hit: PointerHit) -> bool {
    open && hit == PointerHit::Outside
}

/// Whether a key press should dismiss an open region.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Press/click bookkeeping for one region.
///
/// Every press overwrites the pending state, so a press that did not dismiss
/// never leaves a stale swallow behind for a later click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DismissGuard {
    swallow_click: bool,
}

impl DismissGuard {
    /// Record a pointer press. Returns whether the region should close.
    pub fn press(&mut self, open: bool, hit: PointerHit) -> bool {
        let dismiss = should_dismiss(open, hit);
        self.swallow_click = dismiss;
        dismiss
    }

    /// Whether the click completing the last press must be swallowed.
    /// Consumes the pending state.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }
}

/// Call `on_dismiss` for presses outside `region` while `open`, and swallow
/// the click that follows such a press.
pub fn use_dismiss_region(region: NodeRef<leptos::html::Div>, open: Signal<bool>, on_dismiss: Callback<()>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let guard = StoredValue::new(DismissGuard::default());
        let alive = Arc::new(AtomicBool::new(true));

        let press_alive = alive.clone();
        let handle = window_event_listener(leptos::ev::pointerdown, move |ev| {
            if !press_alive.load(Ordering::Relaxed) {
                return;
            }
            let inside = match (region.get_untracked(), ev.target()) {
                (Some(el), Some(target)) => target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| el.contains(Some(node))),
                _ => false,
            };
            let hit = if inside { PointerHit::Inside } else { PointerHit::Outside };
            let mut dismiss = false;
            guard.update_value(|g| dismiss = g.press(open.get_untracked(), hit));
            if dismiss {
                on_dismiss.run(());
            }
        });

        let click_alive = alive.clone();
        let swallow = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if !click_alive.load(Ordering::Relaxed) {
                return;
            }
            let mut swallow = false;
            guard.update_value(|g| swallow = g.take_click());
            if swallow {
                ev.stop_propagation();
                ev.prevent_default();
            }
        });
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.add_event_listener_with_callback_and_bool("click", swallow.as_ref().unchecked_ref(), true)
            {
                leptos::logging::warn!("dismiss region: capture listener not installed: {err:?}");
            }
        }
        // The capture listener outlives the region; `alive` turns it inert.
        swallow.forget();

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            handle.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (region, open, on_dismiss);
    }
}
