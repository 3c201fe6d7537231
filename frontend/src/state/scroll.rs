//! Tracks whether the page has scrolled past the navbar threshold.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

use crate::config;

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub is_scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self { is_scrolled: is_scrolled(offset) }
    }
}

/// Live `scroll` listener on a window. Dropping it removes the listener.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn new(window: Window, mut on_offset: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_offset(current_offset(&reader));
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

fn current_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Subscribes on mount, unsubscribes on unmount. Starts out unscrolled.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    ScrollSubscription::new(window, move |offset| {
                        state.set(ScrollState::from_offset(offset));
                    })
                    .ok()
                });

                move || drop(subscription)
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn state_follows_offset() {
        for offset in [0.0, 5.0, 19.0, 20.0, 21.0, 600.0, 10_000.0] {
            assert_eq!(ScrollState::from_offset(offset).is_scrolled, offset > 20.0);
        }
    }

    #[test]
    fn default_state_is_unscrolled() {
        assert!(!ScrollState::default().is_scrolled);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll(window: &Window) {
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropping_subscription_stops_callbacks() {
        let window = web_sys::window().unwrap();
        let calls = Rc::new(Cell::new(0u32));

        let subscription = {
            let calls = calls.clone();
            ScrollSubscription::new(window.clone(), move |_| calls.set(calls.get() + 1)).unwrap()
        };

        fire_scroll(&window);
        assert_eq!(calls.get(), 1);

        drop(subscription);
        fire_scroll(&window);
        assert_eq!(calls.get(), 1);
    }
}
