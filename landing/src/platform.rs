//! `web-sys` implementation of the page's platform capabilities.

use gii_page::config::ObserverConfig;
use gii_page::platform::{IntersectionHandler, ScrollHandler};
use gii_page::{IntersectionEvent, Platform, PlatformError, SectionId, Subscription};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

/// Marker for "running in a browser window". Looks the window up on demand,
/// so it is `Copy` and can live inside signals and event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserPlatform {
    _private: (),
}

impl BrowserPlatform {
    /// `None` when there is no `window` (non-interactive rendering).
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|_| Self { _private: () })
    }

    fn window(&self) -> Result<web_sys::Window, PlatformError> {
        web_sys::window().ok_or(PlatformError::NoWindow)
    }

    fn document(&self) -> Result<web_sys::Document, PlatformError> {
        self.window()?.document().ok_or(PlatformError::NoDocument)
    }
}

fn js_error(call: &'static str, err: JsValue) -> PlatformError {
    PlatformError::Js {
        call,
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

impl Platform for BrowserPlatform {
    fn on_scroll(&self, mut handler: ScrollHandler) -> Result<Subscription, PlatformError> {
        let window = self.window()?;
        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            handler(reader.scroll_y().unwrap_or(0.0));
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| js_error("addEventListener", e))?;

        Ok(Subscription::new("scroll", move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }))
    }

    fn observe_sections(
        &self,
        options: &ObserverConfig,
        mut handler: IntersectionHandler,
    ) -> Result<Subscription, PlatformError> {
        let document = self.document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let events = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEvent {
                        target_id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect::<Vec<_>>();
                handler(events);
            },
        );

        let thresholds = options
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect::<Array>();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| js_error("IntersectionObserver", e))?;

        let sections = document
            .query_selector_all("section[id]")
            .map_err(|e| js_error("querySelectorAll", e))?;
        let elements = (0..sections.length())
            .filter_map(|i| sections.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok());
        let mut observed = 0;
        for element in elements {
            observer.observe(&element);
            observed += 1;
        }
        tracing::debug!(observed, "observing sections");

        Ok(Subscription::new("visibility", move || {
            observer.disconnect();
            drop(callback);
        }))
    }

    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Ok(document) = self.document() else {
            return false;
        };
        let Some(element) = document.get_element_by_id(section.key()) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
