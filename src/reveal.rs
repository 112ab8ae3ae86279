//! Scroll reveal through `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use portfolio_core::config::RevealConfig;
use portfolio_core::{PortfolioResult, RevealTracker};
use tracing::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::dom::{self, js_error};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct ScrollReveal {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl ScrollReveal {
    pub fn install(window: &Window, document: &Document, config: &RevealConfig) -> PortfolioResult<Self> {
        let elements = dom::query_all(document, &config.selector);
        let mut tracker = RevealTracker::new(config.threshold);
        for index in 0..elements.len() {
            tracker.watch(index);
        }

        if !observer_supported(window) {
            info!(count = elements.len(), "IntersectionObserver unavailable, revealing all");
            for index in tracker.reveal_all() {
                dom::set_class(&elements[index], &config.visible_class, true);
            }
            return Ok(Self {
                observer: None,
                _callback: None,
            });
        }

        let tracker = Rc::new(RefCell::new(tracker));
        let visible_class = config.visible_class.clone();
        let watched = elements.clone();
        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                let reveal = tracker.borrow_mut().on_intersection(
                    &index,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if reveal {
                    dom::set_class(&target, &visible_class, true);
                    observer.unobserve(&target);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        for element in &elements {
            observer.observe(element);
        }
        debug!(count = elements.len(), threshold = config.threshold, "Observing reveal targets");

        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        if let Some(ref observer) = self.observer {
            observer.disconnect();
        }
    }
}

fn observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

