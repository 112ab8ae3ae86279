//! Fallible DOM lookups and small element helpers.
//!
//! Every reference to host markup goes through these functions so that a
//! missing element turns into `None` (or a `PortfolioError`) instead of a
//! thrown exception.

use portfolio_core::{Bounds, PortfolioError, PortfolioResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Convert a thrown JavaScript value into a readable error.
pub fn js_error(value: JsValue) -> PortfolioError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    PortfolioError::Js(message)
}

pub fn window() -> PortfolioResult<Window> {
    web_sys::window().ok_or_else(|| PortfolioError::MissingElement("window".to_string()))
}

pub fn document() -> PortfolioResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PortfolioError::MissingElement("document".to_string()))
}

/// Element by id, cast to the expected type. Wrong types count as missing.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First element matching `selector` under `root`. Invalid selectors count as
/// no match.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// First element in the document matching `selector`.
pub fn query_document(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::warn!(selector, "Invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn scroll_smoothly(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Add or remove `class`. Failures are logged, never raised.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, error = %js_error(e), "Failed to update class");
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
