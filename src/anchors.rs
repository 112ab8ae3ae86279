//! Smooth scrolling for in-page links.

use gloo::events::{EventListener, EventListenerOptions};
use portfolio_core::anchor::fragment_id;
use portfolio_core::config::AnchorConfig;
use tracing::debug;
use web_sys::{Document, Element};

use crate::dom;

pub struct AnchorScroller {
    _listeners: Vec<EventListener>,
}

impl AnchorScroller {
    pub fn install(document: &Document, config: &AnchorConfig) -> Self {
        let links = dom::query_all(document, &config.selector);
        debug!(count = links.len(), "Wiring in-page links");

        let listeners = links
            .into_iter()
            .map(|link| {
                let document = document.clone();
                let target = link.clone();
                EventListener::new_with_options(
                    &target,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        scroll_to_fragment(&document, &link);
                    },
                )
            })
            .collect();

        Self {
            _listeners: listeners,
        }
    }
}

fn scroll_to_fragment(document: &Document, link: &Element) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(id) = fragment_id(&href) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(target) => dom::scroll_smoothly(&target),
        None => debug!(%href, "Link target not on page"),
    }
}
