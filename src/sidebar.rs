//! Sidebar minimize-on-scroll.

use gloo::events::EventListener;
use portfolio_core::config::SidebarConfig;
use portfolio_core::SidebarMinimizer;
use tracing::debug;
use web_sys::{Document, Window};

use crate::dom;

pub struct SidebarHandle {
    _listener: EventListener,
}

impl SidebarHandle {
    /// `None` when the page has no sidebar.
    pub fn install(window: &Window, document: &Document, config: &SidebarConfig) -> Option<Self> {
        let Some(sidebar) = document.get_element_by_id(&config.sidebar_id) else {
            debug!(id = %config.sidebar_id, "No sidebar on page");
            return None;
        };
        let start = window.scroll_y().unwrap_or(0.0);
        let mut minimizer = SidebarMinimizer::new(start, config.threshold);

        let class = config.minimized_class.clone();
        let scrolled = window.clone();
        let listener = EventListener::new(window, "scroll", move |_event| {
            let offset = scrolled.scroll_y().unwrap_or(0.0);
            let minimized = minimizer.on_scroll(offset);
            dom::set_class(&sidebar, &class, minimized);
        });

        Some(Self {
            _listener: listener,
        })
    }
}
