//! Sidebar minimize-on-scroll.

/// Decides the sidebar's minimized state from successive scroll offsets.
#[derive(Debug, Clone)]
pub struct SidebarMinimizer {
    last_offset: f64,
    threshold: f64,
}

impl SidebarMinimizer {
    /// `initial_offset` is the scroll position when the page wires up.
    pub fn new(initial_offset: f64, threshold: f64) -> Self {
        Self {
            last_offset: initial_offset,
            threshold,
        }
    }

    /// Minimized only while scrolling down past the threshold. The offset
    /// is always recorded for the next event.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let minimized = offset > self.last_offset && offset > self.threshold;
        self.last_offset = offset;
        minimized
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
