//! Bounding boxes and pointer normalization.

/// A client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Position of a client-space point relative to this box, where (0, 0)
    /// is the top-left corner and (1, 1) the bottom-right.
    ///
    /// Points outside the box map outside [0, 1]. A degenerate box has no
    /// meaningful relative position and yields `None`.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some((
            (client_x - self.left) / self.width,
            (client_y - self.top) / self.height,
        ))
    }
}
