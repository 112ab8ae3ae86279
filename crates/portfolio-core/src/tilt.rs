//! Pointer-driven 3D tilt for project cards.

use std::fmt;

use crate::geometry::Bounds;

/// A rotate/translate transform applied to one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees around the horizontal axis
    pub rotate_x: f64,
    /// Degrees around the vertical axis
    pub rotate_y: f64,
    /// Depth in px
    pub translate_z: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_z: 0.0,
    };

    /// Tilt toward a pointer at client coordinates over `card`.
    ///
    /// The top edge leans toward the viewer when the pointer is above centre
    /// and the right edge when it is right of centre. A card with no area
    /// stays neutral.
    pub fn toward(card: Bounds, client_x: f64, client_y: f64, damping: f64, depth: f64) -> Self {
        match card.normalize(client_x, client_y) {
            Some((x, y)) => Self {
                rotate_x: (0.5 - y) * damping,
                rotate_y: (x - 0.5) * damping,
                translate_z: depth,
            },
            None => Self::NEUTRAL,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// CSS `transform` value.
impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            return f.write_str("rotateX(0) rotateY(0) translateZ(0)");
        }
        write!(
            f,
            "rotateX({}deg) rotateY({}deg) translateZ({}px)",
            self.rotate_x, self.rotate_y, self.translate_z
        )
    }
}
