//! Decorative gradient-blob scene behind the hero section.
//!
//! The scene is pure state: [`BlobScene::step`] advances every blob and
//! returns what to paint, and the canvas binding turns that into 2D context
//! calls. Positions are kept in surface-relative units so a resize never
//! disturbs the motion.

use rand::Rng;

use crate::geometry::Bounds;

/// First and last colour stop of the diagonal background wash.
pub const BACKGROUND_STOPS: [&str; 2] = ["rgba(255,107,107,0.35)", "rgba(78,205,196,0.35)"];

/// Outer stop of every blob's radial gradient.
pub const BLOB_EDGE_COLOR: &str = "hsla(0, 0%, 0%, 0)";

/// Blobs bounce once they leave this band of the surface.
const BOUNCE_MIN: f64 = 0.1;
const BOUNCE_MAX: f64 = 0.9;

/// Fraction of a blob's velocity applied per frame at full pointer offset.
const SPEED: f64 = 0.6;

/// Radius multiplier while dark mode is active.
const DARK_RADIUS_SCALE: f64 = 1.1;

/// One decorative blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Relative position, nominally in [0, 1]
    pub x: f64,
    pub y: f64,
    /// Radius in CSS pixels
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    /// Hue in degrees
    pub hue: f64,
}

impl Blob {
    /// A blob somewhere in the middle of the surface with a random drift.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.2..0.8),
            y: rng.random_range(0.2..0.8),
            radius: rng.random_range(80.0..200.0),
            vx: rng.random_range(-0.2..0.2),
            vy: rng.random_range(-0.2..0.2),
            hue: rng.random_range(0.0..360.0),
        }
    }

    /// Advance by the velocity scaled by the pointer's offset from centre and
    /// bounce off the edges of the band.
    fn advance(&mut self, pointer: Pointer) {
        self.x += self.vx * SPEED * (pointer.x - 0.5);
        self.y += self.vy * SPEED * (pointer.y - 0.5);
        if self.x < BOUNCE_MIN || self.x > BOUNCE_MAX {
            self.vx = -self.vx;
        }
        if self.y < BOUNCE_MIN || self.y > BOUNCE_MAX {
            self.vy = -self.vy;
        }
    }
}

/// Pointer position relative to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Default for Pointer {
    fn default() -> Self {
        Self::CENTER
    }
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.5, y: 0.5 };

    /// Track a pointer-move in client coordinates. A zero-sized surface
    /// leaves the position unchanged.
    pub fn track(&mut self, surface: Bounds, client_x: f64, client_y: f64) {
        if let Some((x, y)) = surface.normalize(client_x, client_y) {
            self.x = x;
            self.y = y;
        }
    }
}

/// Backing-store dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// CSS size; drawing happens in these units after scaling
    pub width: f64,
    pub height: f64,
    /// Effective device pixel ratio after capping
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: css_width,
            height: css_height,
            pixel_ratio: ratio.min(max_ratio),
        }
    }

    /// Canvas `width` attribute.
    pub fn pixel_width(&self) -> u32 {
        (self.width * self.pixel_ratio).floor().max(0.0) as u32
    }

    /// Canvas `height` attribute.
    pub fn pixel_height(&self) -> u32 {
        (self.height * self.pixel_ratio).floor().max(0.0) as u32
    }
}

/// Paint instruction for one blob in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobPaint {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub hue: f64,
}

impl BlobPaint {
    /// Inner stop of the radial gradient.
    pub fn core_color(&self) -> String {
        format!("hsla({}, 80%, 60%, 0.7)", self.hue)
    }
}

/// The full set of blobs.
#[derive(Debug, Clone)]
pub struct BlobScene {
    blobs: Vec<Blob>,
}

impl BlobScene {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let blobs = (0..count).map(|_| Blob::random(rng)).collect();
        Self { blobs }
    }

    pub fn from_blobs(blobs: Vec<Blob>) -> Self {
        Self { blobs }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Advance one frame and return what to paint on a `width` x `height`
    /// surface.
    pub fn step(&mut self, pointer: Pointer, dark: bool, width: f64, height: f64) -> Vec<BlobPaint> {
        let scale = if dark { DARK_RADIUS_SCALE } else { 1.0 };
        self.blobs
            .iter_mut()
            .map(|blob| {
                blob.advance(pointer);
                BlobPaint {
                    cx: blob.x * width,
                    cy: blob.y * height,
                    radius: blob.radius * scale,
                    hue: blob.hue,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blob(x: f64, y: f64, vx: f64, vy: f64) -> Blob {
        Blob {
            x,
            y,
            radius: 100.0,
            vx,
            vy,
            hue: 200.0,
        }
    }

    #[test]
    fn random_blobs_start_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = BlobScene::new(6, &mut rng);
        assert_eq!(scene.blobs().len(), 6);
        for b in scene.blobs() {
            assert!((0.2..0.8).contains(&b.x));
            assert!((0.2..0.8).contains(&b.y));
            assert!((80.0..200.0).contains(&b.radius));
            assert!((-0.2..0.2).contains(&b.vx));
            assert!((0.0..360.0).contains(&b.hue));
        }
    }

    #[test]
    fn centred_pointer_freezes_motion() {
        let mut scene = BlobScene::from_blobs(vec![blob(0.5, 0.5, 0.2, -0.2)]);
        let painted = scene.step(Pointer::CENTER, false, 400.0, 200.0);
        assert_eq!(scene.blobs()[0].x, 0.5);
        assert_eq!(scene.blobs()[0].y, 0.5);
        assert_eq!(painted[0].cx, 200.0);
        assert_eq!(painted[0].cy, 100.0);
    }

    #[test]
    fn pointer_offset_scales_motion() {
        let mut scene = BlobScene::from_blobs(vec![blob(0.5, 0.5, 0.2, 0.1)]);
        scene.step(Pointer { x: 1.0, y: 0.0 }, false, 1.0, 1.0);
        let b = &scene.blobs()[0];
        assert!((b.x - (0.5 + 0.2 * 0.6 * 0.5)).abs() < 1e-12);
        assert!((b.y - (0.5 - 0.1 * 0.6 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn leaving_the_band_flips_velocity() {
        let mut scene = BlobScene::from_blobs(vec![blob(0.95, 0.05, 0.2, 0.2)]);
        scene.step(Pointer { x: 0.6, y: 0.6 }, false, 1.0, 1.0);
        let b = &scene.blobs()[0];
        assert_eq!(b.vx, -0.2);
        assert_eq!(b.vy, -0.2);
    }

    #[test]
    fn dark_mode_enlarges_blobs() {
        let mut scene = BlobScene::from_blobs(vec![blob(0.5, 0.5, 0.0, 0.0)]);
        let light = scene.step(Pointer::CENTER, false, 1.0, 1.0);
        let dark = scene.step(Pointer::CENTER, true, 1.0, 1.0);
        assert_eq!(light[0].radius, 100.0);
        assert!((dark[0].radius - 110.0).abs() < 1e-9);
    }

    #[test]
    fn core_color_formats_hue() {
        let paint = BlobPaint {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
            hue: 42.5,
        };
        assert_eq!(paint.core_color(), "hsla(42.5, 80%, 60%, 0.7)");
    }

    #[test]
    fn pointer_ignores_degenerate_surface() {
        let mut pointer = Pointer::default();
        pointer.track(Bounds::new(0.0, 0.0, 0.0, 0.0), 10.0, 10.0);
        assert_eq!(pointer, Pointer::CENTER);

        pointer.track(Bounds::new(0.0, 0.0, 100.0, 50.0), 25.0, 50.0);
        assert_eq!(pointer, Pointer { x: 0.25, y: 1.0 });
    }

    #[test]
    fn pixel_ratio_is_capped() {
        let size = SurfaceSize::new(300.5, 150.0, 3.0, 2.0);
        assert_eq!(size.pixel_ratio, 2.0);
        assert_eq!(size.pixel_width(), 601);
        assert_eq!(size.pixel_height(), 300);

        let size = SurfaceSize::new(100.0, 100.0, 1.5, 2.0);
        assert_eq!(size.pixel_width(), 150);

        let size = SurfaceSize::new(100.0, 100.0, 0.0, 2.0);
        assert_eq!(size.pixel_ratio, 1.0);
    }
}
