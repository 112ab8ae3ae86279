//! Canvas renderer for the hero blob scene.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_core::config::SceneConfig;
use portfolio_core::scene::{BACKGROUND_STOPS, BLOB_EDGE_COLOR};
use portfolio_core::{BlobPaint, BlobScene, Pointer, PortfolioResult, SurfaceSize};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, Window};

use crate::dom::{self, js_error};

struct SceneState {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    root: Element,
    dark_class: String,
    max_pixel_ratio: f64,
    scene: RefCell<BlobScene>,
    pointer: Cell<Pointer>,
    size: Cell<SurfaceSize>,
    running: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl SceneState {
    /// Match the backing store to the CSS size and device pixel ratio.
    fn resize(&self) {
        let size = SurfaceSize::new(
            f64::from(self.canvas.client_width()),
            f64::from(self.canvas.client_height()),
            self.window.device_pixel_ratio(),
            self.max_pixel_ratio,
        );
        self.canvas.set_width(size.pixel_width());
        self.canvas.set_height(size.pixel_height());
        let ratio = size.pixel_ratio;
        if let Err(e) = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
            warn!(error = %js_error(e), "Failed to scale canvas context");
        }
        self.size.set(size);
        debug!(width = size.width, height = size.height, ratio, "Canvas resized");
    }

    fn draw(&self) -> PortfolioResult<()> {
        let SurfaceSize { width, height, .. } = self.size.get();
        let dark = dom::has_class(&self.root, &self.dark_class);
        let paints = self
            .scene
            .borrow_mut()
            .step(self.pointer.get(), dark, width, height);

        self.ctx.clear_rect(0.0, 0.0, width, height);

        let background = self.ctx.create_linear_gradient(0.0, 0.0, width, height);
        background
            .add_color_stop(0.0, BACKGROUND_STOPS[0])
            .map_err(js_error)?;
        background
            .add_color_stop(1.0, BACKGROUND_STOPS[1])
            .map_err(js_error)?;
        self.ctx.set_fill_style_canvas_gradient(&background);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        for paint in &paints {
            self.draw_blob(paint)?;
        }
        Ok(())
    }

    fn draw_blob(&self, paint: &BlobPaint) -> PortfolioResult<()> {
        let BlobPaint { cx, cy, radius, .. } = *paint;
        let radial = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius)
            .map_err(js_error)?;
        radial
            .add_color_stop(0.0, &paint.core_color())
            .map_err(js_error)?;
        radial
            .add_color_stop(1.0, BLOB_EDGE_COLOR)
            .map_err(js_error)?;
        self.ctx.set_fill_style_canvas_gradient(&radial);
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, radius, 0.0, PI * 2.0).map_err(js_error)?;
        self.ctx.fill();
        Ok(())
    }
}

fn schedule(state: &Rc<SceneState>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |_timestamp| frame(&next));
    *state.frame.borrow_mut() = Some(handle);
}

fn frame(state: &Rc<SceneState>) {
    state.frame.borrow_mut().take();
    if !state.running.get() {
        return;
    }
    if let Err(e) = state.draw() {
        warn!(error = %e, "Scene frame failed");
    }
    schedule(state);
}

/// The animated hero canvas: a per-frame loop plus pointer and resize
/// listeners.
pub struct HeroScene {
    state: Rc<SceneState>,
    _listeners: Vec<EventListener>,
}

impl HeroScene {
    /// `None` when the page has no canvas or the browser has no 2D context.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &SceneConfig,
        dark_class: &str,
    ) -> Option<Self> {
        let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, &config.canvas_id) else {
            debug!(id = %config.canvas_id, "No scene canvas on page");
            return None;
        };
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                warn!("2D canvas context unavailable");
                return None;
            }
            Err(e) => {
                warn!(error = %js_error(e), "Failed to acquire canvas context");
                return None;
            }
        };
        let root = document.document_element()?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        let state = Rc::new(SceneState {
            window: window.clone(),
            canvas,
            ctx,
            root,
            dark_class: dark_class.to_string(),
            max_pixel_ratio: config.max_pixel_ratio,
            scene: RefCell::new(BlobScene::new(config.blob_count, &mut rng)),
            pointer: Cell::new(Pointer::CENTER),
            size: Cell::new(SurfaceSize::new(0.0, 0.0, 1.0, config.max_pixel_ratio)),
            running: Cell::new(false),
            frame: RefCell::new(None),
        });
        state.resize();

        let on_move = {
            let state = Rc::clone(&state);
            EventListener::new(window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut pointer = state.pointer.get();
                pointer.track(
                    dom::bounds(&state.canvas),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                state.pointer.set(pointer);
            })
        };
        let on_resize = {
            let state = Rc::clone(&state);
            EventListener::new(window, "resize", move |_event| state.resize())
        };

        let scene = Self {
            state,
            _listeners: vec![on_move, on_resize],
        };
        scene.start();
        Some(scene)
    }

    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        debug!(blobs = self.state.scene.borrow().blobs().len(), "Scene loop started");
        schedule(&self.state);
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        self.state.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for HeroScene {
    fn drop(&mut self) {
        self.stop();
    }
}
