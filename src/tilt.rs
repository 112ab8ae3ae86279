//! Card tilt on hover.

use gloo::events::EventListener;
use portfolio_core::config::TiltConfig;
use portfolio_core::Tilt;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::dom::{self, js_error};

pub struct CardTilt {
    _listeners: Vec<EventListener>,
}

impl CardTilt {
    pub fn install(document: &Document, config: &TiltConfig) -> Self {
        let cards: Vec<HtmlElement> = dom::query_all(document, &config.selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        debug!(count = cards.len(), "Wiring card tilt");

        let mut listeners = Vec::with_capacity(cards.len() * 2);
        for card in cards {
            let (damping, depth) = (config.damping, config.depth);
            let moving = card.clone();
            listeners.push(EventListener::new(&card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let tilt = Tilt::toward(
                    dom::bounds(&moving),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    damping,
                    depth,
                );
                apply(&moving, tilt);
            }));

            let leaving = card.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_event| {
                apply(&leaving, Tilt::NEUTRAL);
            }));
        }

        Self {
            _listeners: listeners,
        }
    }
}

fn apply(card: &HtmlElement, tilt: Tilt) {
    if let Err(e) = card.style().set_property("transform", &tilt.to_string()) {
        warn!(error = %js_error(e), "Failed to set card transform");
    }
}
