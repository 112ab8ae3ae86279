//! Portfolio page interactivity for the browser.
//!
//! Binds the behaviors in `portfolio_core` to the host page's markup. The
//! module starts itself when loaded:
//!
//! ```html
//! <script type="module">
//!   import init, { teardown } from "./pkg/portfolio.js";
//!   await init();
//! </script>
//! ```
//!
//! Every listener, timer, frame callback and observer is owned by a single
//! [`Portfolio`] value; `teardown()` drops it and detaches them all.

pub mod anchors;
pub mod config;
pub mod contact;
pub mod dom;
pub mod logging;
pub mod reveal;
pub mod scene;
pub mod sidebar;
pub mod theme;
pub mod tilt;
pub mod typing;

use std::cell::RefCell;

use portfolio_core::{PortfolioConfig, PortfolioResult};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::anchors::AnchorScroller;
use crate::contact::ContactHandler;
use crate::reveal::ScrollReveal;
use crate::scene::HeroScene;
use crate::sidebar::SidebarHandle;
use crate::theme::ThemeToggle;
use crate::tilt::CardTilt;
use crate::typing::TypingOnLoad;

thread_local! {
    static PAGE: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

/// All installed behaviors. Optional members are absent when the page lacks
/// the markup they attach to.
pub struct Portfolio {
    pub theme: ThemeToggle,
    pub anchors: AnchorScroller,
    pub typing: Option<TypingOnLoad>,
    pub scene: Option<HeroScene>,
    pub tilt: CardTilt,
    pub reveal: Option<ScrollReveal>,
    pub contact: Option<ContactHandler>,
    pub sidebar: Option<SidebarHandle>,
}

impl Portfolio {
    /// Wire every behavior to the current document.
    pub fn install(config: &PortfolioConfig) -> PortfolioResult<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let theme = ThemeToggle::install(&window, &document, &config.theme)?;
        let anchors = AnchorScroller::install(&document, &config.anchors);
        let typing = TypingOnLoad::install(&window, &document, &config.typing);
        let scene = HeroScene::install(&window, &document, &config.scene, &config.theme.dark_class);
        let tilt = CardTilt::install(&document, &config.tilt);
        let reveal = match ScrollReveal::install(&window, &document, &config.reveal) {
            Ok(reveal) => Some(reveal),
            Err(e) => {
                warn!(error = %e, "Scroll reveal disabled");
                None
            }
        };
        let contact = ContactHandler::install(&document, &config.contact);
        let sidebar = SidebarHandle::install(&window, &document, &config.sidebar);

        info!(
            theme = %theme.current(),
            typing = typing.is_some(),
            scene = scene.is_some(),
            contact = contact.is_some(),
            sidebar = sidebar.is_some(),
            "Portfolio page ready"
        );

        Ok(Self {
            theme,
            anchors,
            typing,
            scene,
            tilt,
            reveal,
            contact,
            sidebar,
        })
    }
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (config, config_problem) = config::load(&document);

    if let Err(e) = logging::init(&config.log_filter) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logging disabled: {}", e)));
    }
    if let Some(problem) = config_problem {
        warn!(%problem, "Ignoring embedded config, using defaults");
    }

    let page = Portfolio::install(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Detach every listener and stop the animation and typing tasks.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        info!("Tearing down portfolio page");
    }
    drop(page);
}
