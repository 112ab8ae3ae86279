//! Theme toggle bound to localStorage and the document root.

use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_core::config::ThemeConfig;
use portfolio_core::{PortfolioError, PortfolioResult, Theme, ThemeController, ThemeStore, ThemeSurface};
use tracing::debug;
use web_sys::{Document, Element, HtmlInputElement, Storage, Window};

use crate::dom::{self, js_error};

/// The preference in `localStorage`, stored as the bare string.
pub struct LocalThemeStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalThemeStore {
    /// Storage may be unavailable (privacy modes, sandboxed frames); the
    /// store then behaves as permanently empty.
    pub fn new(window: &Window, key: impl Into<String>) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            debug!("localStorage unavailable, theme preference will not persist");
        }
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, theme: Theme) -> PortfolioResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PortfolioError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|e| PortfolioError::Storage(js_error(e).to_string()))
    }
}

/// Class on the root element plus the optional toggle checkbox.
pub struct DocumentTheme {
    root: Element,
    toggle: Option<HtmlInputElement>,
    dark_class: String,
}

impl DocumentTheme {
    pub fn new(document: &Document, config: &ThemeConfig) -> PortfolioResult<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| PortfolioError::MissingElement("documentElement".to_string()))?;
        Ok(Self {
            root,
            toggle: dom::by_id(document, &config.toggle_id),
            dark_class: config.dark_class.clone(),
        })
    }
}

impl ThemeSurface for DocumentTheme {
    fn is_dark(&self) -> bool {
        dom::has_class(&self.root, &self.dark_class)
    }

    fn set_dark(&self, dark: bool) {
        dom::set_class(&self.root, &self.dark_class, dark);
    }

    fn set_toggle_checked(&self, checked: bool) {
        if let Some(ref toggle) = self.toggle {
            toggle.set_checked(checked);
        }
    }
}

/// `(prefers-color-scheme: dark)`, false when matchMedia is unsupported.
pub fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Applies the startup theme and listens for toggle changes.
pub struct ThemeToggle {
    controller: Rc<ThemeController<LocalThemeStore, DocumentTheme>>,
    _listener: Option<EventListener>,
}

impl ThemeToggle {
    pub fn install(window: &Window, document: &Document, config: &ThemeConfig) -> PortfolioResult<Self> {
        let store = LocalThemeStore::new(window, config.storage_key.clone());
        let surface = DocumentTheme::new(document, config)?;
        let toggle = surface.toggle.clone();
        let controller = Rc::new(ThemeController::new(store, surface));
        controller.init(system_prefers_dark(window));

        let listener = toggle.map(|toggle| {
            let controller = Rc::clone(&controller);
            EventListener::new(&toggle, "change", move |_event| {
                controller.toggle();
            })
        });
        if listener.is_none() {
            debug!(id = %config.toggle_id, "No theme toggle on page");
        }

        Ok(Self {
            controller,
            _listener: listener,
        })
    }

    pub fn current(&self) -> Theme {
        self.controller.current()
    }
}
