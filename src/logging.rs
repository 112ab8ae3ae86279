//! Browser console sink for the tracing layer.

use portfolio_core::logging::{init_logging, LogEntry, LogSink};
use portfolio_core::PortfolioResult;
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes each entry to the devtools console method matching its level.
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn emit(&self, level: Level, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_console_line());
        match level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Route panics and tracing events to the console.
pub fn init(filter: &str) -> PortfolioResult<()> {
    console_error_panic_hook::set_once();
    init_logging(filter, BrowserConsole)
}
