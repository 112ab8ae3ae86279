//! Loads the page configuration embedded by the host page.

use portfolio_core::config::CONFIG_ELEMENT_ID;
use portfolio_core::PortfolioConfig;
use web_sys::Document;

/// Defaults overlaid with the JSON in `#portfolio-config`, if any.
///
/// Runs before logging is installed, so problems are returned alongside the
/// config and reported once the logger exists.
pub fn load(document: &Document) -> (PortfolioConfig, Option<String>) {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (PortfolioConfig::default(), None);
    };
    if text.trim().is_empty() {
        return (PortfolioConfig::default(), None);
    }
    match PortfolioConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (PortfolioConfig::default(), Some(e.to_string())),
    }
}
