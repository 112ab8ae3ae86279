//! Page configuration.
//!
//! Every selector, timing and message the behaviors use lives here with a
//! default matching the stock portfolio markup. A host page may override any
//! subset by embedding a JSON document:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "typing": { "text": "Systems Engineer" }, "sidebar": { "threshold": 200 } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

/// Id of the script element that may carry a JSON config override.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Top-level configuration for all page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
    pub theme: ThemeConfig,
    pub anchors: AnchorConfig,
    pub typing: TypingConfig,
    pub scene: SceneConfig,
    pub tilt: TiltConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub sidebar: SidebarConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            log_filter: "portfolio=info,portfolio_core=info".to_string(),
            theme: ThemeConfig::default(),
            anchors: AnchorConfig::default(),
            typing: TypingConfig::default(),
            scene: SceneConfig::default(),
            tilt: TiltConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key holding "dark" or "light"
    pub storage_key: String,
    /// Id of the checkbox that toggles the theme
    pub toggle_id: String,
    /// Class set on the document root while dark mode is active
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            dark_class: "dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub selector: String,
    pub text: String,
    pub interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-subtitle".to_string(),
            text: "Full Stack Developer".to_string(),
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Id of the canvas element
    pub canvas_id: String,
    pub blob_count: usize,
    /// Upper bound applied to `devicePixelRatio`
    pub max_pixel_ratio: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: "hero-orb".to_string(),
            blob_count: 6,
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub selector: String,
    /// Degrees of rotation between the card centre and an edge, doubled
    pub damping: f64,
    /// translateZ applied while tilted, in px
    pub depth: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            selector: ".project-card".to_string(),
            damping: 15.0,
            depth: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "[data-reveal]".to_string(),
            visible_class: "is-visible".to_string(),
            threshold: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub submit_selector: String,
    pub success_id: String,
    pub pending_label: String,
    pub invalid_email_message: String,
    pub failure_message: String,
    /// Abort the relay request after this long
    pub submit_timeout_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            name_id: "cf-name".to_string(),
            email_id: "cf-email".to_string(),
            message_id: "cf-message".to_string(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            success_id: "success-message".to_string(),
            pending_label: "Sending...".to_string(),
            invalid_email_message: "Please enter a valid email address (e.g., example@gmail.com)"
                .to_string(),
            failure_message: "Sorry, there was an error sending your message. Please try again."
                .to_string(),
            submit_timeout_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub sidebar_id: String,
    pub minimized_class: String,
    /// Offset in px below which the sidebar never minimizes
    pub threshold: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar".to_string(),
            minimized_class: "minimized".to_string(),
            threshold: 120.0,
        }
    }
}
