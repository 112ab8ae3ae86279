//! Portfolio Page Core Library
//!
//! Browser-independent state and math behind the portfolio page's
//! interactive behaviors.
//!
//! ## Overview
//!
//! Each behavior is a small state machine or pure function. Anything that
//! touches the page sits behind a trait so the behavior can be exercised
//! without a browser:
//!
//! - **Theme**: [`ThemeController`] over a [`ThemeStore`] and a [`ThemeSurface`]
//! - **Anchors**: [`anchor::fragment_id`]
//! - **Typing**: [`Typewriter`]
//! - **Scene**: [`BlobScene`], [`Pointer`], [`SurfaceSize`]
//! - **Tilt**: [`Tilt`]
//! - **Reveal**: [`RevealTracker`]
//! - **Contact**: [`ContactSubmitter`] over a [`ContactForm`] and a [`Relay`]
//! - **Sidebar**: [`SidebarMinimizer`]
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{SidebarMinimizer, Tilt, Bounds};
//!
//! let mut sidebar = SidebarMinimizer::new(0.0, 120.0);
//! assert!(!sidebar.on_scroll(50.0));
//! assert!(sidebar.on_scroll(200.0));
//!
//! let card = Bounds::new(0.0, 0.0, 100.0, 100.0);
//! let tilt = Tilt::toward(card, 0.0, 0.0, 15.0, 10.0);
//! assert_eq!(tilt.rotate_x, 7.5);
//! ```

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod reveal;
pub mod scene;
pub mod sidebar;
pub mod theme;
pub mod tilt;
pub mod typing;

// Re-exports
pub use config::PortfolioConfig;
pub use contact::{
    is_valid_email, ContactForm, ContactSubmission, ContactSubmitter, Relay, RelayResponse,
    SubmitOutcome,
};
pub use error::{PortfolioError, PortfolioResult};
pub use geometry::Bounds;
pub use reveal::RevealTracker;
pub use scene::{Blob, BlobPaint, BlobScene, Pointer, SurfaceSize};
pub use sidebar::SidebarMinimizer;
pub use theme::{Theme, ThemeController, ThemeStore, ThemeSurface};
pub use tilt::Tilt;
pub use typing::Typewriter;
