//! Structured logging for the page.
//!
//! Events are emitted with `tracing` everywhere. [`ConsoleLayer`] converts
//! each event into a [`LogEntry`] and hands it to a [`LogSink`]; the wasm
//! crate supplies a sink that writes to the browser console.
//!
//! ## Usage
//!
//! ```ignore
//! use portfolio_core::logging::{init_logging, LogEntry, LogSink};
//!
//! struct Console;
//!
//! impl LogSink for Console {
//!     fn emit(&self, _level: tracing::Level, entry: &LogEntry) {
//!         println!("{}", entry.to_console_line());
//!     }
//! }
//!
//! init_logging("portfolio=debug", Console)?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{init_logging, ConsoleLayer, LogSink};
