//! Leveled key-value logging on top of a structured logging backend.
//!
//! Application code logs through the narrow [`Logger`] contract: a [`Level`] and a flat
//! `[key, value, key, value, ...]` list. [`SLogger`] translates each call into one
//! structured [`Record`] (severity, message and typed attributes) and hands it to a
//! pluggable [`Handler`] that owns filtering, formatting and output.
//!
//! # Examples:
//! ## By default records go to the standard `log` crate.
//! ```bash
//! cargo add leveled-slogger
//! ```
//! Example usage with standard `log` crate and `structured_logger` crate:
//! ```rust
//! use leveled_slogger::{keyvals, Level, Logger, SLogger};
//! use structured_logger::{Builder, json::new_writer};
//!
//! Builder::with_level("debug")
//!     .with_target_writer("*", new_writer(std::io::stdout()))
//!     .init();
//!
//! let logger = SLogger::default();
//! logger
//!     .log(Level::Info, &keyvals!["msg", "hello world", "user_id", 12345])
//!     .unwrap();
//! ```
//! ## Custom backends implement [`Handler`].
//! ```rust
//! use leveled_slogger::{keyvals, Context, Handler, Level, Logger, Record, SLogger, Severity};
//!
//! struct Stderr;
//!
//! impl Handler for Stderr {
//!     fn enabled(&self, _ctx: &Context, severity: Severity) -> bool {
//!         severity >= Severity::Info
//!     }
//!
//!     fn emit(&self, _ctx: &Context, record: &Record<'_>) {
//!         let attrs: Vec<String> = record.attrs().iter().map(|a| a.to_string()).collect();
//!         eprintln!("{} {} {}", record.severity(), record.message(), attrs.join(" "));
//!     }
//! }
//!
//! let logger = SLogger::new(Stderr);
//! logger.log(Level::Warn, &keyvals!["msg", "disk almost full", "free_mb", 12]).unwrap();
//! ```
//! # Translation rules
//! - The level is mapped onto the backend [`Severity`] scale; [`Level::Fatal`] becomes
//!   [`Severity::Error`].
//! - Disabled severities return immediately, before the key-value list is looked at.
//! - An empty or odd-length list is not logged. A single warning describing the
//!   malformed list is emitted instead and the call still succeeds.
//! - The value paired with the message key (`"msg"` by default) becomes the record
//!   message. Every other pair becomes one [`Attr`], in input order.
//! - Values keep their category (text, integers, floats, booleans, timestamps,
//!   durations); anything else is carried as an opaque `Debug` value.
//!
//! # Configuration
//!
//! ```rust
//! use leveled_slogger::{Context, SLogger, rust_log::LogHandler};
//!
//! let logger = SLogger::builder()
//!     .handler(LogHandler::new().target("billing"))
//!     .message_key("message")
//!     .context(Context::cancellable())
//!     .build();
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Enable the [`rust_log::LogHandler`] backend for the standard `log`
//!   crate and use it as the default handler. Without it the default handler is [`Discard`].

mod context;
mod error;
mod handler;
mod helper;
mod level;
mod logger;
mod value;
mod wrapper;

pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::handler::{Discard, Handler, Record};
pub use crate::helper::Helper;
pub use crate::level::{Level, Severity};
pub use crate::logger::{DEFAULT_MESSAGE_KEY, Logger, SLogger, SLoggerBuilder};
pub use crate::value::{Attr, Kind, Value};
#[cfg(feature = "log")]
pub use crate::wrapper::rust_log;
