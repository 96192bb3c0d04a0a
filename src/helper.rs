//! Convenience front-end over any [`Logger`].
//!
//! ```rust
//! use leveled_slogger::{keyvals, Helper, SLogger};
//!
//! let log = Helper::new(SLogger::default());
//! log.info("hello world");
//! log.infow(&keyvals!["user_id", 12345, "active", true]);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::{DEFAULT_MESSAGE_KEY, Level, Logger, SLogger, Value};

/// Wraps a [`Logger`] with per-level message and key-value methods.
///
/// Errors from the wrapped logger are dropped. The `fatal` methods log at
/// [`Level::Fatal`] and return normally.
///
/// The message methods send `[message_key, msg]`. The helper keeps its own copy
/// of that key, [`DEFAULT_MESSAGE_KEY`] unless set, and it must match the key the
/// wrapped logger extracts. [`Helper::for_slogger`] copies it from an [`SLogger`].
#[derive(Debug, Clone)]
pub struct Helper<L> {
    logger: L,
    message_key: Cow<'static, str>,
}

impl<L: Logger> Helper<L> {
    pub fn new(logger: L) -> Self {
        Helper {
            logger,
            message_key: Cow::Borrowed(DEFAULT_MESSAGE_KEY),
        }
    }

    /// Key used by the message methods. Must match the wrapped logger's message key.
    pub fn message_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.message_key = key.into();
        self
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn log(&self, level: Level, keyvals: &[Value<'_>]) {
        let _ = self.logger.log(level, keyvals);
    }

    fn message(&self, level: Level, msg: impl fmt::Display) {
        let msg = msg.to_string();
        self.log(
            level,
            &[
                Value::from(&*self.message_key),
                Value::from(msg.as_str()),
            ],
        );
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        self.message(Level::Debug, msg);
    }

    pub fn info(&self, msg: impl fmt::Display) {
        self.message(Level::Info, msg);
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        self.message(Level::Warn, msg);
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.message(Level::Error, msg);
    }

    pub fn fatal(&self, msg: impl fmt::Display) {
        self.message(Level::Fatal, msg);
    }

    pub fn debugw(&self, keyvals: &[Value<'_>]) {
        self.log(Level::Debug, keyvals);
    }

    pub fn infow(&self, keyvals: &[Value<'_>]) {
        self.log(Level::Info, keyvals);
    }

    pub fn warnw(&self, keyvals: &[Value<'_>]) {
        self.log(Level::Warn, keyvals);
    }

    pub fn errorw(&self, keyvals: &[Value<'_>]) {
        self.log(Level::Error, keyvals);
    }

    pub fn fatalw(&self, keyvals: &[Value<'_>]) {
        self.log(Level::Fatal, keyvals);
    }
}

impl Helper<SLogger> {
    /// Helper whose message key follows `logger`'s configured key.
    pub fn for_slogger(logger: SLogger) -> Self {
        let message_key = Cow::Owned(logger.message_key().to_owned());
        Helper {
            logger,
            message_key,
        }
    }
}
