use std::borrow::Cow;
use std::sync::Arc;

use crate::value::DisplayList;
use crate::{Attr, Context, Error, Handler, Level, Record, Severity, Value};

/// Key whose value becomes the record message instead of an attribute.
pub const DEFAULT_MESSAGE_KEY: &str = "msg";

/// Leveled key-value logging contract used by application code.
pub trait Logger: Send + Sync {
    /// Log a flat `[key, value, key, value, ...]` list at `level`.
    fn log(&self, level: Level, keyvals: &[Value<'_>]) -> Result<(), Error>;
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, keyvals: &[Value<'_>]) -> Result<(), Error> {
        (**self).log(level, keyvals)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, keyvals: &[Value<'_>]) -> Result<(), Error> {
        (**self).log(level, keyvals)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, keyvals: &[Value<'_>]) -> Result<(), Error> {
        (**self).log(level, keyvals)
    }
}

/// Adapter from the key-value [`Logger`] contract to a structured [`Handler`].
///
/// Every [`log`](Logger::log) call results in zero or one emitted [`Record`].
/// The adapter keeps no mutable state, so one instance may be shared by any
/// number of threads; cloning is cheap.
///
/// # Examples
/// ```rust
/// use leveled_slogger::{keyvals, Level, Logger, SLogger};
///
/// let logger = SLogger::default();
/// logger.log(Level::Info, &keyvals!["msg", "started", "workers", 4]).unwrap();
/// logger.close().unwrap();
/// ```
#[derive(Clone)]
pub struct SLogger(Arc<Inner>);

struct Inner {
    handler: Arc<dyn Handler>,
    message_key: Cow<'static, str>,
    ctx: Context,
}

impl SLogger {
    /// Create `SLogger` emitting into `handler` with the default message key
    /// and a background context.
    pub fn new<H: Handler + 'static>(handler: H) -> SLogger {
        SLogger::builder().handler(handler).build()
    }

    pub fn builder() -> SLoggerBuilder {
        SLoggerBuilder::new()
    }

    /// Context passed to the handler on every call.
    pub fn context(&self) -> &Context {
        &self.0.ctx
    }

    pub fn message_key(&self) -> &str {
        &self.0.message_key
    }

    /// Completes the logger lifecycle. Nothing is buffered, so there is nothing to flush.
    pub fn close(&self) -> Result<(), Error> {
        Ok(())
    }

    fn warn_malformed(&self, keyvals: &[Value<'_>]) {
        let inner = &self.0;
        if !inner.handler.enabled(&inner.ctx, Severity::Warn) {
            return;
        }
        let message = format!(
            "Key and values must appear in pairs: {}",
            DisplayList(keyvals)
        );
        inner
            .handler
            .emit(&inner.ctx, &Record::new(Severity::Warn, message, Vec::new()));
    }
}

impl Default for SLogger {
    /// Create `SLogger` with:
    /// - the process-wide default handler (the `log` facade when the `log`
    ///   feature is enabled, [`Discard`](crate::Discard) otherwise)
    /// - message key [`DEFAULT_MESSAGE_KEY`]
    /// - a background context
    fn default() -> Self {
        SLoggerBuilder::new().build()
    }
}

impl std::fmt::Debug for SLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SLogger")
            .field("message_key", &self.0.message_key)
            .field("ctx", &self.0.ctx)
            .finish_non_exhaustive()
    }
}

impl Logger for SLogger {
    fn log(&self, level: Level, keyvals: &[Value<'_>]) -> Result<(), Error> {
        let inner = &self.0;
        let severity = Severity::from(level);

        if !inner.handler.enabled(&inner.ctx, severity) {
            return Ok(());
        }

        if keyvals.is_empty() || keyvals.len() % 2 != 0 {
            self.warn_malformed(keyvals);
            return Ok(());
        }

        let mut message = "";
        let mut attrs = Vec::with_capacity(keyvals.len() / 2);
        for pair in keyvals.chunks_exact(2) {
            let key = pair[0].as_text().unwrap_or_default();
            if key == inner.message_key {
                message = pair[1].as_text().unwrap_or_default();
                continue;
            }
            attrs.push(Attr::from_pair(key, &pair[1]));
        }

        inner
            .handler
            .emit(&inner.ctx, &Record::new(severity, message, attrs));
        Ok(())
    }
}

/// Construction-time configuration of an [`SLogger`].
pub struct SLoggerBuilder {
    handler: Option<Arc<dyn Handler>>,
    message_key: Cow<'static, str>,
    ctx: Context,
}

impl SLoggerBuilder {
    pub fn new() -> Self {
        SLoggerBuilder {
            handler: None,
            message_key: Cow::Borrowed(DEFAULT_MESSAGE_KEY),
            ctx: Context::background(),
        }
    }

    /// Handler receiving the records. Defaults to the process-wide default handler.
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Key whose value becomes the record message.
    pub fn message_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.message_key = key.into();
        self
    }

    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn build(self) -> SLogger {
        SLogger(Arc::new(Inner {
            handler: self.handler.unwrap_or_else(default_handler),
            message_key: self.message_key,
            ctx: self.ctx,
        }))
    }
}

impl Default for SLoggerBuilder {
    fn default() -> Self {
        SLoggerBuilder::new()
    }
}

#[cfg(feature = "log")]
fn default_handler() -> Arc<dyn Handler> {
    Arc::new(crate::rust_log::LogHandler::new())
}

#[cfg(not(feature = "log"))]
fn default_handler() -> Arc<dyn Handler> {
    Arc::new(crate::Discard)
}
