#[cfg(feature = "log")]
pub mod rust_log {
    use std::borrow::Cow;

    use crate::{Context, Handler, Record, Severity, Value};

    /// Handler that forwards records to the `log` facade.
    ///
    /// The record message becomes the `log` message and each attribute becomes
    /// a structured key-value pair, in order. By default records go to the
    /// process-wide logger installed with `log::set_logger`, filtered by
    /// `log::max_level()`.
    ///
    /// A cancelled [`Context`] disables every level.
    ///
    /// # Examples
    /// ```rust
    /// use leveled_slogger::{SLogger, rust_log::LogHandler};
    ///
    /// let logger = SLogger::new(LogHandler::new().target("billing"));
    /// ```
    #[derive(Clone)]
    pub struct LogHandler {
        logger: Option<&'static dyn log::Log>,
        target: Cow<'static, str>,
    }

    impl LogHandler {
        /// Create `LogHandler` writing to the global `log` logger.
        pub fn new() -> Self {
            LogHandler {
                logger: None,
                target: Cow::Borrowed(module_path!()),
            }
        }

        /// Create `LogHandler` writing to `logger` instead of the global one.
        ///
        /// The global `log::max_level()` does not apply; filtering is left to
        /// `logger.enabled()`.
        pub fn with_logger(logger: &'static dyn log::Log) -> Self {
            LogHandler {
                logger: Some(logger),
                target: Cow::Borrowed(module_path!()),
            }
        }

        /// Sets the logging target to `target`.
        ///
        /// By default, the log target is `leveled_slogger::wrapper::rust_log`.
        pub fn target(mut self, target: impl Into<Cow<'static, str>>) -> Self {
            self.target = target.into();
            self
        }

        fn logger(&self) -> &'static dyn log::Log {
            self.logger.unwrap_or_else(log::logger)
        }
    }

    impl Default for LogHandler {
        fn default() -> Self {
            LogHandler::new()
        }
    }

    impl std::fmt::Debug for LogHandler {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("LogHandler")
                .field("global", &self.logger.is_none())
                .field("target", &self.target)
                .finish()
        }
    }

    impl Handler for LogHandler {
        fn enabled(&self, ctx: &Context, severity: Severity) -> bool {
            if ctx.is_cancelled() {
                return false;
            }
            let level = severity.as_log_level();
            if self.logger.is_none() && level > log::max_level() {
                return false;
            }
            let metadata = log::Metadata::builder()
                .level(level)
                .target(&self.target)
                .build();
            self.logger().enabled(&metadata)
        }

        fn emit(&self, _ctx: &Context, record: &Record<'_>) {
            let kvs: Vec<(&str, log::kv::Value)> = record
                .attrs()
                .iter()
                .map(|attr| (attr.key(), to_log_value(attr.value())))
                .collect();
            let kvs = kvs.as_slice();

            self.logger().log(
                &log::Record::builder()
                    .args(format_args!("{}", record.message()))
                    .level(record.severity().as_log_level())
                    .target(&self.target)
                    .module_path_static(Some(module_path!()))
                    .key_values(&kvs)
                    .build(),
            );
        }
    }

    fn to_log_value<'v>(value: &'v Value<'_>) -> log::kv::Value<'v> {
        match value {
            Value::Text(v) => log::kv::Value::from(&**v),
            Value::Int(v) => log::kv::Value::from(*v),
            Value::Uint(v) => log::kv::Value::from(*v),
            Value::Float(v) => log::kv::Value::from(*v),
            Value::Bool(v) => log::kv::Value::from(*v),
            Value::Opaque(v) => log::kv::Value::from_debug(v),
            Value::Time(_) | Value::Duration(_) => log::kv::Value::from_display(value),
        }
    }

}
