use thiserror::Error;

/// Errors surfaced by the producer-facing API.
///
/// Logging itself never fails: [`Logger::log`](crate::Logger::log) on an
/// [`SLogger`](crate::SLogger) always returns `Ok(())`. Errors only come from
/// parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A level name that is not one of `debug`, `info`, `warn`, `error` or `fatal`.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),
}
