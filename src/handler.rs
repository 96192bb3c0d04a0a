use std::borrow::Cow;
use std::sync::Arc;

use crate::{Attr, Context, Severity};

/// One log event handed to a [`Handler`].
///
/// Built fresh for every [`Logger::log`](crate::Logger::log) call and dropped
/// once the handler returns.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    severity: Severity,
    message: Cow<'a, str>,
    attrs: Vec<Attr<'a>>,
}

impl<'a> Record<'a> {
    pub fn new(severity: Severity, message: impl Into<Cow<'a, str>>, attrs: Vec<Attr<'a>>) -> Self {
        Record {
            severity,
            message: message.into(),
            attrs,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human readable message, empty when the producer supplied none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attributes in the order the producer passed them.
    pub fn attrs(&self) -> &[Attr<'a>] {
        &self.attrs
    }
}

/// Structured-logging backend the adapter translates into.
///
/// Handlers own filtering, formatting and the output sink. They must tolerate
/// concurrent calls: the adapter shares one handler between all producers
/// without locking.
pub trait Handler: Send + Sync {
    /// Whether records of `severity` would be emitted in `ctx`.
    fn enabled(&self, ctx: &Context, severity: Severity) -> bool;

    /// Emit one record. Failures stay inside the handler.
    fn emit(&self, ctx: &Context, record: &Record<'_>);
}

impl<H: Handler + ?Sized> Handler for &H {
    fn enabled(&self, ctx: &Context, severity: Severity) -> bool {
        (**self).enabled(ctx, severity)
    }

    fn emit(&self, ctx: &Context, record: &Record<'_>) {
        (**self).emit(ctx, record)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn enabled(&self, ctx: &Context, severity: Severity) -> bool {
        (**self).enabled(ctx, severity)
    }

    fn emit(&self, ctx: &Context, record: &Record<'_>) {
        (**self).emit(ctx, record)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn enabled(&self, ctx: &Context, severity: Severity) -> bool {
        (**self).enabled(ctx, severity)
    }

    fn emit(&self, ctx: &Context, record: &Record<'_>) {
        (**self).emit(ctx, record)
    }
}

/// A handler with every severity disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Handler for Discard {
    #[inline]
    fn enabled(&self, _ctx: &Context, _severity: Severity) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _ctx: &Context, _record: &Record<'_>) {}
}
