use tokio_util::sync::CancellationToken;

/// Context handed to the backend on every enablement check and emission.
///
/// A background context is never cancelled. A cancellable context wraps a
/// [`CancellationToken`] shared with all of its clones, so cancelling one
/// cancels them all. The adapter does not interpret cancellation itself;
/// handlers decide what a cancelled context means for them.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: Option<CancellationToken>,
}

impl Context {
    pub fn background() -> Self {
        Context { token: None }
    }

    pub fn cancellable() -> Self {
        Context {
            token: Some(CancellationToken::new()),
        }
    }

    /// Context cancelled together with `token`.
    pub fn with_token(token: CancellationToken) -> Self {
        Context { token: Some(token) }
    }

    /// Cancel this context and every clone of it. No-op on a background context.
    pub fn cancel(&self) {
        if let Some(token) = &self.token {
            token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
