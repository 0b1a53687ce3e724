//! The session trait and its state.

use async_trait::async_trait;
use regon_core::Result;

/// Whether a remote session is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session; the next lookup has to log in
    #[default]
    LoggedOut,
    /// A token is held and lookups can proceed
    LoggedIn,
}

/// Lifecycle of one remote session.
///
/// State changes only through [`login`](Session::login),
/// [`logout`](Session::logout) and [`restore`](Session::restore).
#[async_trait]
pub trait Session: Send + Sync {
    /// Open a session. Does nothing when already logged in.
    async fn login(&mut self) -> Result<()>;

    /// Close the session. Never fails: remote errors are logged and the
    /// session ends up logged out regardless.
    async fn logout(&mut self);

    /// Adopt an existing token without a network login.
    fn restore(&mut self, token: &str);

    /// Current state.
    fn state(&self) -> SessionState;

    /// Whether the state is [`SessionState::LoggedIn`].
    fn is_logged_in(&self) -> bool {
        self.state() == SessionState::LoggedIn
    }

    /// Log in only if currently logged out.
    async fn ensure_logged_in(&mut self) -> Result<()> {
        if !self.is_logged_in() {
            self.login().await?;
        }
        Ok(())
    }
}
