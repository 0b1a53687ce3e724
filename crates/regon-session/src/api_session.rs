//! Session backed directly by the remote client.

use crate::session::{Session, SessionState};
use async_trait::async_trait;
use regon_api::{ApiFault, RegistryApi};
use regon_core::Result;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Plain session: every login goes to the network.
pub struct ApiSession {
    api: Arc<dyn RegistryApi>,
    state: SessionState,
}

impl std::fmt::Debug for ApiSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ApiSession {
    /// Create a logged-out session over `api`.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self {
            api,
            state: SessionState::LoggedOut,
        }
    }
}

#[async_trait]
impl Session for ApiSession {
    async fn login(&mut self) -> Result<()> {
        if self.state == SessionState::LoggedIn {
            return Ok(());
        }

        match self.api.login().await {
            Ok(()) => {
                self.state = SessionState::LoggedIn;
                info!("Successfully logged in to GUS API");
                Ok(())
            }
            Err(fault) => {
                match &fault {
                    ApiFault::InvalidUserKey(_) => error!("Failed to login - invalid API key"),
                    ApiFault::Transport(detail) => {
                        error!(error = %detail, "Failed to login - connection error");
                    }
                    other => error!(error = %other, "Failed to login - SOAP error"),
                }
                Err(fault.into())
            }
        }
    }

    async fn logout(&mut self) {
        if self.state == SessionState::LoggedOut {
            return;
        }

        match self.api.logout().await {
            Ok(()) => info!("Successfully logged out from GUS API"),
            Err(fault) => {
                // The remote may or may not have closed the session; local state resets anyway
                warn!(error = %fault, "Failed to logout gracefully");
            }
        }
        self.state = SessionState::LoggedOut;
    }

    fn restore(&mut self, token: &str) {
        self.api.set_session_token(token);
        self.state = SessionState::LoggedIn;
        debug!("Session token restored");
    }

    fn state(&self) -> SessionState {
        self.state
    }
}
