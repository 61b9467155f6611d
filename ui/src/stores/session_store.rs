use api::{
    AccountService, AppConfig, MockAccountService, ProfileStorage, ProfileUpdate, SessionError,
    SessionState, UserProfile,
};
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use std::rc::Rc;

/// The account service and the profile slot the session writes through.
#[derive(Clone)]
pub struct SessionBackend {
    accounts: Rc<dyn AccountService>,
    storage: ProfileStorage,
}

impl SessionBackend {
    pub fn new(accounts: Rc<dyn AccountService>, storage: ProfileStorage) -> Self {
        Self { accounts, storage }
    }

    /// The mock account service and the platform's profile slot.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Rc::new(MockAccountService::new(config.mock_latency)),
            ProfileStorage::for_platform(config),
        )
    }
}

/// The signed-in user, shared by every screen.
///
/// Async operations resolve against the request generation held in
/// [`SessionState`]: a result that arrives after a newer request or a logout
/// is dropped and reported as [`SessionError::Superseded`].
#[derive(Clone, Copy, PartialEq)]
pub struct SessionStore {
    state: Signal<SessionState>,
    backend: Signal<SessionBackend>,
}

impl SessionStore {
    fn backend(&self) -> SessionBackend {
        SessionBackend::clone(&self.backend.peek())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub async fn login(&mut self, email: String, password: String) -> Result<(), SessionError> {
        let backend = self.backend();
        let ticket = self.state.write().begin();
        let profile = backend.accounts.login(&email, &password).await?;
        self.state
            .write()
            .establish(ticket, profile, &backend.storage)?;
        info!("logged in as {}", email);
        Ok(())
    }

    pub async fn signup(
        &mut self,
        email: String,
        password: String,
        name: String,
    ) -> Result<(), SessionError> {
        let backend = self.backend();
        let ticket = self.state.write().begin();
        let profile = backend.accounts.signup(&email, &password, &name).await?;
        self.state
            .write()
            .establish(ticket, profile, &backend.storage)?;
        info!("signed up as {}", email);
        Ok(())
    }

    pub fn logout(&mut self) {
        let backend = self.backend();
        self.state.write().end(&backend.storage);
    }

    /// Merges `update` into the current profile and persists it.
    ///
    /// Fails with [`SessionError::NoActiveSession`] when nobody is signed in.
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), SessionError> {
        let backend = self.backend();
        let updated = self.state.peek().merged(&update)?;
        let ticket = self.state.write().begin();
        backend.accounts.update_profile(&updated).await?;
        let id = updated.id.clone();
        self.state
            .write()
            .establish(ticket, updated, &backend.storage)?;
        info!("updated profile for user {}", id);
        Ok(())
    }
}

/// Creates the session store owned by the calling component, restoring any
/// persisted profile on first render.
pub fn use_session_store(config: &AppConfig) -> SessionStore {
    let backend = use_signal(|| SessionBackend::from_config(config));
    let state = use_signal(|| SessionState::restore(&backend.peek().storage));
    SessionStore { state, backend }
}
