//! Who is using the app right now.
//!
//! [`SessionState`] is the single source of truth for the signed-in profile.
//! Requests that talk to the account service run in three steps: take a
//! [`Ticket`] with [`SessionState::begin`], await the service, then hand the
//! result to [`SessionState::establish`]. Every `begin` (and every logout)
//! supersedes the tickets issued before it, so a late answer to an abandoned
//! request is dropped instead of overwriting newer state.

use crate::accounts::AccountError;
use crate::profile::{ProfileUpdate, UserProfile};
use crate::storage::ProfileStorage;
use dioxus_logger::tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("no active session")]
    NoActiveSession,
    #[error("request was superseded by a newer one")]
    Superseded,
}

/// Proof that a request was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    profile: Option<UserProfile>,
    generation: u64,
}

impl SessionState {
    /// Restores the session persisted in `storage`, if any.
    pub fn restore(storage: &ProfileStorage) -> Self {
        let profile = storage.load();
        match &profile {
            Some(p) => info!("restored session for user {}", p.id),
            None => debug!("no stored session"),
        }
        Self {
            profile,
            generation: 0,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// True exactly when a profile is present.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Starts a request, superseding all earlier ones.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Installs `profile` as the session and persists it, provided `ticket`
    /// is still current.
    ///
    /// A failed write is logged; the in-memory session stays authoritative
    /// for the running process.
    pub fn establish(
        &mut self,
        ticket: Ticket,
        profile: UserProfile,
        storage: &ProfileStorage,
    ) -> Result<(), SessionError> {
        if !self.is_current(ticket) {
            debug!("dropping superseded result for user {}", profile.id);
            return Err(SessionError::Superseded);
        }
        if let Err(e) = storage.save(&profile) {
            warn!("could not persist profile: {}", e);
        }
        self.profile = Some(profile);
        Ok(())
    }

    /// The profile that `update` would produce.
    pub fn merged(&self, update: &ProfileUpdate) -> Result<UserProfile, SessionError> {
        self.profile
            .as_ref()
            .map(|profile| profile.merged(update))
            .ok_or(SessionError::NoActiveSession)
    }

    /// Ends the session and erases the stored profile. Requests still in
    /// flight are superseded.
    pub fn end(&mut self, storage: &ProfileStorage) {
        self.generation += 1;
        if let Some(profile) = self.profile.take() {
            info!("logged out user {}", profile.id);
        }
        storage.erase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountService, MockAccountService};
    use crate::profile::tests::sample_profile;
    use crate::storage::{MemorySlot, ProfileSlot};
    use std::rc::Rc;

    fn memory_storage() -> (Rc<MemorySlot>, ProfileStorage) {
        let slot = Rc::new(MemorySlot::new());
        (slot.clone(), ProfileStorage::new(slot))
    }

    async fn login(
        state: &mut SessionState,
        service: &dyn AccountService,
        storage: &ProfileStorage,
        email: &str,
    ) -> Result<(), SessionError> {
        let ticket = state.begin();
        let profile = service.login(email, "anything").await?;
        state.establish(ticket, profile, storage)
    }

    #[test]
    fn starts_unauthenticated_without_stored_profile() {
        let (_, storage) = memory_storage();
        let state = SessionState::restore(&storage);
        assert!(!state.is_authenticated());
        assert_eq!(state.user(), None);
    }

    #[test]
    fn malformed_stored_profile_starts_unauthenticated() {
        let slot = Rc::new(MemorySlot::with_contents("[1, 2"));
        let storage = ProfileStorage::new(slot.clone());

        let state = SessionState::restore(&storage);
        assert!(!state.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[tokio::test]
    async fn login_establishes_and_persists_the_session() {
        let (_, storage) = memory_storage();
        let service = MockAccountService::default();
        let mut state = SessionState::restore(&storage);

        login(&mut state, &service, &storage, "dee@example.com")
            .await
            .unwrap();

        assert!(state.is_authenticated());
        assert_eq!(
            state.user().unwrap().email.as_deref(),
            Some("dee@example.com")
        );
        let restarted = SessionState::restore(&storage);
        assert_eq!(restarted.user(), state.user());
    }

    #[tokio::test]
    async fn logout_clears_memory_and_slot_across_restarts() {
        let (slot, storage) = memory_storage();
        let service = MockAccountService::default();
        let mut state = SessionState::restore(&storage);
        login(&mut state, &service, &storage, "dee@example.com")
            .await
            .unwrap();

        state.end(&storage);

        assert!(!state.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);
        assert!(!SessionState::restore(&storage).is_authenticated());
    }

    #[tokio::test]
    async fn signup_then_login_keeps_the_latest_profile() {
        let (_, storage) = memory_storage();
        let service = MockAccountService::default();
        let mut state = SessionState::default();

        let ticket = state.begin();
        let profile = service.signup("new@example.com", "pw", "Nia").await.unwrap();
        state.establish(ticket, profile, &storage).unwrap();
        assert_eq!(state.user().unwrap().name.as_deref(), Some("Nia"));

        login(&mut state, &service, &storage, "old@example.com")
            .await
            .unwrap();
        assert_eq!(state.user().unwrap().id, "123456");
    }

    #[test]
    fn superseded_results_are_discarded() {
        let (slot, storage) = memory_storage();
        let mut state = SessionState::default();

        let stale = state.begin();
        let fresh = state.begin();
        assert_eq!(
            state.establish(stale, sample_profile(), &storage),
            Err(SessionError::Superseded)
        );
        assert!(!state.is_authenticated());
        assert_eq!(slot.read().unwrap(), None);

        state.establish(fresh, sample_profile(), &storage).unwrap();
        assert!(state.is_authenticated());
    }

    #[test]
    fn logout_supersedes_requests_in_flight() {
        let (_, storage) = memory_storage();
        let mut state = SessionState::default();

        let pending = state.begin();
        state.end(&storage);

        assert_eq!(
            state.establish(pending, sample_profile(), &storage),
            Err(SessionError::Superseded)
        );
        assert!(!state.is_authenticated());
    }

    #[test]
    fn update_without_session_fails() {
        let state = SessionState::default();
        assert_eq!(
            state.merged(&ProfileUpdate::default().neighborhood("Tremont")),
            Err(SessionError::NoActiveSession)
        );
    }

    #[test]
    fn update_merges_and_persists() {
        let (_, storage) = memory_storage();
        let mut state = SessionState::default();
        let ticket = state.begin();
        state.establish(ticket, sample_profile(), &storage).unwrap();

        let ticket = state.begin();
        let updated = state
            .merged(&ProfileUpdate::default().neighborhood("Tremont"))
            .unwrap();
        state.establish(ticket, updated, &storage).unwrap();

        let stored = storage.load().unwrap();
        assert_eq!(stored.neighborhood.as_deref(), Some("Tremont"));
        assert_eq!(stored.name.as_deref(), Some("J"));
        assert_eq!(
            UserProfile {
                neighborhood: None,
                ..stored
            },
            sample_profile()
        );
    }

    #[tokio::test]
    async fn account_failures_surface_as_session_errors() {
        struct Rejecting;

        #[async_trait::async_trait(?Send)]
        impl AccountService for Rejecting {
            async fn login(&self, _: &str, _: &str) -> Result<UserProfile, AccountError> {
                Err(AccountError::InvalidCredentials)
            }
            async fn signup(&self, _: &str, _: &str, _: &str) -> Result<UserProfile, AccountError> {
                Err(AccountError::Transport("offline".into()))
            }
            async fn update_profile(&self, _: &UserProfile) -> Result<(), AccountError> {
                Ok(())
            }
        }

        let (_, storage) = memory_storage();
        let mut state = SessionState::default();
        let err = login(&mut state, &Rejecting, &storage, "x@example.com")
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Account(AccountError::InvalidCredentials));
        assert!(!state.is_authenticated());
    }
}
