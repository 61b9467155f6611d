//! The account API: sign-in, sign-up and profile sync.
//!
//! There is no backend yet. [`MockAccountService`] waits a fixed delay and
//! then succeeds with a canned profile, but callers are written against
//! [`AccountService`] so a real client can replace it without touching them.

use crate::compat;
use crate::profile::{AlertPreferences, Radius, UserProfile};
use async_trait::async_trait;
use dioxus_logger::tracing::info;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("could not reach the account service: {0}")]
    Transport(String),
}

#[async_trait(?Send)]
pub trait AccountService {
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AccountError>;

    async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AccountError>;

    /// Pushes an edited profile to the service.
    async fn update_profile(&self, profile: &UserProfile) -> Result<(), AccountError>;
}

/// Accepts any credentials after `latency`.
#[derive(Debug, Clone, Default)]
pub struct MockAccountService {
    latency: Duration,
}

impl MockAccountService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            compat::sleep(self.latency).await;
        }
    }
}

#[async_trait(?Send)]
impl AccountService for MockAccountService {
    async fn login(&self, email: &str, _password: &str) -> Result<UserProfile, AccountError> {
        self.simulate_round_trip().await;
        info!("mock login for {}", email);

        Ok(UserProfile {
            id: "123456".to_string(),
            name: Some("John Doe".to_string()),
            email: Some(email.to_string()),
            neighborhood: Some("Fordham".to_string()),
            is_anonymous: false,
            alert_preferences: preferences(true, true, &["crime", "traffic", "emergency"], 2.0),
            saved_routes: Vec::new(),
        })
    }

    async fn signup(
        &self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<UserProfile, AccountError> {
        self.simulate_round_trip().await;
        info!("mock signup for {}", email);

        Ok(UserProfile {
            id: crate::ids::next_id("user"),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            neighborhood: None,
            is_anonymous: false,
            alert_preferences: preferences(true, false, &["crime", "emergency"], 1.0),
            saved_routes: Vec::new(),
        })
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<(), AccountError> {
        self.simulate_round_trip().await;
        info!("mock profile sync for user {}", profile.id);
        Ok(())
    }
}

fn preferences(email: bool, push: bool, categories: &[&str], radius: f64) -> AlertPreferences {
    AlertPreferences {
        email_enabled: email,
        push_enabled: push,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        radius: Radius::literal(radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test]
    async fn login_binds_the_given_email_whatever_the_password() {
        let service = MockAccountService::default();
        for password in ["", "hunter2", "anything"] {
            let profile = service.login("maria@example.com", password).await.unwrap();
            assert_eq!(profile.email.as_deref(), Some("maria@example.com"));
            assert_eq!(profile.id, "123456");
            assert_eq!(profile.neighborhood.as_deref(), Some("Fordham"));
            assert!(profile.alert_preferences.wants("traffic"));
        }
    }

    #[tokio::test]
    async fn signup_assigns_fresh_ids_and_default_preferences() {
        let service = MockAccountService::default();
        let a = service.signup("a@example.com", "pw", "Ana").await.unwrap();
        let b = service.signup("b@example.com", "pw", "Ben").await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.name.as_deref(), Some("Ana"));
        assert_eq!(a.neighborhood, None);
        assert!(a.alert_preferences.email_enabled);
        assert!(!a.alert_preferences.push_enabled);
        assert_eq!(a.alert_preferences.radius.miles(), 1.0);
        assert_eq!(a.alert_preferences.categories.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn calls_wait_for_the_configured_latency() {
        let service = MockAccountService::new(Duration::from_millis(300));
        let start = Instant::now();

        service.login("x@example.com", "pw").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
