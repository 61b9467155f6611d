//! The registry of currently active alerts.

use crate::alert::{Alert, AlertFilter, AlertId, NewAlert, Severity};
use chrono::Utc;
use dioxus_logger::tracing::debug;

/// Active alerts, newest first.
///
/// Ids are unique across the list at all times. Removal of an unknown id is
/// a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertList {
    alerts: Vec<Alert>,
}

impl AlertList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding the two demo alerts.
    pub fn with_demo_alerts() -> Self {
        let now = Utc::now();
        let alerts = demo_alerts()
            .into_iter()
            .map(|alert| alert.into_alert(AlertId::generate(), now))
            .collect();
        Self { alerts }
    }

    /// Prepends a new alert and returns its freshly assigned id.
    pub fn add(&mut self, alert: NewAlert) -> AlertId {
        let id = loop {
            let candidate = AlertId::generate();
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        debug!("adding alert {} ({})", id, alert.title);
        self.alerts.insert(0, alert.into_alert(id.clone(), Utc::now()));
        id
    }

    /// Removes the alert with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &AlertId) -> Option<Alert> {
        let pos = self.alerts.iter().position(|alert| &alert.id == id)?;
        debug!("removing alert {}", id);
        Some(self.alerts.remove(pos))
    }

    pub fn clear(&mut self) {
        debug!("clearing {} alerts", self.alerts.len());
        self.alerts.clear();
    }

    pub fn contains(&self, id: &AlertId) -> bool {
        self.alerts.iter().any(|alert| &alert.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Alert> {
        self.alerts.get(index)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn as_slice(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn filtered<'a>(&'a self, filter: &'a AlertFilter) -> impl Iterator<Item = &'a Alert> {
        self.alerts.iter().filter(move |alert| filter.matches(alert))
    }
}

fn demo_alerts() -> [NewAlert; 2] {
    [
        NewAlert::new(
            "Police Activity",
            "Increased police presence near Fordham Plaza due to reported incident.",
            Severity::Medium,
            "police",
        )
        .at("Fordham Plaza"),
        NewAlert::new(
            "Traffic Alert",
            "Major delays on Grand Concourse due to accident. Seek alternate routes.",
            Severity::High,
            "traffic",
        )
        .at("Grand Concourse"),
    ]
}
