use api::{Alert, AlertId, AlertList, NewAlert};
use dioxus::prelude::*;

/// The active alerts, shared by the banner and the list views.
#[derive(Clone, Copy, PartialEq)]
pub struct AlertStore {
    alerts: Signal<AlertList>,
}

impl AlertStore {
    /// The underlying signal. Reading it subscribes the caller to changes.
    pub fn list(&self) -> Signal<AlertList> {
        self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.read().is_empty()
    }

    /// A copy of the active alerts, newest first.
    pub fn active_alerts(&self) -> Vec<Alert> {
        self.alerts.read().as_slice().to_vec()
    }

    pub fn add_alert(&mut self, alert: NewAlert) -> AlertId {
        self.alerts.write().add(alert)
    }

    /// Removes the alert if present. Unknown ids leave the list (and its
    /// subscribers) untouched.
    pub fn remove_alert(&mut self, id: &AlertId) {
        if self.alerts.peek().contains(id) {
            self.alerts.write().remove(id);
        }
    }

    pub fn clear_alerts(&mut self) {
        if !self.alerts.peek().is_empty() {
            self.alerts.write().clear();
        }
    }
}

/// Creates the alert store owned by the calling component.
///
/// The demo alerts are installed exactly once, when the component first
/// renders; later renders reuse the same list.
pub fn use_alert_store(seed_demo: bool) -> AlertStore {
    let alerts = use_signal(move || {
        if seed_demo {
            AlertList::with_demo_alerts()
        } else {
            AlertList::new()
        }
    });
    AlertStore { alerts }
}
