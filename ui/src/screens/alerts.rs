//=============================================================================
// File: src/screens/alerts.rs
//=============================================================================
use crate::components::alert_card::AlertCard;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, ButtonType, Card, Grid, Notice, Switch};
use crate::stores::{AlertStore, SessionStore};
use api::alert::CATEGORIES;
use api::compat;
use api::{Alert, AlertFilter, AlertPreferences, ProfileUpdate, Radius, SessionError, Severity};
use dioxus::prelude::*;
use std::time::Duration;
use strum::IntoEnumIterator;

const SAVED_NOTICE_FOR: Duration = Duration::from_secs(3);

#[component]
pub fn AlertsScreen(session: SessionStore, mut alerts: AlertStore) -> Element {
    let mut category = use_signal(|| None::<String>);
    let mut severity = use_signal(|| None::<Severity>);

    let filter = AlertFilter {
        category: category(),
        severity: severity(),
    };
    let visible: Vec<Alert> = alerts.list().read().filtered(&filter).cloned().collect();
    let has_alerts = !alerts.is_empty();

    rsx! {
        Card {
            h3 { "Active Alerts" }
            Grid {
                label {
                    "Category"
                    select {
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            category.set((!value.is_empty()).then_some(value));
                        },
                        option { value: "", "All categories" }
                        for (id, label) in CATEGORIES {
                            option {
                                value: id,
                                selected: category().as_deref() == Some(id),
                                "{label}"
                            }
                        }
                    }
                }
                label {
                    "Severity"
                    select {
                        onchange: move |evt: FormEvent| severity.set(evt.value().parse().ok()),
                        option { value: "", "All severities" }
                        for level in Severity::iter() {
                            option {
                                value: "{level}",
                                selected: severity() == Some(level),
                                "{level.label()}"
                            }
                        }
                    }
                }
            }

            if visible.is_empty() {
                EmptyState {
                    title: if has_alerts { "No matching alerts".to_string() } else { "All clear".to_string() },
                    description: Some(if has_alerts {
                        "Try a different category or severity.".to_string()
                    } else {
                        "There are no active alerts right now.".to_string()
                    }),
                }
            } else {
                for alert in visible {
                    AlertCard {
                        key: "{alert.id}",
                        alert: alert.clone(),
                        on_remove: {
                            let id = alert.id.clone();
                            move |_| alerts.remove_alert(&id)
                        },
                    }
                }
            }

            if has_alerts {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| alerts.clear_alerts(),
                    "Clear all alerts"
                }
            }
        }

        if let Some(user) = session.user() {
            PreferencesEditor {
                session,
                initial: user.alert_preferences,
            }
        } else {
            Card {
                h4 { "Alert Preferences" }
                p { "Sign in to choose which alerts reach you." }
            }
        }
    }
}

/// Edits a copy of the user's alert preferences and saves it through the session.
#[component]
fn PreferencesEditor(session: SessionStore, initial: AlertPreferences) -> Element {
    let mut prefs = use_signal(|| initial.clone());
    let mut radius_text = use_signal(|| initial.radius.miles().to_string());
    let mut notice = use_signal(|| None::<(String, bool)>);
    let mut saving = use_signal(|| false);

    let save = move |_| {
        let mut session = session;
        let radius = match radius_text().trim().parse::<f64>() {
            Ok(miles) => Radius::try_from(miles),
            Err(_) => {
                notice.set(Some(("Radius must be a number of miles.".to_string(), true)));
                return;
            }
        };
        let radius = match radius {
            Ok(radius) => radius,
            Err(e) => {
                notice.set(Some((e.to_string(), true)));
                return;
            }
        };
        let mut updated = prefs();
        updated.radius = radius;

        saving.set(true);
        spawn(async move {
            let result = session
                .update_profile(ProfileUpdate::default().alert_preferences(updated))
                .await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notice.set(Some(("Preferences saved.".to_string(), false)));
                    compat::sleep(SAVED_NOTICE_FOR).await;
                    notice.set(None);
                }
                Err(SessionError::Superseded) => {}
                Err(e) => notice.set(Some((format!("Failed to update preferences: {e}"), true))),
            }
        });
    };

    let current = prefs();

    rsx! {
        Card {
            h4 { "Alert Preferences" }
            Grid {
                Switch {
                    label: "Email notifications".to_string(),
                    checked: current.email_enabled,
                    on_toggle: move |on| prefs.write().email_enabled = on,
                }
                Switch {
                    label: "Push notifications".to_string(),
                    checked: current.push_enabled,
                    on_toggle: move |on| prefs.write().push_enabled = on,
                }
            }
            fieldset {
                legend { "Categories" }
                for (id, label) in CATEGORIES {
                    label {
                        input {
                            r#type: "checkbox",
                            checked: current.wants(id),
                            onchange: move |_| prefs.write().toggle_category(id),
                        }
                        "{label}"
                    }
                }
            }
            label {
                "Alert radius (miles)"
                input {
                    r#type: "number",
                    min: "0.1",
                    step: "0.5",
                    value: "{radius_text}",
                    oninput: move |evt: FormEvent| radius_text.set(evt.value()),
                }
            }
            if let Some((message, error)) = notice() {
                Notice { message, error }
            }
            Button {
                disabled: saving(),
                on_click: save,
                if saving() { "Saving..." } else { "Save preferences" }
            }
        }
    }
}
