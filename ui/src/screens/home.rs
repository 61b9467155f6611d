//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::alert_card::AlertCard;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, ButtonType, Card, Grid};
use crate::stores::{AlertStore, SessionStore};
use crate::Screen;
use dioxus::prelude::*;

const LATEST_COUNT: usize = 3;

#[component]
pub fn HomeScreen(
    session: SessionStore,
    alerts: AlertStore,
    active_screen: Signal<Screen>,
) -> Element {
    let user = session.user();
    let latest: Vec<_> = alerts.list().read().iter().take(LATEST_COUNT).cloned().collect();
    let total = alerts.len();

    rsx! {
        Card {
            match &user {
                Some(user) => rsx! {
                    h3 { "Welcome back, {user.display_name()}" }
                    if let Some(neighborhood) = &user.neighborhood {
                        p { "Showing what's happening around {neighborhood}." }
                    } else {
                        p { "Set your neighborhood on the Account tab to get local alerts." }
                    }
                },
                None => rsx! {
                    h3 { "Bronx Safe" }
                    p { "Community safety alerts for your neighborhood." }
                },
            }
            Grid {
                div {
                    small { "Active alerts" }
                    h2 { "{total}" }
                }
                div {
                    Button {
                        on_click: move |_| active_screen.set(Screen::Alerts),
                        "View all alerts"
                    }
                }
                if user.is_none() {
                    div {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| active_screen.set(Screen::Account),
                            "Sign in"
                        }
                    }
                }
            }
        }

        h4 { "Latest alerts" }
        if latest.is_empty() {
            EmptyState {
                title: "All clear".to_string(),
                description: Some("There are no active alerts right now.".to_string()),
            }
        } else {
            for alert in latest {
                AlertCard {
                    key: "{alert.id}",
                    alert: alert.clone(),
                }
            }
        }
    }
}
