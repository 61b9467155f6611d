//=============================================================================
// File: src/components/alert_banner.rs
//=============================================================================
use crate::hooks::use_banner_rotation;
use crate::stores::AlertStore;
use api::Severity;
use dioxus::prelude::*;
use std::time::Duration;

/// Background color used for an alert of the given severity.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "#dc2626",
        Severity::High => "#ea580c",
        Severity::Medium => "#ca8a04",
        Severity::Low => "#2563eb",
    }
}

/// A strip above the page that cycles through the active alerts.
#[component]
pub fn AlertBanner(alerts: AlertStore, rotation_period: Duration) -> Element {
    let mut rotation = use_banner_rotation(alerts, rotation_period);

    let visible = rotation.read().visible_index();
    let current = visible.and_then(|index| alerts.list().read().get(index).cloned());
    let Some(alert) = current else {
        return rsx! {};
    };
    let color = severity_color(alert.severity);

    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.5rem 1rem; color: white; background-color: {color};",
            div {
                strong { style: "margin-right: 0.5rem;", "{alert.title}:" }
                span { "{alert.message}" }
            }
            button {
                class: "outline contrast",
                style: "padding: 0.1rem 0.5rem; margin: 0; color: white; border-color: white;",
                "aria-label": "Close alert",
                onclick: move |_| rotation.write().dismiss(),
                "✕"
            }
        }
    }
}
