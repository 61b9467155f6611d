//=============================================================================
// File: src/components/alert_card.rs
//=============================================================================
use crate::components::alert_banner::severity_color;
use api::Alert;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AlertCardProps {
    pub alert: Alert,
    /// Shows a dismiss button when set.
    #[props(optional)]
    pub on_remove: Option<EventHandler<()>>,
}

#[component]
pub fn AlertCard(props: AlertCardProps) -> Element {
    let alert = &props.alert;
    let color = severity_color(alert.severity);
    let when = alert.timestamp.format("%b %e, %H:%M UTC").to_string();

    rsx! {
        article {
            style: "border-left: 6px solid {color}; margin-bottom: 1rem;",
            header {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                strong { "{alert.title}" }
                mark {
                    style: "background-color: {color}; color: white; padding: 0 0.5rem;",
                    "{alert.severity.label()}"
                }
            }
            p { "{alert.message}" }
            footer {
                style: "display: flex; justify-content: space-between; align-items: center;",
                small {
                    if let Some(location) = &alert.location {
                        "{location} · "
                    }
                    "{when} · {alert.category}"
                }
                if let Some(on_remove) = props.on_remove {
                    button {
                        class: "secondary outline",
                        style: "padding: 0.1rem 0.6rem; margin: 0;",
                        "aria-label": "Dismiss alert",
                        onclick: move |_| on_remove.call(()),
                        "Dismiss"
                    }
                }
            }
        }
    }
}
