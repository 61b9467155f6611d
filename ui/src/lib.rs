// The client-side Dioxus application.

use dioxus::prelude::*;

mod components;
mod hooks;
mod screens;
pub mod stores;

#[cfg(test)]
mod test_util;

use api::AppConfig;
use components::alert_banner::AlertBanner;
use components::pico::Container;
use screens::account::AccountScreen;
use screens::alerts::AlertsScreen;
use screens::home::HomeScreen;
use stores::{use_alert_store, use_session_store};

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The screens reachable from the navigation tabs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Alerts,
    Account,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Alerts => "Alerts",
            Screen::Account => "Account",
        }
    }
}

const ALL_SCREENS: [Screen; 3] = [Screen::Home, Screen::Alerts, Screen::Account];

#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        ul {
            class: "tab-menu",
            for screen in ALL_SCREENS {
                li {
                    a {
                        href: "#",
                        class: if active_screen() == screen { "active-tab" } else { "" },
                        "aria-current": if active_screen() == screen { "page" } else { "false" },
                        onclick: move |event| {
                            event.prevent_default();
                            active_screen.set(screen);
                        },
                        "{screen.name()}"
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        border-radius: 0;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Owns the two stores and passes them down to every screen.
#[component]
fn AppBody() -> Element {
    let config = use_hook(AppConfig::from_env);
    let session = use_session_store(&config);
    let alerts = use_alert_store(config.seed_demo_alerts);
    let active_screen = use_signal(Screen::default);

    let signed_in_as = session.user().map(|user| user.display_name().to_string());

    rsx! {
        AlertBanner {
            alerts,
            rotation_period: config.rotation_period,
        }
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Bronx Safe" }
                            }
                            if let Some(name) = signed_in_as {
                                li {
                                    small { "Signed in as {name}" }
                                }
                            }
                        }
                        Tabs {
                            active_screen,
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Home => rsx! {
                            HomeScreen {
                                session,
                                alerts,
                                active_screen,
                            }
                        },
                        Screen::Alerts => rsx! {
                            AlertsScreen {
                                session,
                                alerts,
                            }
                        },
                        Screen::Account => rsx! {
                            AccountScreen {
                                session,
                            }
                        },
                    }
                }
            }
        }
    }
}
