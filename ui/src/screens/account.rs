//=============================================================================
// File: src/screens/account.rs
//=============================================================================
use crate::components::pico::{Button, ButtonType, Card, Grid, Input, Notice};
use crate::stores::SessionStore;
use api::{ProfileUpdate, SessionError, UserProfile};
use dioxus::prelude::*;

#[component]
pub fn AccountScreen(session: SessionStore) -> Element {
    match session.user() {
        Some(user) => rsx! {
            ProfilePanel { session, user }
        },
        None => rsx! {
            SignInPanel { session }
        },
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Signup,
}

#[component]
fn SignInPanel(session: SessionStore) -> Element {
    let mut mode = use_signal(|| Mode::Login);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut session = session;
        let (email, password, name) = (email(), password(), name());
        let signing_up = mode() == Mode::Signup;

        error.set(None);
        busy.set(true);
        spawn(async move {
            let result = if signing_up {
                session.signup(email, password, name).await
            } else {
                session.login(email, password).await
            };
            busy.set(false);
            match result {
                Ok(()) | Err(SessionError::Superseded) => {}
                Err(e) => error.set(Some(format!(
                    "Authentication failed. Please check your credentials and try again. ({e})"
                ))),
            }
        });
    };

    let signing_up = mode() == Mode::Signup;

    rsx! {
        Card {
            h3 { if signing_up { "Create an account" } else { "Sign in" } }
            form {
                onsubmit: submit,
                if signing_up {
                    Input {
                        label: "Name".to_string(),
                        value: name,
                        placeholder: "Your name".to_string(),
                        required: true,
                    }
                }
                Input {
                    label: "Email".to_string(),
                    value: email,
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    required: true,
                }
                Input {
                    label: "Password".to_string(),
                    value: password,
                    input_type: "password".to_string(),
                    required: true,
                }
                if let Some(message) = error() {
                    Notice { message, error: true }
                }
                Button {
                    submit: true,
                    disabled: busy(),
                    if busy() {
                        "Please wait..."
                    } else if signing_up {
                        "Sign up"
                    } else {
                        "Sign in"
                    }
                }
            }
            p {
                if signing_up { "Already have an account? " } else { "New to Bronx Safe? " }
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        error.set(None);
                        mode.set(if signing_up { Mode::Login } else { Mode::Signup });
                    },
                    if signing_up { "Sign in" } else { "Create an account" }
                }
            }
        }
    }
}

#[component]
fn ProfilePanel(session: SessionStore, user: UserProfile) -> Element {
    let name = use_signal(|| user.name.clone().unwrap_or_default());
    let email = use_signal(|| user.email.clone().unwrap_or_default());
    let neighborhood = use_signal(|| user.neighborhood.clone().unwrap_or_default());
    let mut notice = use_signal(|| None::<(String, bool)>);
    let mut busy = use_signal(|| false);

    let user_for_save = user.clone();
    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let mut session = session;
        let update = match profile_changes(&user_for_save, &name(), &email(), &neighborhood()) {
            Ok(update) if update == ProfileUpdate::default() => {
                notice.set(Some(("Nothing to save.".to_string(), false)));
                return;
            }
            Ok(update) => update,
            Err(message) => {
                notice.set(Some((message.to_string(), true)));
                return;
            }
        };

        busy.set(true);
        spawn(async move {
            let result = session.update_profile(update).await;
            busy.set(false);
            match result {
                Ok(()) => notice.set(Some(("Profile saved.".to_string(), false))),
                Err(SessionError::Superseded) => {}
                Err(e) => notice.set(Some((format!("Failed to update profile: {e}"), true))),
            }
        });
    };

    let account_kind = if user.is_anonymous {
        "Anonymous account"
    } else {
        "Registered account"
    };

    rsx! {
        Card {
            h3 { "{user.display_name()}" }
            p {
                small { "{account_kind} · ID {user.id}" }
            }
            form {
                onsubmit: save,
                Input {
                    label: "Name".to_string(),
                    value: name,
                }
                Input {
                    label: "Email".to_string(),
                    value: email,
                    input_type: "email".to_string(),
                }
                Input {
                    label: "Neighborhood".to_string(),
                    value: neighborhood,
                    placeholder: "e.g. Fordham".to_string(),
                }
                if let Some((message, error)) = notice() {
                    Notice { message, error }
                }
                Grid {
                    Button {
                        submit: true,
                        disabled: busy(),
                        "Save profile"
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            let mut session = session;
                            session.logout();
                        },
                        "Log out"
                    }
                }
            }
        }
    }
}

/// The update holding only the fields that differ from `user`.
///
/// Email is required once set, so a blank email field is refused rather than
/// clearing the stored address.
fn profile_changes(
    user: &UserProfile,
    name: &str,
    email: &str,
    neighborhood: &str,
) -> Result<ProfileUpdate, &'static str> {
    fn changed(current: &Option<String>, edited: &str) -> bool {
        current.as_deref().unwrap_or("") != edited.trim()
    }

    if email.trim().is_empty() && user.email.is_some() {
        return Err("Email cannot be empty.");
    }

    let mut update = ProfileUpdate::default();
    if changed(&user.name, name) {
        update = update.name(name);
    }
    if changed(&user.email, email) {
        update = update.email(email);
    }
    if changed(&user.neighborhood, neighborhood) {
        update = update.neighborhood(neighborhood);
    }
    Ok(update)
}
