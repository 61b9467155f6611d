//! Small Dioxus wrappers around Pico.css markup.
//! Pico styles plain semantic elements, so most of these only pick the element.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid. Each direct child becomes a column.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// Groups related content in an `<article>`.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class(&self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Renders `type="submit"` so the button submits its form.
    #[props(default = false)]
    submit: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    let class_str = props.button_type.class(props.outline);
    rsx! {
        button {
            class: "{class_str}",
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = false)]
    required: bool,
}

/// A labeled text input bound to a string signal.
pub fn Input(mut props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            input {
                r#type: "{props.input_type}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                required: props.required,
                value: "{props.value}",
                oninput: move |evt: FormEvent| props.value.set(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SwitchProps {
    label: String,
    checked: bool,
    on_toggle: EventHandler<bool>,
}

/// A Pico switch (a checkbox with `role="switch"`).
pub fn Switch(props: SwitchProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                role: "switch",
                checked: props.checked,
                onchange: move |evt: FormEvent| props.on_toggle.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}

/// Inline status line for form results.
#[component]
pub fn Notice(message: String, #[props(default = false)] error: bool) -> Element {
    let color = if error {
        "var(--pico-del-color)"
    } else {
        "var(--pico-ins-color)"
    };
    rsx! {
        p {
            role: if error { "alert" } else { "status" },
            style: "color: {color};",
            "{message}"
        }
    }
}
