//! Form building blocks shared by the login and signup screens.

use dioxus::prelude::*;

#[component]
pub fn FieldError(#[props(default)] message: Option<&'static str>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "field-input field-input--invalid"
    } else {
        "field-input"
    }
}

/// Labelled text input with an inline error.
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    #[props(default = "")] placeholder: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: input_class(error.is_some()),
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldError { message: error }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    label: &'static str,
    value: String,
    #[props(default = "")] placeholder: &'static str,
    #[props(default)] error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div {
            class: "field",
            span { class: "field-label", "{label}" }
            div {
                class: "field-row",
                input {
                    class: input_class(error.is_some()),
                    r#type: if visible() { "text" } else { "password" },
                    placeholder: placeholder,
                    value: value,
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    class: "icon-btn",
                    r#type: "button",
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.set(!visible()),
                    if visible() {
                        crate::Icon { icon: crate::icons::FaEyeSlash, width: 16, height: 16 }
                    } else {
                        crate::Icon { icon: crate::icons::FaEye, width: 16, height: 16 }
                    }
                }
            }
            FieldError { message: error }
        }
    }
}

/// Dropdown over a fixed list; the empty choice maps to `None`.
#[component]
pub fn ChoiceField(
    label: &'static str,
    placeholder: &'static str,
    options: Vec<&'static str>,
    selected: Option<String>,
    #[props(default)] error: Option<&'static str>,
    onchange: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        div {
            class: "field",
            span { class: "field-label", "{label}" }
            select {
                class: input_class(error.is_some()),
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    onchange.call(if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", selected: selected.is_none(), "{placeholder}" }
                for opt in options {
                    option {
                        value: opt,
                        selected: selected.as_deref() == Some(opt),
                        "{opt}"
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
