//! Login screen with email/password form.

use dioxus::prelude::*;

use super::fields::{PasswordField, TextField};
use crate::theme::STYLES;
use crate::use_session;
use crate::validation::{Field, LoginForm, ValidationErrors};

/// Login page component.
#[component]
pub fn LoginView(on_signup: EventHandler<()>, on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let state = session.state();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(ValidationErrors::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            let current = form();
            let found = current.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }
            if session
                .login(current.email.trim(), &current.password)
                .await
                .is_ok()
            {
                on_authenticated.call(());
            }
        });
    };

    let field_errors = errors();

    rsx! {
        style { {STYLES} }
        div {
            class: "screen",

            h1 { class: "screen-title", "Welcome back" }
            p { class: "screen-subtitle", "Sign in to continue" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = state.error.clone() {
                    div { class: "form-alert", "{err}" }
                }

                TextField {
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: form.read().email.clone(),
                    error: field_errors.get(Field::Email),
                    oninput: move |v: String| form.write().email = v,
                }

                PasswordField {
                    label: "Password",
                    placeholder: "Enter your password",
                    value: form.read().password.clone(),
                    error: field_errors.get(Field::Password),
                    oninput: move |v: String| form.write().password = v,
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "screen-footer",
                "New here? "
                button {
                    class: "link",
                    r#type: "button",
                    onclick: move |_| on_signup.call(()),
                    "Create an account"
                }
            }
        }
    }
}
