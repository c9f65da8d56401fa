//! Three-step signup screen.

use dioxus::prelude::*;

use super::fields::{ChoiceField, PasswordField, TextField};
use crate::signup_flow::{Advance, SignupStep, SignupWizard};
use crate::theme::STYLES;
use crate::use_session;
use crate::validation::{Field, Gender, DEFAULT_COUNTRY, DISTRICTS, STATES};

fn dot_class(active: bool) -> &'static str {
    if active {
        "step-dot step-dot--active"
    } else {
        "step-dot"
    }
}

fn bar_class(done: bool) -> &'static str {
    if done {
        "step-bar step-bar--done"
    } else {
        "step-bar"
    }
}

#[component]
fn StepIndicator(mut wizard: Signal<SignupWizard>) -> Element {
    let current = wizard.read().step();
    let (first_done, second_done) = wizard.read().completed_segments();

    rsx! {
        div {
            class: "steps",
            for step in SignupStep::ALL {
                button {
                    key: "{step.number()}",
                    class: dot_class(step <= current),
                    r#type: "button",
                    title: step.title(),
                    onclick: move |_| {
                        wizard.write().go_to(step);
                    },
                    {step.number().to_string()}
                }
                if step == SignupStep::Personal {
                    div { class: bar_class(first_done) }
                }
                if step == SignupStep::Address {
                    div { class: bar_class(second_done) }
                }
            }
        }
    }
}

#[component]
fn PersonalStep(mut wizard: Signal<SignupWizard>) -> Element {
    let snapshot = wizard.read().clone();
    let errors = snapshot.errors();

    rsx! {
        TextField {
            label: "Full name",
            placeholder: "Enter your name",
            value: snapshot.form.name.clone(),
            error: errors.get(Field::Name),
            oninput: move |v: String| wizard.write().edit(|f| f.name = v),
        }
        TextField {
            label: "Email",
            input_type: "email",
            placeholder: "you@example.com",
            value: snapshot.form.email.clone(),
            error: errors.get(Field::Email),
            oninput: move |v: String| wizard.write().edit(|f| f.email = v),
        }
        TextField {
            label: "Mobile number",
            input_type: "tel",
            placeholder: "10-digit mobile number",
            value: snapshot.form.mobile.clone(),
            error: errors.get(Field::Mobile),
            oninput: move |v: String| wizard.write().edit(|f| f.mobile = v),
        }
        ChoiceField {
            label: "Gender",
            placeholder: "Select gender",
            options: Gender::ALL.iter().map(|g| g.label()).collect::<Vec<_>>(),
            selected: snapshot.form.gender.map(|g| g.label().to_string()),
            error: errors.get(Field::Gender),
            onchange: move |v: Option<String>| {
                wizard.write().edit(|f| f.gender = v.as_deref().and_then(Gender::from_label));
            },
        }
    }
}

#[component]
fn AddressStep(mut wizard: Signal<SignupWizard>) -> Element {
    let snapshot = wizard.read().clone();
    let errors = snapshot.errors();

    rsx! {
        TextField {
            label: "Address",
            placeholder: "House no., street, locality",
            value: snapshot.form.address.clone(),
            error: errors.get(Field::Address),
            oninput: move |v: String| wizard.write().edit(|f| f.address = v),
        }
        div {
            class: "field",
            span { class: "field-label", "Country" }
            input {
                class: "field-input",
                value: DEFAULT_COUNTRY,
                disabled: true,
            }
        }
        ChoiceField {
            label: "State",
            placeholder: "Select state",
            options: STATES.to_vec(),
            selected: snapshot.form.state.clone(),
            error: errors.get(Field::State),
            onchange: move |v: Option<String>| wizard.write().edit(|f| f.state = v),
        }
        ChoiceField {
            label: "District",
            placeholder: "Select district",
            options: DISTRICTS.to_vec(),
            selected: snapshot.form.district.clone(),
            error: errors.get(Field::District),
            onchange: move |v: Option<String>| wizard.write().edit(|f| f.district = v),
        }
        TextField {
            label: "Pincode (optional)",
            input_type: "tel",
            placeholder: "6-digit pincode",
            value: snapshot.form.pincode.clone(),
            error: errors.get(Field::Pincode),
            oninput: move |v: String| wizard.write().edit(|f| f.pincode = v),
        }
    }
}

#[component]
fn CredentialsStep(mut wizard: Signal<SignupWizard>) -> Element {
    let snapshot = wizard.read().clone();
    let errors = snapshot.errors();

    rsx! {
        PasswordField {
            label: "Password",
            placeholder: "At least 8 characters",
            value: snapshot.form.password.clone(),
            error: errors.get(Field::Password),
            oninput: move |v: String| wizard.write().edit(|f| f.password = v),
        }
        PasswordField {
            label: "Confirm password",
            placeholder: "Re-enter your password",
            value: snapshot.form.confirm_password.clone(),
            error: errors.get(Field::ConfirmPassword),
            oninput: move |v: String| wizard.write().edit(|f| f.confirm_password = v),
        }
    }
}

/// Signup page component. `on_back` fires when the user backs out of the
/// first step.
#[component]
pub fn SignupView(on_back: EventHandler<()>, on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let state = session.state();
    let mut wizard = use_signal(SignupWizard::default);
    let step = wizard.read().step();

    let handle_back = move |_| {
        if !wizard.write().back() {
            on_back.call(());
        }
    };

    let handle_next = move |_| {
        if wizard.write().next() != Advance::Submit {
            return;
        }
        let session = session.clone();
        let form = wizard.read().form.clone();
        spawn(async move {
            if session
                .signup(form.name.trim(), form.email.trim(), &form.password)
                .await
                .is_ok()
            {
                on_authenticated.call(());
            }
        });
    };

    rsx! {
        style { {STYLES} }
        div {
            class: "screen",

            h1 { class: "screen-title", "Create account" }
            p { class: "screen-subtitle", {step.title()} }

            StepIndicator { wizard }

            div {
                class: "form",

                if let Some(err) = state.error.clone() {
                    div { class: "form-alert", "{err}" }
                }

                match step {
                    SignupStep::Personal => rsx! { PersonalStep { wizard } },
                    SignupStep::Address => rsx! { AddressStep { wizard } },
                    SignupStep::Credentials => rsx! { CredentialsStep { wizard } },
                }

                div {
                    class: "btn-row",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: state.loading,
                        onclick: handle_back,
                        "Back"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: state.loading,
                        onclick: handle_next,
                        if step == SignupStep::Credentials {
                            if state.loading { "Creating account..." } else { "Sign up" }
                        } else {
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
