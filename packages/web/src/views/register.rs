//! Registration page view with the full sign-up form.

use api::Gender;
use dioxus::prelude::*;
use ui::validation::PASSWORD_HINT;
use ui::{register, show_notice, use_account, use_notice, RegisterOutcome, RegistrationForm, View};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let account = use_account();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(|| Option::<Gender>::None);
    let mut location = use_signal(String::new);
    let mut show_hint = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let account = account.clone();
        let form = RegistrationForm {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            age: age(),
            gender: gender(),
            location: location(),
        };
        spawn(async move {
            loading.set(true);
            let outcome = register(&account.api, &form).await;
            loading.set(false);
            show_notice(&mut notice, outcome.notice());
            if outcome == RegisterOutcome::Registered {
                nav.push(Route::from(View::Login));
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h2 { class: "auth-title", "Register" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                input {
                    class: "auth-input",
                    id: "name",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    id: "email",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    id: "age",
                    r#type: "number",
                    placeholder: "Age",
                    value: age(),
                    oninput: move |evt: FormEvent| age.set(evt.value()),
                }

                select {
                    class: "auth-input",
                    id: "gender",
                    onchange: move |evt: FormEvent| gender.set(Gender::from_label(&evt.value())),
                    option { value: "", selected: gender().is_none(), "Select" }
                    for g in Gender::ALL {
                        option {
                            value: g.label(),
                            selected: gender() == Some(g),
                            "{g.label()}"
                        }
                    }
                }

                input {
                    class: "auth-input",
                    id: "location",
                    r#type: "text",
                    placeholder: "New York, USA",
                    value: location(),
                    oninput: move |evt: FormEvent| location.set(evt.value()),
                }

                div {
                    class: "auth-password",
                    input {
                        class: "auth-input",
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                        onfocus: move |_| show_hint.set(true),
                        onblur: move |_| show_hint.set(false),
                    }
                }
                if show_hint() {
                    p { class: "auth-hint", "{PASSWORD_HINT}" }
                }

                input {
                    class: "auth-input",
                    id: "confirmPassword",
                    r#type: "password",
                    placeholder: "Confirm Password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
