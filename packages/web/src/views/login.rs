//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{login, show_notice, use_account, use_notice, LoginOutcome, View};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let account = use_account();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let account = account.clone();
        spawn(async move {
            loading.set(true);
            let outcome = login(&account.api, &account.session, &email(), &password()).await;
            loading.set(false);
            match outcome {
                LoginOutcome::LoggedIn => {
                    notice.write().dismiss();
                    nav.push(Route::from(View::Account));
                }
                LoginOutcome::Failed(msg) => show_notice(&mut notice, msg),
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h2 { class: "auth-title", "Login" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                input {
                    class: "auth-input",
                    id: "email",
                    r#type: "text",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                div {
                    class: "auth-password",
                    input {
                        class: "auth-input",
                        id: "password",
                        r#type: if show_password() { "text" } else { "password" },
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "auth-password__toggle",
                        r#type: "button",
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "Hide" } else { "Show" }
                    }
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
