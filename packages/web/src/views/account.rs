//! Account dashboard: profile display, inline editing and logout.

use api::{Gender, ProfileField};
use dioxus::core::Task;
use dioxus::prelude::*;
use ui::{
    load_session, save_profile, show_notice, use_account, use_notice, LogoutButton,
    ProfileEditor, SaveOutcome, SessionLoad, TaskSlot,
};

use crate::Route;

#[component]
pub fn Account() -> Element {
    let account = use_account();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut editor = use_signal(ProfileEditor::default);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Load on mount. The delayed redirect runs inside the same task, so
    // cancelling it on teardown also cancels a pending redirect.
    let load_task = use_hook({
        let account = account.clone();
        move || {
            spawn(async move {
                let load = load_session(&account.api, &account.session).await;
                let redirect = load.redirect(account.config.redirect_delay());
                match load {
                    SessionLoad::Loaded(profile) => {
                        editor.write().load(profile);
                        loaded.set(true);
                    }
                    SessionLoad::Rejected { notice: Some(msg) } => show_notice(&mut notice, msg),
                    SessionLoad::NoToken
                    | SessionLoad::Rejected { notice: None }
                    | SessionLoad::Unreachable => {}
                }
                if let Some((view, delay)) = redirect {
                    if !delay.is_zero() {
                        ui::sleep(delay).await;
                    }
                    nav.replace(Route::from(view));
                }
            })
        }
    });

    let mut save_task = use_signal(TaskSlot::<Task>::default);

    use_drop(move || {
        load_task.cancel();
        save_task.write().cancel();
    });

    let handle_submit = {
        let account = account.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(draft) = editor.read().submission() else {
                return;
            };
            let account = account.clone();
            let task = spawn(async move {
                saving.set(true);
                let outcome = save_profile(&account.api, &account.session, &draft).await;
                saving.set(false);
                let expired = matches!(outcome, SaveOutcome::SessionExpired { .. });
                if let Some(msg) = editor.write().apply(outcome) {
                    show_notice(&mut notice, msg);
                }
                if expired {
                    ui::sleep(account.config.redirect_delay()).await;
                    nav.replace(Route::Login {});
                }
            });
            save_task.write().replace(task);
        }
    };

    let state = editor.read().clone();
    let profile = state.committed().clone();
    let links = profile.social_links();

    rsx! {
        div {
            class: "account-container",

            header {
                class: "account-header",
                h1 { "User Dashboard" }
                LogoutButton {
                    class: "account-logout",
                    on_logged_out: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            }

            if loaded() {
                section {
                    class: "account-card",
                    h2 { class: "account-name", "{profile.name}" }
                    p { class: "account-meta", "{profile.age} · {profile.gender}" }
                    if !profile.location.is_empty() {
                        p { class: "account-location", "{profile.location}" }
                    }
                    p { class: "account-bio", "{profile.bio}" }
                    div {
                        class: "account-links",
                        for link in links {
                            a {
                                key: "{link.site}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.site}: {link.handle}"
                            }
                        }
                    }
                    button {
                        class: "account-edit",
                        r#type: "button",
                        onclick: move |_| editor.write().open(),
                        "Edit Profile"
                    }
                }
            } else {
                p { class: "account-loading", "Loading..." }
            }

            if let Some(draft) = state.draft().cloned() {
                div {
                    class: "account-editor",
                    role: "dialog",
                    form {
                        onsubmit: handle_submit,
                        class: "account-editor__form",
                        h2 { "Edit Profile" }

                        for field in ProfileField::ALL {
                            label {
                                key: "{field.label()}",
                                class: "account-editor__field",
                                span { "{field.label()}" }
                                FieldInput {
                                    field,
                                    value: draft.get(field).to_string(),
                                    onchange: move |value: String| editor.write().update_field(field, value),
                                }
                            }
                        }

                        div {
                            class: "account-editor__actions",
                            button {
                                r#type: "button",
                                onclick: move |_| editor.write().close(),
                                "Close"
                            }
                            button {
                                r#type: "submit",
                                disabled: !state.can_submit() || saving(),
                                if saving() { "Saving..." } else { "Save Changes" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Input control for one profile field.
#[component]
fn FieldInput(field: ProfileField, value: String, onchange: EventHandler<String>) -> Element {
    match field {
        ProfileField::Bio => rsx! {
            textarea {
                name: "bio",
                rows: 3,
                value: "{value}",
                oninput: move |evt: FormEvent| onchange.call(evt.value()),
            }
        },
        ProfileField::Gender => rsx! {
            select {
                name: "gender",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                if Gender::from_label(&value).is_none() {
                    option { value: "{value}", selected: true, "{value}" }
                }
                for g in Gender::ALL {
                    option {
                        value: g.label(),
                        selected: value == g.label(),
                        "{g.label()}"
                    }
                }
            }
        },
        ProfileField::Age => rsx! {
            input {
                name: "age",
                r#type: "number",
                value: "{value}",
                oninput: move |evt: FormEvent| onchange.call(evt.value()),
            }
        },
        _ => rsx! {
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt: FormEvent| onchange.call(evt.value()),
            }
        },
    }
}
