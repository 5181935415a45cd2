//! Session context and hooks for the UI.

use api::HttpAccountApi;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::notice::{NoticeSlot, NoticeToast};
use crate::platform::{make_token_store, PlatformTokenStore};
use crate::session::{self, Session};

/// Everything a view needs to talk to the account API.
#[derive(Clone)]
pub struct AccountContext {
    pub api: HttpAccountApi,
    pub session: Session<PlatformTokenStore>,
    pub config: ClientConfig,
}

/// Get the account context provided by [`SessionProvider`].
pub fn use_account() -> AccountContext {
    use_context::<AccountContext>()
}

/// Get the shared notice slot.
pub fn use_notice() -> Signal<NoticeSlot> {
    use_context::<Signal<NoticeSlot>>()
}

/// Show `message` in the shared notice slot.
pub fn show_notice(notice: &mut Signal<NoticeSlot>, message: impl Into<String>) {
    notice.write().show(message);
}

/// Provider component for the session, the API client and the notice slot.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let dismiss_after = config.notice_dismiss();

    use_context_provider(|| {
        tracing::info!("Using account API at {}", config.api.base_url);
        AccountContext {
            api: HttpAccountApi::from_config(&config),
            session: Session::new(make_token_store()),
            config: config.clone(),
        }
    });
    let notice = use_context_provider(|| Signal::new(NoticeSlot::default()));

    rsx! {
        {children}
        NoticeToast { notice, dismiss_after }
    }
}

/// Button that forgets the session token.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let account = use_account();

    let onclick = move |_| {
        session::logout(&account.session);
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: onclick,
            "{label}"
        }
    }
}
