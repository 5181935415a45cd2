use dioxus::prelude::*;

use store::ClientConfig;
use ui::{SessionProvider, View};
use views::{Account, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/account")]
    Account {},
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Login => Route::Login {},
            View::Register => Route::Register {},
            View::Account => Route::Account {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Build-time config, overridden on native by the config file if present.
fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        ClientConfig::load_or(&ClientConfig::default_path(), ClientConfig::from_build_env())
    }
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::from_build_env()
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
