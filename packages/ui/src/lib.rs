//! This crate contains the shared client logic and UI for the workspace.
//!
//! The flows ([`session`], [`profile`], [`validation`]) are plain Rust and are
//! tested without a renderer; [`SessionProvider`] and the components wire them
//! into Dioxus.

pub mod notice;
pub mod profile;
pub mod session;
pub mod validation;

mod platform;
pub use platform::{make_token_store, PlatformTokenStore};

mod timer;
pub use timer::{sleep, Cancel, TaskSlot};

mod auth;
pub use auth::{show_notice, use_account, use_notice, AccountContext, LogoutButton, SessionProvider};

pub use notice::{NoticeSlot, NoticeToast};
pub use profile::{save_profile, ProfileEditor, SaveOutcome};
pub use session::{
    load_session, login, logout, register, LoginOutcome, RegisterOutcome, Session, SessionLoad,
    View,
};
pub use validation::{RegistrationForm, Validation, ValidationError};

#[cfg(test)]
mod testing;
