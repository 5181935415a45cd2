//! # API crate — typed client for the remote account API
//!
//! The account service is an external collaborator reachable only over HTTP.
//! This crate owns the whole contract with it:
//!
//! | Method | Path | Auth | Call |
//! |--------|------|------|------|
//! | `POST` | `/login` | none | [`AccountApi::login`] |
//! | `POST` | `/register` | none | [`AccountApi::register`] |
//! | `GET` | `/account` | bearer | [`AccountApi::fetch_account`] |
//! | `POST` | `/update` | bearer | [`AccountApi::update_account`] |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | JSON bodies: credentials, registration payload, profile record, server messages |
//! | `error` | [`ApiError`]: transport vs. server-rejected failures |
//! | `client` | [`HttpAccountApi`], the `reqwest` implementation |
//!
//! The UI flows are written against the [`AccountApi`] trait so they can be
//! driven by a scripted fake in tests.

mod client;
mod error;
pub mod models;

pub use client::HttpAccountApi;
pub use error::ApiError;
pub use models::{
    Credentials, Gender, LoginResponse, ProfileField, ProfileRecord, RegistrationPayload,
    ServerMessage, SocialLink,
};

/// The four calls the client makes against the account API.
///
/// Futures are not required to be `Send`: on WASM they run on the browser's
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait AccountApi: Clone + 'static {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// Create an account. Does not log in.
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), ApiError>;

    /// Load the profile of the token's owner.
    async fn fetch_account(&self, token: &str) -> Result<ProfileRecord, ApiError>;

    /// Replace the whole profile; returns the server's normalised copy.
    async fn update_account(
        &self,
        token: &str,
        profile: &ProfileRecord,
    ) -> Result<ProfileRecord, ApiError>;
}
