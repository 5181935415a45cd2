//! # Session and authentication flows
//!
//! [`Session`] wraps the persisted bearer token: its presence is the only
//! authorization signal the client has, and nothing about expiry is tracked
//! locally. The flows below take the session and an [`AccountApi`] explicitly
//! and return an outcome; the views decide what to render and where to
//! navigate from it.
//!
//! | Flow | Network | Token effect |
//! |------|---------|--------------|
//! | [`login`] | `POST /login` unless a field is empty | stored on success |
//! | [`register`] | `POST /register` only after validation passes | none |
//! | [`load_session`] | `GET /account` only when a token exists | cleared on 401/403 |
//! | [`logout`] | none | cleared |
//!
//! No flow retries and none can fail the app: transport errors are logged and
//! reduced to a generic notice at worst.

use std::time::Duration;

use api::{AccountApi, ApiError, Credentials, ProfileRecord};
use store::TokenStore;

use crate::validation::{RegistrationForm, Validation, ValidationError};

pub const MISSING_CREDENTIALS: &str = "Please provide credentials.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const LOGIN_FAILED: &str = "An error occurred. Please try again.";
pub const REGISTRATION_FAILED: &str = "An error occurred. Please try again later.";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful";

/// The client's top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Unauthenticated entry point.
    Login,
    Register,
    /// Profile dashboard; requires a token.
    Account,
}

/// Handle on the persisted session token.
///
/// Storage failures are logged and read as "no token": a broken store
/// degrades to being logged out, never to a crash.
#[derive(Clone, Debug)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.store.save(token) {
            tracing::error!("Failed to persist session token: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove() {
            tracing::error!("Failed to clear session token: {}", e);
        }
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; go to [`View::Account`].
    LoggedIn,
    /// Stay on the login view and show the notice.
    Failed(String),
}

/// Exchange credentials for a token and persist it.
pub async fn login<A: AccountApi, S: TokenStore>(
    api: &A,
    session: &Session<S>,
    email: &str,
    password: &str,
) -> LoginOutcome {
    if email.is_empty() || password.is_empty() {
        return LoginOutcome::Failed(MISSING_CREDENTIALS.to_string());
    }

    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    match api.login(&credentials).await {
        Ok(token) => {
            session.set_token(&token);
            tracing::info!("Logged in");
            LoginOutcome::LoggedIn
        }
        Err(ApiError::Transport(e)) => {
            tracing::error!("Error during login: {}", e);
            LoginOutcome::Failed(LOGIN_FAILED.to_string())
        }
        Err(e) => {
            tracing::debug!("Login refused: {}", e);
            LoginOutcome::Failed(INVALID_CREDENTIALS.to_string())
        }
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created; go to [`View::Login`]. No token is set.
    Registered,
    /// A local rule failed; nothing was sent.
    Invalid(ValidationError),
    /// The server refused or could not be reached.
    Failed(String),
}

impl RegisterOutcome {
    /// Text for the notice slot.
    pub fn notice(&self) -> String {
        match self {
            RegisterOutcome::Registered => REGISTRATION_SUCCEEDED.to_string(),
            RegisterOutcome::Invalid(e) => e.to_string(),
            RegisterOutcome::Failed(msg) => msg.clone(),
        }
    }
}

/// Validate the form and, if it passes, submit it.
pub async fn register<A: AccountApi>(api: &A, form: &RegistrationForm) -> RegisterOutcome {
    let payload = match form.validate() {
        Validation::Valid(payload) => payload,
        Validation::Invalid(e) => return RegisterOutcome::Invalid(e),
    };

    match api.register(&payload).await {
        Ok(()) => {
            tracing::info!("Registration successful");
            RegisterOutcome::Registered
        }
        Err(ApiError::Transport(e)) => {
            tracing::error!("Error during registration: {}", e);
            RegisterOutcome::Failed(REGISTRATION_FAILED.to_string())
        }
        Err(e) => RegisterOutcome::Failed(
            e.server_message()
                .unwrap_or(REGISTRATION_FAILED)
                .to_string(),
        ),
    }
}

/// Result of entering the account view.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLoad {
    /// No token stored; nothing was requested.
    NoToken,
    Loaded(ProfileRecord),
    /// The server refused; show its message if any, then leave.
    Rejected { notice: Option<String> },
    /// Transport failure, already logged. The view stays as it is.
    Unreachable,
}

impl SessionLoad {
    /// Where to navigate, and after how long, for this outcome.
    pub fn redirect(&self, delay: Duration) -> Option<(View, Duration)> {
        match self {
            SessionLoad::NoToken => Some((View::Login, Duration::ZERO)),
            SessionLoad::Rejected { .. } => Some((View::Login, delay)),
            SessionLoad::Loaded(_) | SessionLoad::Unreachable => None,
        }
    }
}

/// Load the profile for the stored token.
pub async fn load_session<A: AccountApi, S: TokenStore>(
    api: &A,
    session: &Session<S>,
) -> SessionLoad {
    let Some(token) = session.token() else {
        return SessionLoad::NoToken;
    };

    match api.fetch_account(&token).await {
        Ok(profile) => SessionLoad::Loaded(profile),
        Err(ApiError::Transport(e)) => {
            tracing::error!("Error fetching account info: {}", e);
            SessionLoad::Unreachable
        }
        Err(e) => {
            if matches!(e, ApiError::Unauthorized { .. }) {
                session.clear();
            }
            tracing::warn!("Account request refused: {}", e);
            SessionLoad::Rejected {
                notice: e.server_message().map(str::to_string),
            }
        }
    }
}

/// Forget the token. Purely local; the server is not told.
pub fn logout<S: TokenStore>(session: &Session<S>) -> View {
    session.clear();
    View::Login
}
