//! Scripted [`AccountApi`] for flow tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use api::{AccountApi, ApiError, Credentials, ProfileRecord, RegistrationPayload};

/// One canned answer, consumed by the next call.
#[derive(Debug, Clone)]
pub enum Reply {
    Token(&'static str),
    Ok,
    Profile(ProfileRecord),
    Status(u16, Option<&'static str>),
    Transport,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Calls made so far, as `"<method> <key argument>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: String) -> Reply {
        self.calls.lock().unwrap().push(call.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| panic!("unexpected call: {call}"))
    }
}

async fn transport_error() -> ApiError {
    // An empty host fails inside reqwest before any socket is opened.
    let err = reqwest::Client::new()
        .get("http://")
        .send()
        .await
        .unwrap_err();
    ApiError::Transport(err)
}

async fn failure(reply: Reply) -> ApiError {
    match reply {
        Reply::Status(status @ (401 | 403), msg) => ApiError::Unauthorized {
            status,
            msg: msg.map(str::to_string),
        },
        Reply::Status(status, msg) => ApiError::Rejected {
            status,
            msg: msg.map(str::to_string),
        },
        Reply::Transport => transport_error().await,
        other => panic!("reply {other:?} does not fit this call"),
    }
}

impl AccountApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        match self.answer(format!("login {}", credentials.email)).await {
            Reply::Token(token) => Ok(token.to_string()),
            other => Err(failure(other).await),
        }
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
        match self.answer(format!("register {}", payload.email)).await {
            Reply::Ok => Ok(()),
            other => Err(failure(other).await),
        }
    }

    async fn fetch_account(&self, token: &str) -> Result<ProfileRecord, ApiError> {
        match self.answer(format!("fetch_account {token}")).await {
            Reply::Profile(profile) => Ok(profile),
            other => Err(failure(other).await),
        }
    }

    async fn update_account(
        &self,
        token: &str,
        profile: &ProfileRecord,
    ) -> Result<ProfileRecord, ApiError> {
        match self
            .answer(format!("update_account {token} {}", profile.name))
            .await
        {
            Reply::Profile(profile) => Ok(profile),
            other => Err(failure(other).await),
        }
    }
}
