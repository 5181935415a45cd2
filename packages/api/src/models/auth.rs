//! # Authentication payloads
//!
//! Request and response bodies for the two unauthenticated endpoints:
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST /login` | [`Credentials`] | [`LoginResponse`] (`{token}` or `{msg}`) |
//! | `POST /register` | [`RegistrationPayload`] | body ignored on success, [`ServerMessage`] on failure |

use serde::{Deserialize, Serialize};

/// Email + password pair sent to `/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a `/login` response. The token is absent when the login failed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Error body the API sends with a non-ok status.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ServerMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Gender options offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "LGBTQ+")]
    Lgbtq,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Lgbtq];

    /// Wire and display label.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Lgbtq => "LGBTQ+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// Validated registration body sent to `/register`.
///
/// Only built by the registration validator; `gender` serializes as an empty
/// string when the user left the selector on its placeholder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u8,
    #[serde(serialize_with = "serialize_gender")]
    pub gender: Option<Gender>,
    pub location: String,
    pub bio: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
}

fn serialize_gender<S: serde::Serializer>(
    gender: &Option<Gender>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(gender.map(Gender::label).unwrap_or(""))
}
