//! Wire models exchanged with the account API.

mod auth;
mod profile;

pub use auth::{Credentials, Gender, LoginResponse, RegistrationPayload, ServerMessage};
pub use profile::{ProfileField, ProfileRecord, SocialLink};
