//! Error taxonomy for calls to the account API.

/// Failure of a single API call.
///
/// Callers reduce these to user-facing notices: [`ApiError::Transport`] only ever
/// becomes a generic message, the other variants may carry the server's own
/// text via [`ApiError::server_message`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connection refused,
    /// timeout, undecodable body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server refused the bearer token.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16, msg: Option<String> },

    /// Any other non-ok status.
    #[error("server rejected the request ({status})")]
    Rejected { status: u16, msg: Option<String> },

    /// `/login` answered without a token.
    #[error("login response carried no token")]
    MissingToken { msg: Option<String> },
}

impl ApiError {
    /// Message the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { msg, .. }
            | ApiError::Rejected { msg, .. }
            | ApiError::MissingToken { msg } => msg.as_deref().filter(|m| !m.is_empty()),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub(crate) fn from_status(status: u16, msg: Option<String>) -> Self {
        if status == 401 || status == 403 {
            ApiError::Unauthorized { status, msg }
        } else {
            ApiError::Rejected { status, msg }
        }
    }
}
