//! # Profile editor
//!
//! Holds the committed [`ProfileRecord`] and, while the edit surface is open, an
//! independent draft. The dirty flag is recomputed by value comparison on
//! every draft change, so reverting a field clears it again. Saving sends the
//! whole draft as a replacement and adopts whatever the server returns.
//!
//! A failed save keeps the editor open with the draft intact so the user can
//! retry; only [`ProfileEditor::close`] discards a draft.

use api::{AccountApi, ApiError, ProfileField, ProfileRecord};
use store::TokenStore;

use crate::session::Session;

pub const UPDATE_FAILED: &str = "Error updating";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEditor {
    committed: ProfileRecord,
    draft: Option<ProfileRecord>,
    dirty: bool,
}

impl ProfileEditor {
    pub fn new(committed: ProfileRecord) -> Self {
        Self {
            committed,
            draft: None,
            dirty: false,
        }
    }

    pub fn committed(&self) -> &ProfileRecord {
        &self.committed
    }

    pub fn draft(&self) -> Option<&ProfileRecord> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Submit is only actionable with unsaved changes.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.dirty
    }

    /// Replace the committed record with a freshly loaded one.
    pub fn load(&mut self, record: ProfileRecord) {
        self.committed = record;
        self.draft = None;
        self.dirty = false;
    }

    /// Snapshot the committed record into a new draft.
    pub fn open(&mut self) {
        self.draft = Some(self.committed.clone());
        self.dirty = false;
    }

    /// Merge one field into the draft. Ignored while the editor is closed.
    pub fn update_field(&mut self, field: ProfileField, value: String) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        draft.set(field, value);
        self.dirty = *draft != self.committed;
    }

    /// The draft to send, if submitting is allowed.
    pub fn submission(&self) -> Option<ProfileRecord> {
        if self.can_submit() {
            self.draft.clone()
        } else {
            None
        }
    }

    /// Adopt the server's copy after a successful save and close.
    pub fn commit(&mut self, saved: ProfileRecord) {
        self.load(saved);
    }

    /// Discard the draft without saving.
    pub fn close(&mut self) {
        self.draft = None;
        self.dirty = false;
    }

    /// Fold a save result into the editor. Returns the notice to show, if any.
    pub fn apply(&mut self, outcome: SaveOutcome) -> Option<String> {
        match outcome {
            SaveOutcome::Saved(record) => {
                self.commit(record);
                None
            }
            SaveOutcome::Failed(msg) => Some(msg),
            SaveOutcome::SessionExpired { notice } => {
                self.close();
                Some(notice)
            }
        }
    }
}

/// Result of sending a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(ProfileRecord),
    /// Save refused or not delivered; the draft is kept.
    Failed(String),
    /// The token is gone or was refused; the view should leave for login.
    SessionExpired { notice: String },
}

/// Send `draft` as a full replacement of the profile.
pub async fn save_profile<A: AccountApi, S: TokenStore>(
    api: &A,
    session: &Session<S>,
    draft: &ProfileRecord,
) -> SaveOutcome {
    let Some(token) = session.token() else {
        return SaveOutcome::SessionExpired {
            notice: UPDATE_FAILED.to_string(),
        };
    };

    match api.update_account(&token, draft).await {
        Ok(saved) => {
            tracing::info!("Profile updated");
            SaveOutcome::Saved(saved)
        }
        Err(ApiError::Transport(e)) => {
            tracing::error!("Error updating account info: {}", e);
            SaveOutcome::Failed(UPDATE_FAILED.to_string())
        }
        Err(e @ ApiError::Unauthorized { .. }) => {
            session.clear();
            SaveOutcome::SessionExpired {
                notice: e.server_message().unwrap_or(UPDATE_FAILED).to_string(),
            }
        }
        Err(e) => {
            tracing::warn!("Profile update refused: {}", e);
            SaveOutcome::Failed(UPDATE_FAILED.to_string())
        }
    }
}
