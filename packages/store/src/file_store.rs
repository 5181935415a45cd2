//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a single file named
//! [`TOKEN_KEY`](crate::TOKEN_KEY) under a base directory. It is used on native
//! builds so that a session survives app restarts the way local storage does in
//! the browser.
//!
//! | Platform | Default base |
//! |----------|--------------|
//! | macOS | `~/Library/Application Support/account-client/` |
//! | Linux | `~/.local/share/account-client/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\account-client\` |

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{StoreError, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory.
    pub fn default_location() -> Self {
        Self::new(crate::app_data_dir())
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

/// Write `contents` to `path`, readable by the owner only on unix.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        // `mode` only applies on creation; tighten a file left by an older build.
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(contents.as_bytes())
    }
    #[cfg(not(unix))]
    {
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        write_private(&self.token_path(), token)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_token_survives_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        FileTokenStore::new(dir.path().to_path_buf())
            .save("tok-123")
            .unwrap();

        let reopened = FileTokenStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.load().unwrap(), Some("tok-123".to_string()));
        assert!(dir.path().join("token").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(dir.path().to_path_buf());
        store.save("tok-secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap(), Some("tok-secret".to_string()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().to_path_buf());
        store.save("tok").unwrap();

        store.remove().unwrap();
        store.remove().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
