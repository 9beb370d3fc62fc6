use std::fs;
use std::path::{Path, PathBuf};

use samaj_core::identity::AuthIdentity;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const SESSION_FILE_NAME: &str = "session.json";
const TOKEN_ENV: &str = "SAMAJ_AUTH__TOKEN";

/// Where the login token and the signed-in identity live between commands.
///
/// The token goes to the OS keychain when available and to
/// `~/.samaj/credentials` (0600) otherwise. The identity (role and scope,
/// not secret) always goes to `~/.samaj/session.json`.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    dir: PathBuf,
    use_keyring: bool,
}

impl TokenStore {
    /// Store rooted at `~/.samaj`, using the keychain under `service`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the home directory cannot be
    /// resolved.
    pub fn new(service: impl Into<String>) -> Result<Self, AuthError> {
        let dir = dirs::home_dir()
            .map(|h| h.join(".samaj"))
            .ok_or_else(|| {
                AuthError::TokenStoreError(
                    "home directory not found: cannot store credentials".into(),
                )
            })?;
        Ok(Self {
            service: service.into(),
            dir,
            use_keyring: true,
        })
    }

    /// File-only store rooted at `dir`; never touches the keychain.
    #[must_use]
    pub fn file_only(dir: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            dir: dir.into(),
            use_keyring: false,
        }
    }

    #[must_use]
    pub fn credentials_path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE_NAME)
    }

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        if !self.use_keyring {
            return None;
        }
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    /// Store a token in the OS keychain. Falls back to file if the keyring is
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keyring and file storage
    /// fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        self.write_private(&self.credentials_path(), token)
    }

    /// Load a token. Priority: keyring → `SAMAJ_AUTH__TOKEN` env → file.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if let Some(entry) = self.keyring_entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(token);
        }

        self.load_file()
    }

    /// Detect which tier the current token came from (for status display).
    #[must_use]
    pub fn detect_token_source(&self) -> Option<String> {
        if self
            .keyring_entry()
            .is_some_and(|entry| entry.get_password().is_ok_and(|t| !t.is_empty()))
        {
            return Some("keyring".into());
        }
        if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.is_empty()) {
            return Some("env".into());
        }
        if self.load_file().is_some() {
            return Some("file".into());
        }
        None
    }

    /// Remember the signed-in identity alongside the token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the session file cannot be
    /// written.
    pub fn store_identity(&self, identity: &AuthIdentity) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(identity)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;
        self.write_private(&self.session_path(), &json)
    }

    #[must_use]
    pub fn load_identity(&self) -> Option<AuthIdentity> {
        let raw = fs::read_to_string(self.session_path()).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable session file");
                None
            }
        }
    }

    /// Delete stored credentials from keyring and files.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if a file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        // Missing keyring entries are fine.
        if let Some(entry) = self.keyring_entry() {
            let _ = entry.delete_credential();
        }

        for path in [self.credentials_path(), self.session_path()] {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        fs::read_to_string(self.credentials_path())
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn write_private(&self, path: &Path, contents: &str) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AuthError::TokenStoreError(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        fs::write(path, contents)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }
}
