use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;

const DEFAULT_KEYRING_SERVICE: &str = "crumb-cli";
const KEYRING_USER: &str = "api-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "CRUMB_SESSION__TOKEN";

/// Which storage tier a token was resolved from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Holds the single session token for one backend identity.
///
/// Created on login, read on every outgoing request, destroyed on 401 or
/// explicit logout. Construct with [`SessionStore::new`] for tests (pointing
/// the file tier at a temp dir) or [`SessionStore::from_home`] for real use.
#[derive(Debug, Clone)]
pub struct SessionStore {
    service: String,
    credentials_path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(service: impl Into<String>, credentials_path: PathBuf) -> Self {
        Self {
            service: service.into(),
            credentials_path,
        }
    }

    /// Store rooted at `~/.crumb/credentials` with the default keyring service.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TokenStoreError` if the home directory cannot be
    /// resolved.
    pub fn from_home() -> Result<Self, SessionError> {
        let path = dirs::home_dir()
            .map(|h| h.join(".crumb").join(CREDENTIALS_FILE_NAME))
            .ok_or_else(|| {
                SessionError::TokenStoreError(
                    "home directory not found; cannot store credentials".into(),
                )
            })?;
        Ok(Self::new(DEFAULT_KEYRING_SERVICE, path))
    }

    /// Store a token. Tries the OS keyring first, falls back to the file tier.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TokenStoreError` if both keyring and file storage
    /// fail.
    pub fn store(&self, token: &str) -> Result<(), SessionError> {
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.store_file(token)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.store_file(token)
            }
        }
    }

    /// Load the session token, if any. Priority: keyring → env → file.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        // 1. Keyring
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        // 2. Environment variable
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Some(token);
            }
        }

        // 3. File fallback
        self.load_file()
    }

    /// Delete the stored token from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TokenStoreError` if the credentials file cannot
    /// be removed.
    pub fn delete(&self) -> Result<(), SessionError> {
        // Keyring entry may not exist; ignore errors
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER) {
            let _ = entry.delete_credential();
        }

        if self.credentials_path.exists() {
            fs::remove_file(&self.credentials_path).map_err(|e| {
                SessionError::TokenStoreError(format!(
                    "failed to delete {}: {e}",
                    self.credentials_path.display()
                ))
            })?;
        }

        Ok(())
    }

    /// Detect which tier the current token came from (for status display).
    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && entry.get_password().is_ok_and(|t| !t.is_empty())
        {
            return Some(TokenSource::Keyring);
        }
        if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.is_empty()) {
            return Some(TokenSource::Env);
        }
        if self.load_file().is_some() {
            return Some(TokenSource::File);
        }
        None
    }

    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    // --- Private file helpers ---

    fn store_file(&self, token: &str) -> Result<(), SessionError> {
        let path = &self.credentials_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, token).map_err(|e| {
            SessionError::TokenStoreError(format!("write {}: {e}", path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::TokenStoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        fs::read_to_string(&self.credentials_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
