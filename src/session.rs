//! Session State
//!
//! Holds the bearer credential issued by the backend. The credential lives in a
//! single file (the `token` file under the polltui config directory) so that it
//! survives restarts and is shared by every running instance for the same user.
//!
//! The authenticated flag is published on a `watch` channel. Changes made by
//! another instance are picked up through [`Session::reload`], which the
//! credential watcher in `services::session_watch` calls on file events.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::watch;

/// File name of the persisted credential
pub const CREDENTIAL_FILE: &str = "token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write credential to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to remove credential at {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("refusing to store an empty credential")]
    EmptyCredential,
}

struct SessionInner {
    path: PathBuf,
    credential: RwLock<Option<String>>,
    authenticated_tx: watch::Sender<bool>,
}

/// Shared session context, cheap to clone
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.inner.path)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    /// Open the session backed by `path`, loading any credential already stored there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let credential = read_credential(&path);
        if credential.is_some() {
            tracing::debug!(path = %path.display(), "loaded stored credential");
        }
        let (authenticated_tx, _) = watch::channel(credential.is_some());

        Self {
            inner: Arc::new(SessionInner {
                path,
                credential: RwLock::new(credential),
                authenticated_tx,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// True iff a credential is present
    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    /// Current credential, if any
    pub fn credential(&self) -> Option<String> {
        self.inner
            .credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribe to changes of the authenticated flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.authenticated_tx.subscribe()
    }

    /// Persist a freshly issued credential and mark the session authenticated
    pub fn on_login(&self, credential: &str) -> Result<(), SessionError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }

        write_credential(&self.inner.path, credential)?;

        self.set_credential(Some(credential.to_string()));
        tracing::info!("session authenticated");
        Ok(())
    }

    /// Remove the stored credential and mark the session unauthenticated
    pub fn on_logout(&self) -> Result<(), SessionError> {
        let path = &self.inner.path;
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SessionError::Remove {
                    path: path.clone(),
                    source,
                })
            }
        }

        self.set_credential(None);
        tracing::info!("session cleared");
        Ok(())
    }

    /// Re-read the credential file after an external change.
    ///
    /// Returns true when the in-memory credential changed.
    pub fn reload(&self) -> bool {
        let on_disk = read_credential(&self.inner.path);
        if on_disk == self.credential() {
            return false;
        }
        tracing::debug!(
            authenticated = on_disk.is_some(),
            "credential changed outside this instance"
        );
        self.set_credential(on_disk);
        true
    }

    fn set_credential(&self, credential: Option<String>) {
        let authenticated = credential.is_some();
        *self
            .inner
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = credential;
        self.inner.authenticated_tx.send_replace(authenticated);
    }
}

/// Replace the credential file in one rename, so readers never see it empty.
/// The temporary file is created owner-only (0600 on unix).
fn write_credential(path: &Path, credential: &str) -> Result<(), SessionError> {
    let write_err = |source: std::io::Error| SessionError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(credential.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn read_credential(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read credential");
            None
        }
    }
}
