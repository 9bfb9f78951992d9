//! Client session store with durable persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shiptrack_core::result::AppResult;
use shiptrack_entity::Role;

/// The locally cached session after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    /// Opaque session token, replayed on every API call.
    pub token: String,
    /// Identity the session belongs to.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role confirmed by the server at login.
    pub role: Role,
}

struct Inner {
    session: Option<ClientSession>,
    loading: bool,
}

/// In-memory session cache mirrored to a JSON file.
///
/// Starts in the loading state; callers that consult the session before
/// [`SessionStore::load`] has run see "still loading", not "logged
/// out". That distinction is what lets a route guard wait instead of
/// bouncing a restored session to the login screen.
///
/// Persistence failures degrade to memory-only: the login still
/// succeeds for the lifetime of the process and the failure is logged.
pub struct SessionStore {
    path: PathBuf,
    inner: RwLock<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .finish()
    }
}

impl SessionStore {
    /// Creates a store backed by the given file. The store begins in
    /// the loading state until [`SessionStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inner: RwLock::new(Inner {
                session: None,
                loading: true,
            }),
        }
    }

    /// Rehydrates the session from durable storage and clears the
    /// loading flag.
    ///
    /// A missing file means no prior session; an unreadable or corrupt
    /// file is treated the same way after a warning. Either way the
    /// store leaves the loading state, so guards stop waiting.
    pub fn load(&self) {
        let restored = match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<ClientSession>(&raw) {
                Ok(session) => {
                    debug!(identity = %session.email, "Session restored from disk");
                    Some(session)
                }
                Err(err) => {
                    warn!(error = %err, "Stored session is corrupt; discarding");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(error = %err, "Could not read stored session");
                None
            }
        };

        let mut inner = self.write_lock();
        inner.session = restored;
        inner.loading = false;
    }

    /// Records a fresh login in memory and mirrors it to disk.
    ///
    /// Returns an error only if serialization itself fails; a disk
    /// write failure is logged and the in-memory session stands.
    pub fn login(&self, session: ClientSession) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&session)?;

        if let Err(err) = fs::write(&self.path, raw) {
            warn!(error = %err, "Could not persist session; keeping it in memory only");
        }

        let mut inner = self.write_lock();
        inner.session = Some(session);
        inner.loading = false;
        Ok(())
    }

    /// Clears the session from memory and disk.
    pub fn logout(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %err, "Could not remove stored session");
            }
        }

        let mut inner = self.write_lock();
        inner.session = None;
        inner.loading = false;
    }

    /// The current session, if logged in.
    pub fn current(&self) -> Option<ClientSession> {
        self.read_lock().session.clone()
    }

    /// Whether the store is still waiting for [`SessionStore::load`].
    pub fn is_loading(&self) -> bool {
        self.read_lock().loading
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
