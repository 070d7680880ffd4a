//! Explicit session persistence.
//!
//! Replaces the ambient browser-storage keys of the original console
//! (`token`, `refresh`, `token_expiry`, `refresh_expiry`, tenant id,
//! serialized user/tenant blobs) with one explicit [`SessionData`] document
//! behind a [`SessionStore`]. Callers that need the session receive it
//! through the store instead of reading hidden global state.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use aeroops_auth::{Role, SessionTokens, UserProfile};
use aeroops_core::TenantId;

/// Everything the client persists between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionData {
    #[serde(default)]
    pub tokens: Option<SessionTokens>,

    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    /// Cached user profile; the role is derived from it on every check.
    #[serde(default)]
    pub user: Option<UserProfile>,

    /// Opaque tenant payload as returned by the API.
    #[serde(default)]
    pub tenant: Option<Value>,
}

impl SessionData {
    /// Current role, recomputed from the cached profile. Never stored.
    pub fn role(&self) -> Role {
        Role::from_profile(self.user.as_ref())
    }
}

/// Session persistence boundary.
///
/// `load` is infallible by policy: malformed or unreadable persisted data is
/// the absence of a session (fail-closed), never an error.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<SessionData>;
    fn save(&self, data: &SessionData) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// In-memory store for tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Option<SessionData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<SessionData> {
        self.data.lock().ok()?.clone()
    }

    fn save(&self, data: &SessionData) -> anyhow::Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("session store mutex poisoned"))?;
        *guard = Some(data.clone());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("session store mutex poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// JSON-file-backed store at `{data_dir}/aeroops/session.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at the OS-default data directory.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            path: default_session_path()?,
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<SessionData> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(data) => Some(data),
            Err(err) => {
                // Corrupt session file: treat as logged out.
                tracing::debug!("discarding malformed session file: {err}");
                None
            }
        }
    }

    fn save(&self, data: &SessionData) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create session directory at {:?}", parent))?;
        }
        let payload = serde_json::to_string_pretty(data).context("failed to serialize session")?;
        std::fs::write(&self.path, payload)
            .with_context(|| format!("failed to write session file at {:?}", self.path))?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove session file at {:?}", self.path))
            }
        }
    }
}

/// Resolve the path to the session file: `{data_dir}/aeroops/session.json`.
fn default_session_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut path = base;
    path.push("aeroops");
    path.push("session.json");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SessionData {
        SessionData {
            tokens: Some(SessionTokens {
                access: "acc".to_string(),
                refresh: "ref".to_string(),
                access_expiry: 2_000_000_000,
                refresh_expiry: 2_100_000_000,
            }),
            tenant_id: Some(TenantId::new("acme")),
            user: None,
            tenant: None,
        }
    }

    fn temp_store(name: &str) -> FileStore {
        let mut path = std::env::temp_dir();
        path.push(format!("aeroops-store-test-{}-{}", name, std::process::id()));
        path.push("session.json");
        FileStore::with_path(path)
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap(), sample_session());

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let store = temp_store("round-trip");
        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap(), sample_session());

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn malformed_session_file_reads_as_no_session() {
        let store = temp_store("malformed");
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_none());
        // And a sessionless client is a viewer.
        assert_eq!(SessionData::default().role(), Role::Visualizador);
    }

    #[test]
    fn role_is_derived_not_persisted() {
        let json = serde_json::to_string(&sample_session()).unwrap();
        assert!(!json.contains("role"));
    }
}
