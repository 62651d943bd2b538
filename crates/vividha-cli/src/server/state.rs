//! Application state and session registry for the web server.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use vividha::{DataSource, Registry, Session};

/// Shared application state.
///
/// Sessions are explicit per-session contexts keyed by the id the client
/// sends; no UI state lives at process scope. The registry sits behind a
/// mutex so appends from concurrent sessions stay single-writer within this
/// process.
#[derive(Clone)]
pub struct AppState {
    /// Data source, selected once at startup.
    pub source: Arc<dyn DataSource>,
    /// Artifact registry, the one shared mutable resource.
    pub registry: Arc<Mutex<Registry>>,
    /// Live sessions by client-supplied id.
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(source: Arc<dyn DataSource>, registry_path: PathBuf) -> Self {
        Self {
            source,
            registry: Arc::new(Mutex::new(Registry::new(registry_path))),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot of a session; empty if it has not been seen yet.
    pub async fn session(&self, id: &str) -> Session {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    /// Run `f` against the live session, creating it on first use.
    pub async fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id.to_string()).or_default();
        f(session)
    }
}
