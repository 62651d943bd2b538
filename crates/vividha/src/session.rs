//! Per-session UI state.
//!
//! A [`Session`] is an explicit context object created empty at session
//! start and dropped when the session ends — never a process-wide global.
//! Widget-bound values are written here on every interaction and read back
//! through the typed accessors; nothing persists across sessions except
//! what the registry file records.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ArtifactSubmission;

/// Well-known session keys.
pub mod keys {
    pub const SELECTED_ART: &str = "selected_art";
    pub const LANGUAGE: &str = "language";
    pub const FONT_SIZE: &str = "font_size";
    pub const HIGH_CONTRAST: &str = "high_contrast";
    pub const OFFLINE_MODE: &str = "offline_mode";
}

/// Language reported before the user picks one.
pub const DEFAULT_LANGUAGE: &str = "English";
/// Font size reported before the user adjusts it.
pub const DEFAULT_FONT_SIZE: u16 = 16;

/// Mutable state for one user session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    values: IndexMap<String, Value>,
    #[serde(default)]
    artifact_log: Vec<ArtifactSubmission>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value, `None` when unset or of a different shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
    }

    /// Read a value, falling back to `default`.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store a value under `key`, replacing any previous one.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Remove a value; returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.shift_remove(key).is_some()
    }

    /// The art form last selected in the explorer, if any.
    pub fn selected_art(&self) -> Option<String> {
        self.get(keys::SELECTED_ART)
    }

    /// Remember the explorer selection.
    pub fn set_selected_art(&mut self, art_form: &str) {
        self.set(keys::SELECTED_ART, art_form);
    }

    /// Display language, defaulting to English.
    pub fn language(&self) -> String {
        self.get_or(keys::LANGUAGE, DEFAULT_LANGUAGE.to_string())
    }

    /// Font size in pixels, defaulting to 16.
    pub fn font_size(&self) -> u16 {
        self.get_or(keys::FONT_SIZE, DEFAULT_FONT_SIZE)
    }

    /// High-contrast mode, off by default.
    pub fn high_contrast(&self) -> bool {
        self.get_or(keys::HIGH_CONTRAST, false)
    }

    /// Offline mode, off by default.
    pub fn offline_mode(&self) -> bool {
        self.get_or(keys::OFFLINE_MODE, false)
    }

    /// Record a submission in the session-local log.
    ///
    /// The log survives registry write failures; it is lost with the
    /// session itself.
    pub fn log_artifact(&mut self, submission: ArtifactSubmission) {
        self.artifact_log.push(submission);
    }

    /// Submissions made during this session, oldest first.
    pub fn artifact_log(&self) -> &[ArtifactSubmission] {
        &self.artifact_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let session = Session::new();
        assert_eq!(session.selected_art(), None);
        assert_eq!(session.language(), "English");
        assert_eq!(session.font_size(), 16);
        assert!(!session.high_contrast());
        assert!(!session.offline_mode());
        assert!(session.artifact_log().is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut session = Session::new();
        session.set(keys::LANGUAGE, "Hindi");
        session.set(keys::FONT_SIZE, 24u16);
        session.set(keys::OFFLINE_MODE, true);

        assert_eq!(session.language(), "Hindi");
        assert_eq!(session.font_size(), 24);
        assert!(session.offline_mode());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut session = Session::new();
        session.set_selected_art("Madhubani");
        session.set_selected_art("Warli");
        assert_eq!(session.selected_art().as_deref(), Some("Warli"));
    }

    #[test]
    fn test_artifact_log_preserves_order() {
        let mut session = Session::new();
        session.log_artifact(ArtifactSubmission::new("Pot A", "Bihar", "Clay pot"));
        session.log_artifact(ArtifactSubmission::new("Mask B", "Odisha", "Dance mask"));

        let names: Vec<&str> = session
            .artifact_log()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pot A", "Mask B"]);
    }

    #[test]
    fn test_remove() {
        let mut session = Session::new();
        session.set(keys::HIGH_CONTRAST, true);
        assert!(session.remove(keys::HIGH_CONTRAST));
        assert!(!session.remove(keys::HIGH_CONTRAST));
        assert!(!session.high_contrast());
    }
}
