//! Settings page: language, accessibility, offline mode.

use serde::{Deserialize, Serialize};

use vividha::session::{self, Session};

/// Languages offered by the selector, default first.
pub const LANGUAGES: [&str; 13] = [
    "English",
    "Hindi",
    "Bengali",
    "Tamil",
    "Telugu",
    "Marathi",
    "Gujarati",
    "Kannada",
    "Malayalam",
    "Punjabi",
    "Odia",
    "Assamese",
    "Urdu",
];

pub const MIN_FONT_SIZE: u16 = 12;
pub const MAX_FONT_SIZE: u16 = 32;

/// Current settings plus the selector options.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub languages: Vec<String>,
    pub language: String,
    pub font_size: u16,
    pub high_contrast: bool,
    pub offline_mode: bool,
}

/// A partial settings update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<String>,
    pub font_size: Option<u16>,
    pub high_contrast: Option<bool>,
    pub offline_mode: Option<bool>,
}

/// Read the current settings through the session.
pub fn build(session: &Session) -> SettingsView {
    SettingsView {
        languages: LANGUAGES.iter().map(|l| l.to_string()).collect(),
        language: session.language(),
        font_size: session.font_size(),
        high_contrast: session.high_contrast(),
        offline_mode: session.offline_mode(),
    }
}

/// Apply an update. Unknown languages and out-of-range font sizes are
/// rejected without touching the session.
pub fn update(
    session: &mut Session,
    update: SettingsUpdate,
) -> std::result::Result<SettingsView, String> {
    if let Some(language) = &update.language {
        if !LANGUAGES.contains(&language.as_str()) {
            return Err(format!("unsupported language: {}", language));
        }
    }
    if let Some(size) = update.font_size {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(format!(
                "font size must be between {} and {}",
                MIN_FONT_SIZE, MAX_FONT_SIZE
            ));
        }
    }

    if let Some(language) = update.language {
        session.set(session::keys::LANGUAGE, language);
    }
    if let Some(size) = update.font_size {
        session.set(session::keys::FONT_SIZE, size);
    }
    if let Some(high_contrast) = update.high_contrast {
        session.set(session::keys::HIGH_CONTRAST, high_contrast);
    }
    if let Some(offline_mode) = update.offline_mode {
        session.set(session::keys::OFFLINE_MODE, offline_mode);
    }

    Ok(build(session))
}
