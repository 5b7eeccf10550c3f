// Settings persistence using SQLite

use crate::controllers::DEFAULT_PROJECT_NAME;
use crate::theme::{MAX_NAME_LENGTH, MAX_VALUE_LENGTH};
use crate::types::Panel;
use rusqlite::{Connection, Result as SqlResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    pub preview_dark_mode: bool,
    pub last_panel: Panel,
    pub cli_project_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            preview_dark_mode: false,
            last_panel: Panel::Configuration,
            cli_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl Settings {
    // Validates and sanitizes settings values
    pub fn sanitize(&mut self) {
        if self.cli_project_name.chars().count() > MAX_NAME_LENGTH {
            self.cli_project_name = self.cli_project_name.chars().take(MAX_NAME_LENGTH).collect();
        }
        if self.cli_project_name.trim().is_empty() {
            self.cli_project_name = DEFAULT_PROJECT_NAME.to_string();
        }
    }
}

// Returns path to settings database
fn get_db_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("white-label-studio").join("settings.db"))
}

// Initializes database and creates tables if needed
fn init_db(conn: &Connection) -> SqlResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn open_db(db_path: &Path) -> Option<Connection> {
    if let Some(parent) = db_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let conn = match Connection::open(db_path) {
        Ok(conn) => conn,
        Err(e) => {
            warn!(path = %db_path.display(), error = %e, "Cannot open settings database");
            return None;
        }
    };
    if let Err(e) = init_db(&conn) {
        warn!(error = %e, "Cannot initialize settings database");
        return None;
    }
    Some(conn)
}

// Loads settings from the default database location
pub fn load_settings() -> Settings {
    match get_db_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

// Loads settings from SQLite database; unreadable values keep their defaults
pub fn load_settings_from(db_path: &Path) -> Settings {
    let Some(conn) = open_db(db_path) else {
        return Settings::default();
    };

    let mut settings = Settings::default();

    if let Ok(val) = get_setting(&conn, "dark_mode") {
        settings.dark_mode = val == "true";
    }
    if let Ok(val) = get_setting(&conn, "preview_dark_mode") {
        settings.preview_dark_mode = val == "true";
    }
    if let Ok(val) = get_setting(&conn, "last_panel") {
        settings.last_panel = Panel::from_key(&val).unwrap_or_default();
    }
    if let Ok(val) = get_setting(&conn, "cli_project_name") {
        settings.cli_project_name = val;
    }

    settings.sanitize();
    debug!(?settings, "Settings loaded");
    settings
}

// Saves settings to the default database location (call from async context)
pub fn save_settings(settings: &Settings) {
    if let Some(path) = get_db_path() {
        save_settings_to(&path, settings);
    }
}

pub fn save_settings_to(db_path: &Path, settings: &Settings) {
    let Some(conn) = open_db(db_path) else {
        return;
    };

    // Validate before saving
    let mut settings = settings.clone();
    settings.sanitize();

    let results = [
        set_setting(&conn, "dark_mode", &settings.dark_mode.to_string()),
        set_setting(
            &conn,
            "preview_dark_mode",
            &settings.preview_dark_mode.to_string(),
        ),
        set_setting(&conn, "last_panel", settings.last_panel.key()),
        set_setting(&conn, "cli_project_name", &settings.cli_project_name),
    ];
    if let Some(Err(e)) = results.into_iter().find(Result::is_err) {
        warn!(error = %e, "Failed to save settings");
    }
}

fn get_setting(conn: &Connection, key: &str) -> SqlResult<String> {
    conn.query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
        row.get(0)
    })
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> SqlResult<()> {
    // Limit value length
    let safe_value: String = value.chars().take(MAX_VALUE_LENGTH).collect();
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, &safe_value],
    )?;
    Ok(())
}
