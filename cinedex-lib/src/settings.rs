//! Application settings (database location, config file path).
//!
//! The settings file is `~/.config/cinedex/settings.toml` (or the platform
//! equivalent). Only `database.path` is read here; other keys are preserved
//! on write.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `<config_dir>/cinedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedex").join("settings.toml")
}

/// Default database location: `<data_dir>/cinedex/catalog.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("cinedex").join("catalog.db")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path() {
        return p;
    }
    default_database_path()
}

/// Read `database.path` from `settings.toml`, if set.
pub fn load_database_path() -> Option<PathBuf> {
    read_database_path(&settings_path())
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    write_database_path(&settings_path(), path)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

pub(crate) fn read_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Update `database.path` in the file at `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub(crate) fn write_database_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
