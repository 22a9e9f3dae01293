//! Case-insensitive uniqueness of genre names.
//!
//! Names are compared by [`db::genre_name_key`], which folds case for every
//! script, not just ASCII. The unique index on `genres.name_key` backs these
//! checks; a race that slips past them still surfaces as a conflict from the
//! store.

use cinedex_catalog::types::Genre;
use cinedex_db as db;
use rusqlite::Connection;

use crate::error::CatalogError;
use crate::validation::normalize_genre_name;

/// Check a new genre name. Returns the trimmed name to store.
pub fn ensure_unique_for_create(conn: &Connection, name: &str) -> Result<String, CatalogError> {
    let name = normalize_genre_name(name)?;
    if db::genre_name_exists(conn, name)? {
        return Err(duplicate(name));
    }
    Ok(name.to_string())
}

/// Check a rename of `current`. Renaming to its own name in any casing is allowed.
pub fn ensure_unique_for_rename(
    conn: &Connection,
    current: &Genre,
    name: &str,
) -> Result<String, CatalogError> {
    let name = normalize_genre_name(name)?;
    if !same_name(&current.name, name) && db::genre_name_exists(conn, name)? {
        return Err(duplicate(name));
    }
    Ok(name.to_string())
}

fn same_name(a: &str, b: &str) -> bool {
    db::genre_name_key(a) == db::genre_name_key(b)
}

fn duplicate(name: &str) -> CatalogError {
    CatalogError::conflict(format!("Genre '{name}' already exists."))
}

#[cfg(test)]
#[path = "tests/uniqueness_tests.rs"]
mod tests;
