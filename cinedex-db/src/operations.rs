//! Write operations for movies, genres, actors, and their link tables.
//!
//! These are plain row writes. Business rules (validation, uniqueness,
//! deletion policy) live in `cinedex-lib`, which calls these inside its own
//! transactions.

use std::collections::BTreeSet;

use cinedex_catalog::types::*;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {kind} with id {id}")]
    NotFound { kind: EntityKind, id: i64 },
}

// ── Case Keys ───────────────────────────────────────────────────────────────

/// Case-folded copy of a text column, stored next to it for matching.
///
/// SQLite's `NOCASE` and `LIKE` only fold ASCII, so folding happens here.
/// Upper-casing maps `ß` and both lowercase sigmas onto the same key as their
/// capitals.
pub fn search_key(text: &str) -> String {
    text.to_uppercase()
}

/// Key under which genre names must be unique.
pub fn genre_name_key(name: &str) -> String {
    search_key(name.trim())
}

// ── Genre Operations ────────────────────────────────────────────────────────

/// Insert a new genre. Returns the generated ID.
pub fn insert_genre(conn: &Connection, name: &str) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO genres (name, name_key) VALUES (?1, ?2)",
        params![name, genre_name_key(name)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a genre's name.
pub fn rename_genre(conn: &Connection, id: i64, name: &str) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE genres SET name = ?2, name_key = ?3, updated_at = datetime('now')
         WHERE id = ?1",
        params![id, name, genre_name_key(name)],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            kind: EntityKind::Genre,
            id,
        });
    }
    Ok(())
}

// ── Actor Operations ────────────────────────────────────────────────────────

/// Insert a new actor. Returns the generated ID.
pub fn insert_actor(conn: &Connection, actor: &NewActor) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO actors (name, name_key, birth_date) VALUES (?1, ?2, ?3)",
        params![actor.name, search_key(&actor.name), actor.birth_date],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite an existing actor's fields.
pub fn update_actor(conn: &Connection, actor: &Actor) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE actors SET name = ?2, name_key = ?3, birth_date = ?4,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![actor.id, actor.name, search_key(&actor.name), actor.birth_date],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            kind: EntityKind::Actor,
            id: actor.id,
        });
    }
    Ok(())
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert a movie row without any links. Returns the generated ID.
pub fn insert_movie(
    conn: &Connection,
    title: &str,
    release_year: i32,
    duration: i32,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO movies (title, title_key, release_year, duration) VALUES (?1, ?2, ?3, ?4)",
        params![title, search_key(title), release_year, duration],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite a movie's scalar columns. Links are written separately.
pub fn update_movie(conn: &Connection, movie: &Movie) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE movies SET title = ?2, title_key = ?3, release_year = ?4, duration = ?5,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![
            movie.id,
            movie.title,
            search_key(&movie.title),
            movie.release_year,
            movie.duration
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            kind: EntityKind::Movie,
            id: movie.id,
        });
    }
    Ok(())
}

// ── Link Operations ─────────────────────────────────────────────────────────

/// Replace every genre link of a movie with `genres`.
pub fn replace_movie_genres(
    conn: &Connection,
    movie_id: i64,
    genres: &BTreeSet<i64>,
) -> Result<(), OperationError> {
    conn.execute(
        "DELETE FROM movie_genres WHERE movie_id = ?1",
        params![movie_id],
    )?;
    let mut stmt =
        conn.prepare_cached("INSERT INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)")?;
    for genre_id in genres {
        stmt.execute(params![movie_id, genre_id])?;
    }
    Ok(())
}

/// Replace every actor link of a movie with `actors`.
pub fn replace_movie_actors(
    conn: &Connection,
    movie_id: i64,
    actors: &BTreeSet<i64>,
) -> Result<(), OperationError> {
    conn.execute(
        "DELETE FROM movie_actors WHERE movie_id = ?1",
        params![movie_id],
    )?;
    let mut stmt =
        conn.prepare_cached("INSERT INTO movie_actors (movie_id, actor_id) VALUES (?1, ?2)")?;
    for actor_id in actors {
        stmt.execute(params![movie_id, actor_id])?;
    }
    Ok(())
}

// ── Deletion ────────────────────────────────────────────────────────────────

/// Delete one entity row.
///
/// Links are not touched here. With foreign keys on, deleting a row that is
/// still linked fails with a constraint error.
pub fn delete_entity(conn: &Connection, kind: EntityKind, id: i64) -> Result<(), OperationError> {
    let sql = match kind {
        EntityKind::Movie => "DELETE FROM movies WHERE id = ?1",
        EntityKind::Genre => "DELETE FROM genres WHERE id = ?1",
        EntityKind::Actor => "DELETE FROM actors WHERE id = ?1",
    };
    let changed = conn.execute(sql, params![id])?;
    if changed == 0 {
        return Err(OperationError::NotFound { kind, id });
    }
    Ok(())
}
