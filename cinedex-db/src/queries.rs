//! Read queries for the catalog database.
//!
//! Provides lookup by id, filtered and paged listings, derived association
//! reads, and statistics. Listings are always ordered by id so that pages are
//! stable while the data is unchanged.

use std::collections::BTreeSet;

use cinedex_catalog::types::*;
use cinedex_catalog::PageRequest;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension};

use crate::operations::{genre_name_key, search_key, OperationError};

// ── Single-entity Lookups ───────────────────────────────────────────────────

/// Find a movie by id, including its genre and actor sets.
pub fn find_movie(conn: &Connection, id: i64) -> Result<Option<Movie>, OperationError> {
    let movie = conn
        .query_row(
            "SELECT id, title, release_year, duration FROM movies WHERE id = ?1",
            params![id],
            row_to_movie,
        )
        .optional()?;
    match movie {
        Some(mut m) => {
            load_links(conn, &mut m)?;
            Ok(Some(m))
        }
        None => Ok(None),
    }
}

pub fn find_genre(conn: &Connection, id: i64) -> Result<Option<Genre>, OperationError> {
    conn.query_row(
        "SELECT id, name FROM genres WHERE id = ?1",
        params![id],
        row_to_genre,
    )
    .optional()
    .map_err(Into::into)
}

pub fn find_actor(conn: &Connection, id: i64) -> Result<Option<Actor>, OperationError> {
    conn.query_row(
        "SELECT id, name, birth_date FROM actors WHERE id = ?1",
        params![id],
        row_to_actor,
    )
    .optional()
    .map_err(Into::into)
}

/// Find a genre by name, ignoring case and surrounding whitespace.
pub fn find_genre_by_name(conn: &Connection, name: &str) -> Result<Option<Genre>, OperationError> {
    conn.query_row(
        "SELECT id, name FROM genres WHERE name_key = ?1",
        params![genre_name_key(name)],
        row_to_genre,
    )
    .optional()
    .map_err(Into::into)
}

/// Whether any genre already uses `name`, ignoring case.
pub fn genre_name_exists(conn: &Connection, name: &str) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM genres WHERE name_key = ?1)",
        params![genre_name_key(name)],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub fn entity_exists(conn: &Connection, kind: EntityKind, id: i64) -> Result<bool, OperationError> {
    let sql = match kind {
        EntityKind::Movie => "SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?1)",
        EntityKind::Genre => "SELECT EXISTS(SELECT 1 FROM genres WHERE id = ?1)",
        EntityKind::Actor => "SELECT EXISTS(SELECT 1 FROM actors WHERE id = ?1)",
    };
    let exists: bool = conn.query_row(sql, params![id], |row| row.get(0))?;
    Ok(exists)
}

/// Display label of an entity: a movie's title or a genre/actor name.
pub fn entity_label(conn: &Connection, entity: EntityRef) -> Result<Option<String>, OperationError> {
    let sql = match entity {
        EntityRef::Movie(_) => "SELECT title FROM movies WHERE id = ?1",
        EntityRef::Genre(_) => "SELECT name FROM genres WHERE id = ?1",
        EntityRef::Actor(_) => "SELECT name FROM actors WHERE id = ?1",
    };
    conn.query_row(sql, params![entity.id()], |row| row.get(0))
        .optional()
        .map_err(Into::into)
}

// ── Link Queries ────────────────────────────────────────────────────────────

/// Number of links held by an entity.
///
/// For a genre or actor this is the number of movies it appears in; for a
/// movie it is its genre count plus its actor count.
pub fn count_links(conn: &Connection, entity: EntityRef) -> Result<i64, OperationError> {
    let count = match entity {
        EntityRef::Movie(id) => conn.query_row(
            "SELECT (SELECT COUNT(*) FROM movie_genres WHERE movie_id = ?1)
                  + (SELECT COUNT(*) FROM movie_actors WHERE movie_id = ?1)",
            params![id],
            |row| row.get(0),
        )?,
        EntityRef::Genre(id) => conn.query_row(
            "SELECT COUNT(*) FROM movie_genres WHERE genre_id = ?1",
            params![id],
            |row| row.get(0),
        )?,
        EntityRef::Actor(id) => conn.query_row(
            "SELECT COUNT(*) FROM movie_actors WHERE actor_id = ?1",
            params![id],
            |row| row.get(0),
        )?,
    };
    Ok(count)
}

/// Ids of the movies linked to a genre or actor, in id order.
///
/// A movie is never linked to other movies, so a movie reference yields an
/// empty list.
pub fn linked_movie_ids(conn: &Connection, entity: EntityRef) -> Result<Vec<i64>, OperationError> {
    let sql = match entity {
        EntityRef::Movie(_) => return Ok(Vec::new()),
        EntityRef::Genre(_) => {
            "SELECT movie_id FROM movie_genres WHERE genre_id = ?1 ORDER BY movie_id"
        }
        EntityRef::Actor(_) => {
            "SELECT movie_id FROM movie_actors WHERE actor_id = ?1 ORDER BY movie_id"
        }
    };
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params![entity.id()], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Movies linked to a genre. A missing genre yields an empty list.
pub fn movies_for_genre(conn: &Connection, genre_id: i64) -> Result<Vec<Movie>, OperationError> {
    list_movies(conn, &MovieFilter::Genre(genre_id), None)
}

/// Movies linked to an actor. A missing actor yields an empty list.
pub fn movies_for_actor(conn: &Connection, actor_id: i64) -> Result<Vec<Movie>, OperationError> {
    list_movies(conn, &MovieFilter::Actor(actor_id), None)
}

/// Genres of a movie. A missing movie yields an empty list.
pub fn genres_for_movie(conn: &Connection, movie_id: i64) -> Result<Vec<Genre>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.name FROM genres g
         JOIN movie_genres mg ON mg.genre_id = g.id
         WHERE mg.movie_id = ?1 ORDER BY g.id",
    )?;
    let rows = stmt.query_map(params![movie_id], row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Actors of a movie. A missing movie yields an empty list.
pub fn actors_for_movie(conn: &Connection, movie_id: i64) -> Result<Vec<Actor>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.name, a.birth_date FROM actors a
         JOIN movie_actors ma ON ma.actor_id = a.id
         WHERE ma.movie_id = ?1 ORDER BY a.id",
    )?;
    let rows = stmt.query_map(params![movie_id], row_to_actor)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Listings ────────────────────────────────────────────────────────────────

/// List movies matching `filter`, optionally restricted to one page.
pub fn list_movies(
    conn: &Connection,
    filter: &MovieFilter,
    page: Option<PageRequest>,
) -> Result<Vec<Movie>, OperationError> {
    let (clause, values) = movie_filter_clause(filter);
    let sql = format!(
        "SELECT m.id, m.title, m.release_year, m.duration FROM movies m {clause}
         ORDER BY m.id{}",
        limit_clause(page)
    );
    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), row_to_movie)?;
    let mut movies = rows.collect::<Result<Vec<_>, _>>()?;
    for movie in &mut movies {
        load_links(conn, movie)?;
    }
    Ok(movies)
}

/// Count movies matching `filter`.
pub fn count_movies(conn: &Connection, filter: &MovieFilter) -> Result<u64, OperationError> {
    let (clause, values) = movie_filter_clause(filter);
    let sql = format!("SELECT COUNT(*) FROM movies m {clause}");
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let count: i64 = conn.query_row(&sql, params.as_slice(), |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

pub fn list_genres(
    conn: &Connection,
    page: Option<PageRequest>,
) -> Result<Vec<Genre>, OperationError> {
    let sql = format!(
        "SELECT id, name FROM genres ORDER BY id{}",
        limit_clause(page)
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn count_genres(conn: &Connection) -> Result<u64, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

/// List actors, optionally only those whose name contains `name_contains`
/// (case-insensitive).
pub fn list_actors(
    conn: &Connection,
    name_contains: Option<&str>,
    page: Option<PageRequest>,
) -> Result<Vec<Actor>, OperationError> {
    let (clause, values) = actor_filter_clause(name_contains);
    let sql = format!(
        "SELECT id, name, birth_date FROM actors {clause} ORDER BY id{}",
        limit_clause(page)
    );
    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), row_to_actor)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn count_actors(conn: &Connection, name_contains: Option<&str>) -> Result<u64, OperationError> {
    let (clause, values) = actor_filter_clause(name_contains);
    let sql = format!("SELECT COUNT(*) FROM actors {clause}");
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let count: i64 = conn.query_row(&sql, params.as_slice(), |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let movies: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    let genres: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
    let actors: i64 = conn.query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))?;
    let genre_links: i64 = conn.query_row("SELECT COUNT(*) FROM movie_genres", [], |r| r.get(0))?;
    let actor_links: i64 = conn.query_row("SELECT COUNT(*) FROM movie_actors", [], |r| r.get(0))?;
    let (min_year, max_year): (Option<i32>, Option<i32>) = conn.query_row(
        "SELECT MIN(release_year), MAX(release_year) FROM movies",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;

    Ok(CatalogStats {
        movies,
        genres,
        actors,
        genre_links,
        actor_links,
        min_year,
        max_year,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogStats {
    pub movies: i64,
    pub genres: i64,
    pub actors: i64,
    pub genre_links: i64,
    pub actor_links: i64,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn movie_filter_clause(filter: &MovieFilter) -> (&'static str, Vec<Box<dyn ToSql>>) {
    match filter {
        MovieFilter::All => ("", vec![]),
        MovieFilter::Genre(id) => (
            "WHERE m.id IN (SELECT movie_id FROM movie_genres WHERE genre_id = ?1)",
            vec![Box::new(*id) as Box<dyn ToSql>],
        ),
        MovieFilter::ReleaseYear(year) => (
            "WHERE m.release_year = ?1",
            vec![Box::new(*year) as Box<dyn ToSql>],
        ),
        MovieFilter::Actor(id) => (
            "WHERE m.id IN (SELECT movie_id FROM movie_actors WHERE actor_id = ?1)",
            vec![Box::new(*id) as Box<dyn ToSql>],
        ),
        MovieFilter::TitleContains(needle) => (
            "WHERE m.title_key LIKE ?1 ESCAPE '\\'",
            vec![Box::new(like_pattern(needle)) as Box<dyn ToSql>],
        ),
    }
}

fn actor_filter_clause(name_contains: Option<&str>) -> (&'static str, Vec<Box<dyn ToSql>>) {
    match name_contains {
        Some(needle) => (
            "WHERE name_key LIKE ?1 ESCAPE '\\'",
            vec![Box::new(like_pattern(needle)) as Box<dyn ToSql>],
        ),
        None => ("", vec![]),
    }
}

fn limit_clause(page: Option<PageRequest>) -> String {
    match page {
        Some(p) => format!(" LIMIT {} OFFSET {}", p.page_size(), p.offset()),
        None => String::new(),
    }
}

/// Build a `LIKE` pattern matching `needle` anywhere in a case-folded key
/// column, with wildcards escaped.
fn like_pattern(needle: &str) -> String {
    let needle = search_key(needle);
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn load_links(conn: &Connection, movie: &mut Movie) -> Result<(), OperationError> {
    let mut stmt = conn.prepare_cached("SELECT genre_id FROM movie_genres WHERE movie_id = ?1")?;
    movie.genres = stmt
        .query_map(params![movie.id], |row| row.get(0))?
        .collect::<Result<BTreeSet<i64>, _>>()?;

    let mut stmt = conn.prepare_cached("SELECT actor_id FROM movie_actors WHERE movie_id = ?1")?;
    movie.actors = stmt
        .query_map(params![movie.id], |row| row.get(0))?
        .collect::<Result<BTreeSet<i64>, _>>()?;
    Ok(())
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
        duration: row.get(3)?,
        genres: BTreeSet::new(),
        actors: BTreeSet::new(),
    })
}

fn row_to_genre(row: &rusqlite::Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_actor(row: &rusqlite::Row<'_>) -> rusqlite::Result<Actor> {
    Ok(Actor {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
    })
}
