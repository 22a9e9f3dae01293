//! Movie <-> genre and movie <-> actor links.
//!
//! Movies own both relations. Every link write goes through a movie's full
//! genre or actor set, including detaching a genre or actor before it is
//! deleted. None of these functions open a transaction; callers run them
//! inside one so a failure part way through leaves nothing behind.

use std::collections::BTreeSet;

use cinedex_catalog::types::{EntityKind, EntityRef, Movie, MovieLinks};
use cinedex_db::{self as db, OperationError};
use rusqlite::Connection;

use crate::error::CatalogError;

/// Replace both association sets of a movie.
pub fn attach(conn: &Connection, movie_id: i64, links: &MovieLinks) -> Result<(), CatalogError> {
    replace_genres(conn, movie_id, &links.genres)?;
    replace_actors(conn, movie_id, &links.actors)
}

/// Replace a movie's genre set. Every genre must exist.
pub fn replace_genres(
    conn: &Connection,
    movie_id: i64,
    genres: &BTreeSet<i64>,
) -> Result<(), CatalogError> {
    ensure_movie(conn, movie_id)?;
    ensure_all_exist(conn, EntityKind::Genre, genres)?;
    db::replace_movie_genres(conn, movie_id, genres)?;
    log::debug!("Movie {movie_id} now has genres {genres:?}");
    Ok(())
}

/// Replace a movie's actor set. Every actor must exist.
pub fn replace_actors(
    conn: &Connection,
    movie_id: i64,
    actors: &BTreeSet<i64>,
) -> Result<(), CatalogError> {
    ensure_movie(conn, movie_id)?;
    ensure_all_exist(conn, EntityKind::Actor, actors)?;
    db::replace_movie_actors(conn, movie_id, actors)?;
    log::debug!("Movie {movie_id} now has actors {actors:?}");
    Ok(())
}

/// Number of links held by an entity: movies for a genre or actor,
/// genres plus actors for a movie.
pub fn count_related(conn: &Connection, entity: EntityRef) -> Result<i64, CatalogError> {
    Ok(db::count_links(conn, entity)?)
}

/// Sever every link of `entity` through the owning movies.
///
/// The linked movie ids are read once up front, then each movie's set is
/// rewritten without the entity. Returns the number of movies changed.
pub fn detach(conn: &Connection, entity: EntityRef) -> Result<usize, CatalogError> {
    match entity {
        EntityRef::Movie(id) => {
            db::replace_movie_genres(conn, id, &BTreeSet::new())?;
            db::replace_movie_actors(conn, id, &BTreeSet::new())?;
            Ok(1)
        }
        EntityRef::Genre(id) => rewrite_linked_movies(conn, entity, |movie| {
            movie.genres.remove(&id);
            db::replace_movie_genres(conn, movie.id, &movie.genres)
        }),
        EntityRef::Actor(id) => rewrite_linked_movies(conn, entity, |movie| {
            movie.actors.remove(&id);
            db::replace_movie_actors(conn, movie.id, &movie.actors)
        }),
    }
}

fn rewrite_linked_movies(
    conn: &Connection,
    entity: EntityRef,
    mut rewrite: impl FnMut(&mut Movie) -> Result<(), OperationError>,
) -> Result<usize, CatalogError> {
    let movie_ids = db::linked_movie_ids(conn, entity)?;
    let mut changed = 0;
    for movie_id in movie_ids {
        let Some(mut movie) = db::find_movie(conn, movie_id)? else {
            continue;
        };
        rewrite(&mut movie)?;
        changed += 1;
    }
    Ok(changed)
}

/// Delete an entity under the link policy.
///
/// Without `force`, an entity that still has links is refused with
/// `Conflict`. With `force`, its links are detached first.
pub fn delete(conn: &Connection, entity: EntityRef, force: bool) -> Result<(), CatalogError> {
    let kind = entity.kind();
    let Some(label) = db::entity_label(conn, entity)? else {
        return Err(CatalogError::not_found(kind, entity.id()));
    };

    let related = count_related(conn, entity)?;
    if related > 0 {
        if !force {
            return Err(CatalogError::conflict(format!(
                "Cannot delete {kind} '{label}' because it has {related} associated {}.",
                related_noun(kind),
            )));
        }
        let detached = detach(conn, entity)?;
        log::debug!("Detached {kind} {} from {detached} movie(s)", entity.id());
    }

    db::delete_entity(conn, kind, entity.id())?;
    log::info!("Deleted {kind} '{label}' (id {})", entity.id());
    Ok(())
}

fn related_noun(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Movie => "genres and actors",
        EntityKind::Genre | EntityKind::Actor => "movies",
    }
}

fn ensure_movie(conn: &Connection, movie_id: i64) -> Result<(), CatalogError> {
    if db::entity_exists(conn, EntityKind::Movie, movie_id)? {
        Ok(())
    } else {
        Err(CatalogError::not_found(EntityKind::Movie, movie_id))
    }
}

fn ensure_all_exist(
    conn: &Connection,
    kind: EntityKind,
    ids: &BTreeSet<i64>,
) -> Result<(), CatalogError> {
    for &id in ids {
        if !db::entity_exists(conn, kind, id)? {
            return Err(CatalogError::not_found(kind, id));
        }
    }
    Ok(())
}
