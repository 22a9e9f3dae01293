//! Populate an empty catalog from a [`SeedData`] set.

use std::collections::HashMap;

use chrono::NaiveDate;
use cinedex_catalog::types::{MovieFilter, NewActor, NewMovie};
use cinedex_catalog::SeedData;
use cinedex_db as db;
use rusqlite::Connection;
use serde::Serialize;

use crate::association;
use crate::error::CatalogError;
use crate::validation;

/// What a seed run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedStats {
    /// The catalog already had movies, so nothing was written.
    pub skipped: bool,
    pub genres: usize,
    pub actors: usize,
    pub movies: usize,
    /// Genre references that matched no genre and were left out.
    pub unknown_genres: usize,
}

/// Write `data` into the catalog unless it already contains movies.
///
/// Movies name their genres and actors. Genre names are matched ignoring
/// case; an unknown one is skipped with a warning. An actor named by a movie
/// but not declared in `actors` is created with a 1970-01-01 birth date.
pub fn seed_catalog(conn: &Connection, data: &SeedData) -> Result<SeedStats, CatalogError> {
    if db::count_movies(conn, &MovieFilter::All)? > 0 {
        log::info!("Catalog already has movies, skipping seed");
        return Ok(SeedStats {
            skipped: true,
            ..SeedStats::default()
        });
    }

    let mut stats = SeedStats::default();

    let mut genre_ids: HashMap<String, i64> = HashMap::new();
    for name in &data.genres {
        let name = validation::normalize_genre_name(name)?;
        let id = match db::find_genre_by_name(conn, name)? {
            Some(existing) => existing.id,
            None => {
                stats.genres += 1;
                db::insert_genre(conn, name)?
            }
        };
        genre_ids.insert(db::genre_name_key(name), id);
    }

    let mut actor_ids: HashMap<String, i64> = HashMap::new();
    for actor in &data.actors {
        if actor_ids.contains_key(&actor.name) {
            continue;
        }
        let new = NewActor::new(actor.name.clone(), actor.birth_date);
        validation::validate_new_actor(&new)?;
        actor_ids.insert(actor.name.clone(), db::insert_actor(conn, &new)?);
        stats.actors += 1;
    }

    let undeclared_birth_date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();

    for seed_movie in &data.movies {
        let mut movie = NewMovie::new(
            seed_movie.title.clone(),
            seed_movie.release_year,
            seed_movie.duration,
        );
        validation::validate_new_movie(&movie)?;

        for genre in &seed_movie.genres {
            let key = db::genre_name_key(genre);
            let id = match genre_ids.get(&key) {
                Some(&id) => Some(id),
                None => db::find_genre_by_name(conn, genre.trim())?.map(|g| g.id),
            };
            match id {
                Some(id) => {
                    genre_ids.insert(key, id);
                    movie.genres.insert(id);
                }
                None => {
                    log::warn!(
                        "Unknown genre '{}' for '{}', skipping",
                        genre,
                        seed_movie.title
                    );
                    stats.unknown_genres += 1;
                }
            }
        }

        for name in &seed_movie.actors {
            let id = match actor_ids.get(name) {
                Some(&id) => id,
                None => {
                    let new = NewActor::new(name.clone(), undeclared_birth_date);
                    validation::validate_new_actor(&new)?;
                    let id = db::insert_actor(conn, &new)?;
                    log::debug!("Created undeclared actor '{name}'");
                    actor_ids.insert(name.clone(), id);
                    stats.actors += 1;
                    id
                }
            };
            movie.actors.insert(id);
        }

        let id = db::insert_movie(conn, &movie.title, movie.release_year, movie.duration)?;
        association::attach(conn, id, &movie.links())?;
        stats.movies += 1;
    }

    log::info!(
        "Seeded {} genres, {} actors, {} movies",
        stats.genres,
        stats.actors,
        stats.movies
    );
    Ok(stats)
}
