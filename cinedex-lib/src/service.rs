//! The per-entity operations frontends call.
//!
//! Every write runs in one `BEGIN IMMEDIATE` transaction, so the policy reads
//! it makes (link counts, duplicate names) cannot go stale before its writes
//! land. SQLite transactions are serializable. Paged reads fetch the page and
//! its total inside one read transaction.

use std::path::Path;

use cinedex_catalog::types::*;
use cinedex_catalog::{Page, SeedData};
use cinedex_db::{self as db, CatalogStats};
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::association;
use crate::error::CatalogError;
use crate::query::{self, MovieQuery};
use crate::seed::{self, SeedStats};
use crate::uniqueness;
use crate::validation;

pub struct CatalogService {
    conn: Connection,
}

impl CatalogService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (or create) a catalog database file.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::new(db::open_database(path)?))
    }

    pub fn open_memory() -> Result<Self, CatalogError> {
        Ok(Self::new(db::open_memory()?))
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    fn read<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    // ── Movies ──────────────────────────────────────────────────────────────

    /// Create a movie together with its genre and actor links.
    pub fn create_movie(&self, new: NewMovie) -> Result<Movie, CatalogError> {
        validation::validate_new_movie(&new)?;
        self.write(|conn| {
            let id = db::insert_movie(conn, &new.title, new.release_year, new.duration)?;
            association::attach(conn, id, &new.links())?;
            log::debug!("Created movie '{}' (id {id})", new.title);
            load_movie(conn, id)
        })
    }

    pub fn find_movie(&self, id: i64) -> Result<Movie, CatalogError> {
        load_movie(&self.conn, id)
    }

    /// All movies matching `query`, unpaged.
    pub fn list_movies(&self, query: MovieQuery) -> Result<Vec<Movie>, CatalogError> {
        let filter = query.into_filter()?;
        Ok(db::list_movies(&self.conn, &filter, None)?)
    }

    pub fn movie_page(
        &self,
        query: MovieQuery,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<Movie>, CatalogError> {
        let filter = query.into_filter()?;
        let request = query::page_request(page_number, page_size)?;
        self.read(|conn| query::movie_page(conn, &filter, request))
    }

    /// Case-insensitive title substring search.
    pub fn search_movies(
        &self,
        term: &str,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<Movie>, CatalogError> {
        let request = query::page_request(page_number, page_size)?;
        let filter = query::title_filter(term)?;
        self.read(|conn| query::movie_page(conn, &filter, request))
    }

    /// Apply a partial update. Returns `None` if the movie does not exist.
    pub fn update_movie(&self, id: i64, patch: MoviePatch) -> Result<Option<Movie>, CatalogError> {
        validation::validate_movie_patch(&patch)?;
        self.write(|conn| {
            let Some(mut movie) = db::find_movie(conn, id)? else {
                return Ok(None);
            };
            if patch.is_empty() {
                return Ok(Some(movie));
            }

            let scalars_changed = patch.touches_scalars();
            let MoviePatch {
                title,
                release_year,
                duration,
                genres,
                actors,
            } = patch;

            if let Some(title) = title {
                movie.title = title;
            }
            if let Some(year) = release_year {
                movie.release_year = year;
            }
            if let Some(duration) = duration {
                movie.duration = duration;
            }
            if scalars_changed {
                db::update_movie(conn, &movie)?;
            }
            if let Some(genres) = genres {
                association::replace_genres(conn, id, &genres)?;
            }
            if let Some(actors) = actors {
                association::replace_actors(conn, id, &actors)?;
            }

            db::find_movie(conn, id).map_err(Into::into)
        })
    }

    pub fn delete_movie(&self, id: i64, force: bool) -> Result<(), CatalogError> {
        self.write(|conn| association::delete(conn, EntityRef::Movie(id), force))
    }

    /// Genres of a movie. Empty when the movie does not exist.
    pub fn genres_for_movie(&self, id: i64) -> Result<Vec<Genre>, CatalogError> {
        Ok(db::genres_for_movie(&self.conn, id)?)
    }

    /// Actors of a movie. Empty when the movie does not exist.
    pub fn actors_for_movie(&self, id: i64) -> Result<Vec<Actor>, CatalogError> {
        Ok(db::actors_for_movie(&self.conn, id)?)
    }

    // ── Genres ──────────────────────────────────────────────────────────────

    pub fn create_genre(&self, name: &str) -> Result<Genre, CatalogError> {
        self.write(|conn| {
            let name = uniqueness::ensure_unique_for_create(conn, name)?;
            let id = db::insert_genre(conn, &name)?;
            log::debug!("Created genre '{name}' (id {id})");
            Ok(Genre { id, name })
        })
    }

    pub fn find_genre(&self, id: i64) -> Result<Genre, CatalogError> {
        db::find_genre(&self.conn, id)?.ok_or(CatalogError::not_found(EntityKind::Genre, id))
    }

    /// Look up a genre by name, ignoring case and surrounding whitespace.
    pub fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, CatalogError> {
        Ok(db::find_genre_by_name(&self.conn, name.trim())?)
    }

    pub fn list_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(db::list_genres(&self.conn, None)?)
    }

    pub fn genre_page(&self, page_number: i64, page_size: i64) -> Result<Page<Genre>, CatalogError> {
        let request = query::page_request(page_number, page_size)?;
        self.read(|conn| query::genre_page(conn, request))
    }

    /// Rename a genre. Returns `None` if the genre does not exist.
    pub fn rename_genre(&self, id: i64, name: &str) -> Result<Option<Genre>, CatalogError> {
        self.write(|conn| {
            let Some(current) = db::find_genre(conn, id)? else {
                return Ok(None);
            };
            let name = uniqueness::ensure_unique_for_rename(conn, &current, name)?;
            db::rename_genre(conn, id, &name)?;
            Ok(Some(Genre { id, name }))
        })
    }

    pub fn delete_genre(&self, id: i64, force: bool) -> Result<(), CatalogError> {
        self.write(|conn| association::delete(conn, EntityRef::Genre(id), force))
    }

    /// Movies tagged with a genre. Empty when the genre does not exist.
    pub fn movies_for_genre(&self, id: i64) -> Result<Vec<Movie>, CatalogError> {
        Ok(db::movies_for_genre(&self.conn, id)?)
    }

    // ── Actors ──────────────────────────────────────────────────────────────

    pub fn create_actor(&self, new: NewActor) -> Result<Actor, CatalogError> {
        validation::validate_new_actor(&new)?;
        self.write(|conn| {
            let id = db::insert_actor(conn, &new)?;
            log::debug!("Created actor '{}' (id {id})", new.name);
            Ok(Actor {
                id,
                name: new.name,
                birth_date: new.birth_date,
            })
        })
    }

    pub fn find_actor(&self, id: i64) -> Result<Actor, CatalogError> {
        db::find_actor(&self.conn, id)?.ok_or(CatalogError::not_found(EntityKind::Actor, id))
    }

    /// All actors, optionally only those whose name contains `name`.
    pub fn list_actors(&self, name: Option<&str>) -> Result<Vec<Actor>, CatalogError> {
        let name = query::actor_name_filter(name);
        Ok(db::list_actors(&self.conn, name, None)?)
    }

    pub fn actor_page(
        &self,
        name: Option<&str>,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<Actor>, CatalogError> {
        let request = query::page_request(page_number, page_size)?;
        self.read(|conn| query::actor_page(conn, name, request))
    }

    /// Apply a partial update. Returns `None` if the actor does not exist.
    pub fn update_actor(&self, id: i64, patch: ActorPatch) -> Result<Option<Actor>, CatalogError> {
        validation::validate_actor_patch(&patch)?;
        self.write(|conn| {
            let Some(mut actor) = db::find_actor(conn, id)? else {
                return Ok(None);
            };
            if patch.is_empty() {
                return Ok(Some(actor));
            }
            if let Some(name) = patch.name {
                actor.name = name;
            }
            if let Some(birth_date) = patch.birth_date {
                actor.birth_date = birth_date;
            }
            db::update_actor(conn, &actor)?;
            Ok(Some(actor))
        })
    }

    pub fn delete_actor(&self, id: i64, force: bool) -> Result<(), CatalogError> {
        self.write(|conn| association::delete(conn, EntityRef::Actor(id), force))
    }

    /// Movies an actor appears in. Empty when the actor does not exist.
    pub fn movies_for_actor(&self, id: i64) -> Result<Vec<Movie>, CatalogError> {
        Ok(db::movies_for_actor(&self.conn, id)?)
    }

    // ── Catalog ─────────────────────────────────────────────────────────────

    pub fn stats(&self) -> Result<CatalogStats, CatalogError> {
        self.read(|conn| Ok(db::catalog_stats(conn)?))
    }

    /// Seed an empty catalog in one transaction.
    pub fn seed(&self, data: &SeedData) -> Result<SeedStats, CatalogError> {
        self.write(|conn| seed::seed_catalog(conn, data))
    }
}

fn load_movie(conn: &Connection, id: i64) -> Result<Movie, CatalogError> {
    db::find_movie(conn, id)?.ok_or(CatalogError::not_found(EntityKind::Movie, id))
}
